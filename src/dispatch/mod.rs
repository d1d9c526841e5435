//! Debounced inline-search dispatch.
//!
//! A keystroke burst collapses into at most one live fan-out across the
//! enabled resource types. Responses are reconciled with a generation token:
//! only results carrying the most recently issued token may mutate visible
//! state, so out-of-order network completions are harmless.

mod runtime;
mod worker;

pub use runtime::InlineDispatcher;

use std::time::Duration;

/// Quiescence window before a keystroke burst fires a request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
