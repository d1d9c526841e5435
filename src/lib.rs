//! Search-query orchestration core for a data-discovery portal.
//!
//! The crate models the interactive search bar of a discovery portal front
//! end: syntax validation of `category:value` terms, a debounced typeahead
//! pipeline fanning each keystroke burst out across heterogeneous resource
//! searches, last-request-wins reconciliation of out-of-order responses,
//! aggregation of raw hits into render-ready suggestion sections, and the
//! visibility rules of the suggestion panel. Rendering, routing, and the
//! REST layer are collaborators injected through [`client::InlineSearchClient`]
//! and [`action::ActionSink`].

pub mod action;
pub mod aggregate;
pub mod app_dirs;
pub mod client;
pub mod dispatch;
pub mod logging;
pub mod pointer;
pub mod settings;
pub mod term;
pub mod types;
pub mod visibility;

mod search_bar;

pub use action::{Action, ActionSink};
pub use aggregate::{INLINE_SEARCH_SOURCE, build_sections, build_suggestions};
pub use client::{InlineSearchClient, ResourceResponse};
pub use dispatch::{DEFAULT_DEBOUNCE, InlineDispatcher};
pub use pointer::{PointerBus, PointerEvent, PointerSubscription};
pub use search_bar::SearchBar;
pub use settings::{DisplaySettings, SearchSettings, SourceDisplay};
pub use term::{TermError, validate};
pub use types::{
    Resource, ResourceType, SearchResultSlice, SearchResults, SuggestedResult, SuggestionSection,
};
pub use visibility::{InteractionEvent, Visibility};
