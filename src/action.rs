//! Action shapes exposed to the embedding container.
//!
//! The search core never touches shared application state or the address bar
//! itself; it hands finalized decisions to an injected [`ActionSink`] and the
//! container wires them into its store and router.

use crate::types::ResourceType;

/// Dispatchable outcomes of user interaction with the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Explicit full-text submission of a validated term.
    SubmitSearch { term: String },

    /// The user narrowed the search to one resource type, either by clicking
    /// a suggestion or a section's "view all" footer. `update_url` signals
    /// that the route should change to reflect the scoped search; when false
    /// the dispatch is scoping-only.
    SelectInlineResult {
        resource_type: ResourceType,
        term: String,
        update_url: bool,
    },
}

/// Receiver for actions emitted by the search bar.
pub trait ActionSink {
    fn dispatch(&self, action: Action);
}

impl<T: ActionSink + ?Sized> ActionSink for std::sync::Arc<T> {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action);
    }
}
