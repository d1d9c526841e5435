//! The search-bar control: composition root for the orchestration core.
//!
//! A [`SearchBar`] owns the authoritative term, the typeahead visibility
//! machine, the debounced dispatcher, and the aggregated results. The
//! embedding container drives it with input, focus, and clock events, reads
//! the derived sections for rendering, and receives finalized decisions
//! through its [`ActionSink`].

use std::sync::Arc;
use std::time::Instant;

use crate::action::{Action, ActionSink};
use crate::aggregate;
use crate::client::InlineSearchClient;
use crate::dispatch::InlineDispatcher;
use crate::pointer::{PointerBus, PointerSubscription};
use crate::settings::SearchSettings;
use crate::term::{self, TermError};
use crate::types::{ResourceType, SearchResults, SuggestionSection};
use crate::visibility::{InteractionEvent, Visibility};

/// Interactive search control for the discovery portal's header.
pub struct SearchBar {
    term: String,
    subtext: Option<String>,
    visibility: Visibility,
    dispatcher: InlineDispatcher,
    results: SearchResults,
    settings: SearchSettings,
    sink: Box<dyn ActionSink>,
    pointer: PointerSubscription,
}

impl SearchBar {
    /// Mount a search bar against the portal's search client and action sink.
    ///
    /// The pointer subscription taken here is released when the control is
    /// dropped, scoping outside-click detection to the control's lifetime.
    #[must_use]
    pub fn mount(
        client: Arc<dyn InlineSearchClient>,
        sink: Box<dyn ActionSink>,
        settings: SearchSettings,
        bus: &PointerBus,
    ) -> Self {
        crate::logging::initialize();
        let dispatcher =
            InlineDispatcher::with_client(client, settings.enabled_resources(), settings.debounce);
        Self {
            term: String::new(),
            subtext: None,
            visibility: Visibility::Hidden,
            dispatcher,
            results: SearchResults::new(),
            settings,
            sink,
            pointer: bus.subscribe(),
        }
    }

    /// The authoritative (lowercased) term currently in the input box.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Helper text shown under the input after a failed validation.
    #[must_use]
    pub fn subtext(&self) -> Option<&str> {
        self.subtext.as_deref()
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Render-ready panel sections for the current results.
    #[must_use]
    pub fn sections(&self) -> Vec<SuggestionSection> {
        aggregate::build_sections(&self.results, &self.settings)
    }

    /// True while any inline request is outstanding or scheduled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.dispatcher.has_pending() || self.dispatcher.is_in_flight()
    }

    /// Record a keystroke. An emptied term synchronously clears inline state;
    /// otherwise a query is (re)scheduled behind the debounce window.
    pub fn on_input_change(&mut self, raw: &str, now: Instant) {
        self.term = raw.to_lowercase();
        self.subtext = None;

        let empty = self.term.trim().is_empty();
        if empty {
            self.dispatcher.clear();
            self.results.clear();
        } else {
            self.dispatcher.schedule(&self.term, now);
        }
        self.visibility = self.visibility.on_event(InteractionEvent::TermEdited, empty);
    }

    /// Focus landed inside the control.
    pub fn on_focus(&mut self) {
        self.visibility = self
            .visibility
            .on_event(InteractionEvent::FocusInside, self.term.trim().is_empty());
    }

    /// Explicitly clear the term and all inline state.
    pub fn on_clear(&mut self) {
        self.term.clear();
        self.subtext = None;
        self.dispatcher.clear();
        self.results.clear();
        self.visibility = self.visibility.on_event(InteractionEvent::Cleared, true);
    }

    /// Advance time-driven work: pointer events, the debounce deadline, and
    /// any completed responses. Call once per frame from the event loop.
    pub fn tick(&mut self, now: Instant) {
        while let Some(event) = self.pointer.try_recv() {
            self.visibility = self.visibility.on_event(
                InteractionEvent::PointerDown {
                    inside: event.inside,
                },
                self.term.trim().is_empty(),
            );
        }
        self.dispatcher.tick(now, &mut self.results);
        self.dispatcher.pump(&mut self.results);
    }

    /// Submit the full-text search.
    ///
    /// # Errors
    ///
    /// Returns the validation failure when the term is rejected; the failure
    /// is also surfaced via [`Self::subtext`] and nothing is dispatched.
    pub fn on_submit(&mut self) -> Result<(), TermError> {
        let snapshot = self.term.trim().to_string();
        if let Err(err) = term::validate(&snapshot) {
            self.subtext = Some(err.to_string());
            return Err(err);
        }

        self.sink.dispatch(Action::SubmitSearch { term: snapshot });
        self.dispatcher.clear();
        self.results.clear();
        self.visibility = self.visibility.on_event(InteractionEvent::Submitted, false);
        Ok(())
    }

    /// A suggestion or a section's "view all" footer was chosen.
    pub fn on_suggestion_select(&mut self, resource_type: ResourceType, update_url: bool) {
        self.sink.dispatch(Action::SelectInlineResult {
            resource_type,
            term: self.term.trim().to_string(),
            update_url,
        });
        self.dispatcher.clear();
        self.results.clear();
        self.visibility = self
            .visibility
            .on_event(InteractionEvent::SuggestionSelected, false);
    }
}

impl Drop for SearchBar {
    fn drop(&mut self) {
        self.dispatcher.shutdown();
    }
}
