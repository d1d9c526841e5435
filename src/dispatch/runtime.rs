//! Debounce and token bookkeeping for the inline-search pipeline.
//!
//! The [`InlineDispatcher`] sits between raw keystrokes and the background
//! worker: it collapses keystroke bursts into a single query, stamps each
//! fired query with a fresh generation token, and discards any response that
//! no longer matches the current token.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::worker::{self, InlineOutcome, InlineResult, SearchCommand};
use crate::client::InlineSearchClient;
use crate::types::{ResourceType, SearchResults};

/// A query waiting out the debounce window.
#[derive(Debug)]
struct PendingQuery {
    term: String,
    deadline: Instant,
}

/// Schedules, fires, and reconciles inline-search queries.
pub struct InlineDispatcher {
    tx: Sender<SearchCommand>,
    rx: Receiver<InlineResult>,
    latest_token: Arc<AtomicU64>,
    resources: Vec<ResourceType>,
    interval: Duration,
    next_token: u64,
    current_token: Option<u64>,
    outstanding: usize,
    pending: Option<PendingQuery>,
}

impl InlineDispatcher {
    /// Spawn a background worker around `client` and wire a dispatcher to it.
    ///
    /// `resources` is the ordered set of resource types each fired query fans
    /// out to; disabled types are simply absent from it.
    #[must_use]
    pub fn with_client(
        client: Arc<dyn InlineSearchClient>,
        resources: Vec<ResourceType>,
        interval: Duration,
    ) -> Self {
        let (tx, rx, latest_token) = worker::spawn(client);
        Self::new(tx, rx, latest_token, resources, interval)
    }

    pub(crate) fn new(
        tx: Sender<SearchCommand>,
        rx: Receiver<InlineResult>,
        latest_token: Arc<AtomicU64>,
        resources: Vec<ResourceType>,
        interval: Duration,
    ) -> Self {
        Self {
            tx,
            rx,
            latest_token,
            resources,
            interval,
            next_token: 0,
            current_token: None,
            outstanding: 0,
            pending: None,
        }
    }

    /// Schedule a query for `term`, replacing any not-yet-fired schedule.
    pub fn schedule(&mut self, term: &str, now: Instant) {
        self.pending = Some(PendingQuery {
            term: term.to_string(),
            deadline: now + self.interval,
        });
    }

    /// Discard the pending schedule and invalidate any in-flight query so
    /// late responses are ignored. Used when the term empties out.
    pub fn clear(&mut self) {
        self.pending = None;
        if self.current_token.take().is_some() {
            self.next_token = self.next_token.wrapping_add(1);
            self.latest_token
                .store(self.next_token, AtomicOrdering::Release);
        }
        self.outstanding = 0;
    }

    /// Fire the pending query if its quiescence window has elapsed.
    ///
    /// Returns true when a query was dispatched.
    pub fn tick(&mut self, now: Instant, results: &mut SearchResults) -> bool {
        let Some(pending) = self.pending.take_if(|p| now >= p.deadline) else {
            return false;
        };

        self.next_token = self.next_token.wrapping_add(1);
        let token = self.next_token;
        self.current_token = Some(token);
        self.outstanding = self.resources.len();
        self.latest_token.store(token, AtomicOrdering::Release);
        results.begin_loading(&self.resources);

        debug!(token, term = %pending.term, "firing inline search");
        let _ = self.tx.send(SearchCommand::Query {
            token,
            term: pending.term,
            resources: self.resources.clone(),
        });
        true
    }

    /// Drain completed responses, applying only those that still carry the
    /// current token. Stale responses are discarded without touching state.
    pub fn pump(&mut self, results: &mut SearchResults) {
        loop {
            match self.rx.try_recv() {
                Ok(result) => self.handle_result(result, results),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    fn handle_result(&mut self, result: InlineResult, results: &mut SearchResults) {
        if Some(result.token) != self.current_token {
            trace!(
                token = result.token,
                resource = %result.resource_type,
                "discarding stale inline response"
            );
            return;
        }
        self.outstanding = self.outstanding.saturating_sub(1);
        match result.outcome {
            InlineOutcome::Success(response) => {
                results.apply(result.resource_type, response.results, response.total_results);
            }
            InlineOutcome::Failed => results.fail(result.resource_type),
        }
    }

    /// True while a fired query still has responses outstanding.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.current_token.is_some() && self.outstanding > 0
    }

    /// True while a keystroke burst is waiting out the debounce window.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Ask the background worker to exit.
    pub fn shutdown(&self) {
        let _ = self.tx.send(SearchCommand::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::client::ResourceResponse;
    use crate::types::{Resource, TableResource};

    struct Harness {
        dispatcher: InlineDispatcher,
        command_rx: Receiver<SearchCommand>,
        result_tx: Sender<InlineResult>,
        results: SearchResults,
    }

    fn harness(resources: Vec<ResourceType>) -> Harness {
        let (command_tx, command_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let latest = Arc::new(AtomicU64::new(0));
        let dispatcher = InlineDispatcher::new(
            command_tx,
            result_rx,
            latest,
            resources,
            Duration::from_millis(300),
        );
        Harness {
            dispatcher,
            command_rx,
            result_tx,
            results: SearchResults::new(),
        }
    }

    fn table_hit(name: &str) -> Resource {
        Resource::Table(TableResource {
            name: name.into(),
            ..TableResource::default()
        })
    }

    fn success(token: u64, resource_type: ResourceType, name: &str) -> InlineResult {
        InlineResult {
            token,
            resource_type,
            outcome: InlineOutcome::Success(ResourceResponse {
                results: vec![table_hit(name)],
                total_results: 1,
            }),
        }
    }

    #[test]
    fn keystroke_burst_fires_one_query_with_the_last_term() {
        let mut h = harness(vec![ResourceType::Table]);
        let start = Instant::now();

        h.dispatcher.schedule("r", start);
        h.dispatcher.schedule("ri", start + Duration::from_millis(100));
        h.dispatcher.schedule("rid", start + Duration::from_millis(200));

        // Still inside the quiescence window of the last keystroke.
        assert!(!h.dispatcher.tick(start + Duration::from_millis(400), &mut h.results));

        assert!(h.dispatcher.tick(start + Duration::from_millis(500), &mut h.results));
        match h.command_rx.try_recv().expect("one command fired") {
            SearchCommand::Query { term, token, .. } => {
                assert_eq!(term, "rid");
                assert_eq!(token, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(h.command_rx.try_recv().is_err(), "burst must collapse to one query");
    }

    #[test]
    fn stale_response_arriving_late_is_discarded() {
        let mut h = harness(vec![ResourceType::Table]);
        let start = Instant::now();

        h.dispatcher.schedule("first", start);
        assert!(h.dispatcher.tick(start + Duration::from_millis(300), &mut h.results));
        h.dispatcher.schedule("second", start + Duration::from_millis(400));
        assert!(h.dispatcher.tick(start + Duration::from_millis(700), &mut h.results));

        // The newer response lands first, the older one afterwards.
        h.result_tx
            .send(success(2, ResourceType::Table, "second_table"))
            .expect("receiver alive");
        h.result_tx
            .send(success(1, ResourceType::Table, "first_table"))
            .expect("receiver alive");
        h.dispatcher.pump(&mut h.results);

        let slice = h.results.slice(ResourceType::Table).expect("slice");
        assert_eq!(slice.results, vec![table_hit("second_table")]);
        assert!(!slice.is_loading);
    }

    #[test]
    fn failed_response_clears_loading_without_results() {
        let mut h = harness(vec![ResourceType::Table, ResourceType::User]);
        let start = Instant::now();

        h.dispatcher.schedule("term", start);
        assert!(h.dispatcher.tick(start + Duration::from_millis(300), &mut h.results));
        assert!(h.results.slice(ResourceType::User).expect("slice").is_loading);

        h.result_tx
            .send(InlineResult {
                token: 1,
                resource_type: ResourceType::User,
                outcome: InlineOutcome::Failed,
            })
            .expect("receiver alive");
        h.result_tx
            .send(success(1, ResourceType::Table, "events"))
            .expect("receiver alive");
        h.dispatcher.pump(&mut h.results);

        let user = h.results.slice(ResourceType::User).expect("slice");
        assert!(!user.is_loading);
        assert!(user.results.is_empty());
        // The failure stays contained to its own resource type.
        let table = h.results.slice(ResourceType::Table).expect("slice");
        assert_eq!(table.results.len(), 1);
        assert!(!h.dispatcher.is_in_flight());
    }

    #[test]
    fn clearing_invalidates_an_in_flight_query() {
        let mut h = harness(vec![ResourceType::Table]);
        let start = Instant::now();

        h.dispatcher.schedule("term", start);
        assert!(h.dispatcher.tick(start + Duration::from_millis(300), &mut h.results));
        h.dispatcher.clear();
        h.results.clear();

        h.result_tx
            .send(success(1, ResourceType::Table, "late"))
            .expect("receiver alive");
        h.dispatcher.pump(&mut h.results);

        assert!(h.results.slice(ResourceType::Table).is_none());
        assert!(!h.dispatcher.is_in_flight());
    }

    #[test]
    fn rescheduling_before_the_deadline_replaces_the_pending_query() {
        let mut h = harness(vec![ResourceType::Table]);
        let start = Instant::now();

        h.dispatcher.schedule("old", start);
        assert!(h.dispatcher.has_pending());
        h.dispatcher.schedule("new", start + Duration::from_millis(50));

        assert!(h.dispatcher.tick(start + Duration::from_millis(350), &mut h.results));
        match h.command_rx.try_recv().expect("command fired") {
            SearchCommand::Query { term, .. } => assert_eq!(term, "new"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
