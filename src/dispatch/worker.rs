use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use crate::client::{InlineSearchClient, ResourceResponse};
use crate::types::ResourceType;

/// Commands understood by the background inline-search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
    /// Fan the term out across the listed resource types.
    Query {
        /// Generation token correlating responses with the originating query.
        token: u64,
        term: String,
        resources: Vec<ResourceType>,
    },
    /// Stop the background worker thread.
    Shutdown,
}

/// Per-resource-type completion emitted back to the UI layer.
#[derive(Debug)]
pub(crate) struct InlineResult {
    /// Token matching the [`SearchCommand::Query`] that produced this result.
    pub(crate) token: u64,
    pub(crate) resource_type: ResourceType,
    pub(crate) outcome: InlineOutcome,
}

#[derive(Debug)]
pub(crate) enum InlineOutcome {
    Success(ResourceResponse),
    /// The request failed; the resource type degrades to "no results".
    Failed,
}

/// Launch the background worker thread and return its communication channels.
///
/// The shared counter holds the most recently issued token so the worker can
/// abandon a superseded fan-out between per-resource calls.
pub(crate) fn spawn(
    client: Arc<dyn InlineSearchClient>,
) -> (
    Sender<SearchCommand>,
    Receiver<InlineResult>,
    Arc<AtomicU64>,
) {
    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let latest_token = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_token);

    thread::spawn(move || worker_loop(client.as_ref(), &command_rx, &result_tx, &thread_latest));

    (command_tx, result_rx, latest_token)
}

fn worker_loop(
    client: &dyn InlineSearchClient,
    command_rx: &Receiver<SearchCommand>,
    result_tx: &Sender<InlineResult>,
    latest_token: &AtomicU64,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(client, result_tx, latest_token, command) {
            break;
        }
    }
}

fn handle_command(
    client: &dyn InlineSearchClient,
    result_tx: &Sender<InlineResult>,
    latest_token: &AtomicU64,
    command: SearchCommand,
) -> bool {
    match command {
        SearchCommand::Query {
            token,
            term,
            resources,
        } => {
            for resource_type in resources {
                if latest_token.load(AtomicOrdering::Acquire) != token {
                    debug!(token, "abandoning superseded inline fan-out");
                    break;
                }
                let outcome = match client.search(resource_type, &term) {
                    Ok(response) => InlineOutcome::Success(response),
                    Err(err) => {
                        warn!(%resource_type, "inline search request failed: {err:#}");
                        InlineOutcome::Failed
                    }
                };
                let sent = result_tx.send(InlineResult {
                    token,
                    resource_type,
                    outcome,
                });
                if sent.is_err() {
                    return false;
                }
            }
            true
        }
        SearchCommand::Shutdown => false,
    }
}
