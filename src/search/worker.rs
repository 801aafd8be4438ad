use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::SearchError;
use crate::track::Track;

use super::provider::{SearchProvider, tracks_from_hits};

/// Deadline for a single provider call.
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

enum SearchCmd {
    Query(String),
    Quit,
}

/// Outcome of one submitted search, delivered on the interaction thread.
#[derive(Debug)]
pub enum SearchEvent {
    /// Ranked tracks for `query`, in provider order.
    Results { query: String, tracks: Vec<Track> },
    Failed { query: String, error: SearchError },
}

/// Handle to the search thread.
///
/// Commands go in over a channel and outcomes come back as
/// [`SearchEvent`]s; the worker itself never touches shared state, so all
/// mutations happen on the thread that drains the events. There is no
/// cancellation: a result for an older query is still delivered, and the
/// latest arrival wins.
pub struct SearchWorker {
    tx: Sender<SearchCmd>,
    rx: Receiver<SearchEvent>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl SearchWorker {
    pub fn new(provider: Box<dyn SearchProvider>) -> Self {
        Self::with_timeout(provider, DEFAULT_SEARCH_TIMEOUT)
    }

    pub fn with_timeout(provider: Box<dyn SearchProvider>, timeout: Duration) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<SearchCmd>();
        let (event_tx, event_rx) = mpsc::channel::<SearchEvent>();
        let join = spawn_search_thread(provider, cmd_rx, event_tx, timeout);

        Self {
            tx: cmd_tx,
            rx: event_rx,
            join: Mutex::new(Some(join)),
        }
    }

    /// Queue a search. An empty or whitespace query is rejected here,
    /// before anything reaches the provider.
    pub fn submit(&self, query: &str) -> Result<(), SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidQuery);
        }
        self.tx
            .send(SearchCmd::Query(query.to_string()))
            .map_err(|_| SearchError::Provider("search worker is gone".to_string()))
    }

    /// Non-blocking poll for the next pending event.
    pub fn try_recv(&self) -> Option<SearchEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SearchEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(SearchCmd::Quit);
        if let Ok(mut join) = self.join.lock() {
            if let Some(handle) = join.take() {
                let _ = handle.join();
            }
        }
    }
}

fn spawn_search_thread(
    provider: Box<dyn SearchProvider>,
    rx: Receiver<SearchCmd>,
    tx: Sender<SearchEvent>,
    timeout: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(cmd) = rx.recv() {
            let query = match cmd {
                SearchCmd::Quit => break,
                SearchCmd::Query(q) => q,
            };

            // The provider call itself cannot be interrupted; a response
            // that comes back past the deadline is reported as a timeout
            // and its results are dropped.
            let started = Instant::now();
            let outcome = provider.query(&query);
            let event = if started.elapsed() > timeout {
                SearchEvent::Failed {
                    query,
                    error: SearchError::Timeout(timeout),
                }
            } else {
                match outcome {
                    Ok(hits) => SearchEvent::Results {
                        query,
                        tracks: tracks_from_hits(hits),
                    },
                    Err(error) => SearchEvent::Failed { query, error },
                }
            };

            if tx.send(event).is_err() {
                break;
            }
        }
    })
}
