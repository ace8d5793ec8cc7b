// crates/opsearch-client/src/controller.rs

//! The controller task and its handle.
//!
//! One task owns the [`SearchSession`] and multiplexes three event sources:
//! commands from handles, the armed debounce deadline, and resolved lookup
//! responses. Derivations happen inside the session, synchronously per
//! event, so every published snapshot is internally consistent.
//!
//! In-flight requests are never cancelled. Responses are applied in arrival
//! order, meaning the last response to land wins even when it answers a
//! query that has since been superseded. That matches the upstream client's
//! behavior and is covered by a test rather than "fixed".

use std::future::pending;
use std::sync::Arc;

use opsearch_core::{OperationalPoint, SearchSession, SessionConfig, SessionSnapshot};
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::error::ClientError;
use crate::fetch::PointSource;

enum Command {
    SetQuery(String),
    SetCodeFilter(Option<String>),
    Select(usize),
}

/// Handle to a running controller.
///
/// Mutators mirror the component boundary: [`set_query`] feeds the
/// debounced fetch path, [`set_code_filter`] narrows already-fetched data
/// immediately, [`select`] marks a displayed row. Handles are cheap to
/// clone; once every handle is dropped the controller task drains its
/// mailbox and exits, taking any armed debounce with it.
///
/// [`set_query`]: SearchHandle::set_query
/// [`set_code_filter`]: SearchHandle::set_code_filter
/// [`select`]: SearchHandle::select
#[derive(Debug, Clone)]
pub struct SearchHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl SearchHandle {
    pub fn set_query(&self, query: impl Into<String>) -> Result<(), ClientError> {
        self.send(Command::SetQuery(query.into()))
    }

    pub fn set_code_filter(&self, code_filter: Option<String>) -> Result<(), ClientError> {
        self.send(Command::SetCodeFilter(code_filter))
    }

    pub fn select(&self, index: usize) -> Result<(), ClientError> {
        self.send(Command::Select(index))
    }

    /// Receiver over point-in-time session snapshots; one notification per
    /// state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    fn send(&self, command: Command) -> Result<(), ClientError> {
        self.commands.send(command).map_err(|_| ClientError::Closed)
    }
}

/// Spawns the event loop that drives a [`SearchSession`].
pub struct SearchController;

impl SearchController {
    /// Starts a controller task over `source` and returns its handle.
    ///
    /// A non-empty `initial_query` is treated as already settled: the
    /// lookup fires immediately instead of waiting out the debounce, the
    /// same way the initial render of the upstream component behaves.
    pub fn spawn<S: PointSource>(source: S, config: SearchConfig) -> SearchHandle {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let session = SearchSession::new(SessionConfig {
            initial_query: config.initial_query,
            initial_code_filter: config.initial_code_filter,
        });
        let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());

        let worker = Worker {
            session,
            source: Arc::new(source),
            debounce: Debouncer::new(config.debounce),
            last_committed: None,
            commands: command_rx,
            snapshots: snapshot_tx,
        };
        tokio::spawn(worker.run());

        SearchHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
        }
    }
}

struct Worker<S: PointSource> {
    session: SearchSession,
    source: Arc<S>,
    debounce: Debouncer<String>,
    /// Last query value that went through [`Worker::commit`]; committing
    /// the same value twice in a row is a no-op, matching the upstream
    /// "effect only re-runs when the debounced value changes" semantics.
    last_committed: Option<String>,
    commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl<S: PointSource> Worker<S> {
    async fn run(mut self) {
        let (response_tx, mut response_rx) = mpsc::unbounded_channel::<Vec<OperationalPoint>>();

        let initial_query = self.session.query().to_string();
        if !initial_query.is_empty() {
            self.commit(initial_query, &response_tx);
        }

        loop {
            let deadline = self.debounce.deadline();
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::SetQuery(query)) => {
                        self.session.set_query(query.clone());
                        self.debounce.submit(query);
                        self.publish();
                    }
                    Some(Command::SetCodeFilter(code_filter)) => {
                        self.session.set_code_filter(code_filter);
                        self.publish();
                    }
                    Some(Command::Select(index)) => {
                        self.session.select(index);
                        self.publish();
                    }
                    None => break,
                },
                _ = deadline_elapsed(deadline), if deadline.is_some() => {
                    if let Some(query) = self.debounce.take() {
                        self.commit(query, &response_tx);
                    }
                }
                Some(results) = response_rx.recv() => {
                    debug!(count = results.len(), "applying lookup response");
                    self.session.apply_results(results);
                    self.publish();
                }
            }
        }
    }

    /// Handles a settled query value.
    ///
    /// Empty clears the results synchronously without touching the network;
    /// anything else fires exactly one request. The spawned task reports
    /// its outcome over `responses`, already degraded to an empty list on
    /// failure.
    fn commit(&mut self, query: String, responses: &mpsc::UnboundedSender<Vec<OperationalPoint>>) {
        if self.last_committed.as_deref() == Some(query.as_str()) {
            return;
        }
        if query.is_empty() {
            debug!("debounced query empty, clearing results");
            self.last_committed = Some(query);
            self.session.clear_results();
            self.publish();
            return;
        }

        debug!(query = %query, "debounce settled, dispatching lookup");
        let source = Arc::clone(&self.source);
        let responses = responses.clone();
        let task_query = query.clone();
        self.last_committed = Some(query);
        tokio::spawn(async move {
            let results = match source.search(&task_query).await {
                Ok(results) => results,
                Err(error) => {
                    debug!(query = %task_query, error = %error, "lookup failed, degrading to empty results");
                    Vec::new()
                }
            };
            // Receiver gone means the controller stopped; nothing to do.
            let _ = responses.send(results);
        });
    }

    fn publish(&self) {
        trace!("publishing session snapshot");
        let _ = self.snapshots.send(self.session.snapshot());
    }
}

async fn deadline_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => pending().await,
    }
}
