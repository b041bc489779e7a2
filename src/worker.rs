//! src/worker.rs
use crate::counter;
use crate::error::CountError;
use crate::word_count::WordCount;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

#[derive(Clone, PartialEq, Debug)]
pub struct WorkerId(Uuid);

impl WorkerId {
    pub fn new() -> Self {
        WorkerId(Uuid::new_v4())
    }

}

impl Default for WorkerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One distinct word found by a worker and how often it occurred.
#[derive(Debug, PartialEq, Eq)]
pub struct Contribution {
    pub word: String,
    pub count: usize,
}

/// Sent exactly once per worker, after its last [`Contribution`].
#[derive(Debug)]
pub struct Completion {
    pub worker_id: WorkerId,
    pub path: PathBuf,
    pub failure: Option<CountError>,
}

/// How a worker turns a path into a local map.
pub type CountFn = fn(&Path) -> (WordCount, Result<usize, CountError>);

/// Counts a single file and streams the result to the aggregator.
#[derive(Debug)]
pub struct Worker {
    id: WorkerId,
    path: PathBuf,
    count_fn: CountFn,
}

impl Worker {
    pub fn new(path: PathBuf) -> Self {
        Self::with_counter(path, counter::count)
    }

    pub fn with_counter(path: PathBuf, count_fn: CountFn) -> Self {
        Worker {
            id: WorkerId::new(),
            path,
            count_fn,
        }
    }

    pub fn id(&self) -> &WorkerId {
        &self.id
    }

    pub fn spawn(
        self,
        contributions: mpsc::Sender<Contribution>,
        completions: mpsc::Sender<Completion>,
    ) -> JoinHandle<()> {
        let span = tracing::info_span!(
            "Run worker",
            worker_id = %self.id,
            path = %self.path.display()
        );
        tokio::spawn(self.run(contributions, completions).instrument(span))
    }

    /// Count the file, send every entry of the local map, then report
    /// completion. Completion is reported even when counting failed.
    pub async fn run(
        self,
        contributions: mpsc::Sender<Contribution>,
        completions: mpsc::Sender<Completion>,
    ) {
        let (words, failure) = self.count().await;

        for (word, count) in words {
            if contributions
                .send(Contribution { word, count })
                .await
                .is_err()
            {
                tracing::error!("Aggregator stopped receiving contributions");
                break;
            }
        }
        drop(contributions);

        let completion = Completion {
            worker_id: self.id,
            path: self.path,
            failure,
        };
        if completions.send(completion).await.is_err() {
            tracing::error!("Aggregator stopped receiving completions");
        }
    }

    async fn count(&self) -> (WordCount, Option<CountError>) {
        let path = self.path.clone();
        let count_fn = self.count_fn;
        match tokio::task::spawn_blocking(move || count_fn(&path)).await {
            Ok((words, Ok(counted))) => {
                tracing::debug!(counted, distinct = words.len(), "Counted file");
                (words, None)
            }
            Ok((words, Err(e))) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    kept = words.total(),
                    "Failed to count file"
                );
                (words, Some(e))
            }
            Err(source) => {
                let e = CountError::Worker {
                    path: self.path.clone(),
                    source,
                };
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Counting task failed"
                );
                (WordCount::new(), Some(e))
            }
        }
    }
}
