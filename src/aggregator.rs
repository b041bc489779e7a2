//! src/aggregator.rs
use crate::configuration::AggregatorSettings;
use crate::word_count::WordCount;
use crate::worker::{Completion, Contribution, Worker};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// What happened during one aggregation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregateStats {
    /// Workers spawned, one per file.
    pub workers: usize,
    /// Contributions merged into the result.
    pub contributions: usize,
    /// Files whose counter reported an error, in completion order.
    pub failed_files: Vec<PathBuf>,
}

/// Fans files out to one worker each and folds every contribution into a
/// single [`WordCount`].
///
/// The result map is only touched by the collecting loop in [`Aggregator::run`];
/// workers own their local maps and hand entries over through a channel.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    channel_capacity: usize,
}

impl Aggregator {
    pub fn new(channel_capacity: usize) -> Self {
        Aggregator { channel_capacity }
    }

    pub fn from_settings(settings: &AggregatorSettings) -> Self {
        Self::new(settings.channel_capacity)
    }

    fn capacity_for(&self, files: usize) -> usize {
        files.max(self.channel_capacity).max(1)
    }

    /// Count every file in `files` into `words`.
    ///
    /// Returns once every worker has reported completion and every buffered
    /// contribution has been merged. Missing or unreadable files are recorded
    /// in the stats, never returned as errors.
    #[tracing::instrument(name = "Aggregate word counts", skip_all, fields(files = files.len()))]
    pub async fn run(&self, files: &[PathBuf], words: &mut WordCount) -> AggregateStats {
        let mut stats = AggregateStats::default();
        if files.is_empty() {
            return stats;
        }

        let capacity = self.capacity_for(files.len());
        let (contribution_tx, contribution_rx) = mpsc::channel::<Contribution>(capacity);
        let (completion_tx, completion_rx) = mpsc::channel::<Completion>(capacity);

        for path in files {
            Worker::new(path.clone()).spawn(contribution_tx.clone(), completion_tx.clone());
            stats.workers += 1;
        }
        drop(contribution_tx);
        drop(completion_tx);

        collect(contribution_rx, completion_rx, words, &mut stats).await;

        tracing::info!(
            workers = stats.workers,
            contributions = stats.contributions,
            failed = stats.failed_files.len(),
            distinct = words.len(),
            "Aggregation finished"
        );
        stats
    }
}

/// Merge contributions until `stats.workers` completions have arrived, then
/// drain what is still buffered. Stops early if every sender is gone.
async fn collect(
    mut contribution_rx: mpsc::Receiver<Contribution>,
    mut completion_rx: mpsc::Receiver<Completion>,
    words: &mut WordCount,
    stats: &mut AggregateStats,
) {
    let mut remaining = stats.workers;
    while remaining > 0 {
        tokio::select! {
            Some(contribution) = contribution_rx.recv() => {
                absorb(words, stats, contribution);
            }
            Some(completion) = completion_rx.recv() => {
                remaining -= 1;
                tracing::debug!(
                    worker_id = %completion.worker_id,
                    path = %completion.path.display(),
                    remaining,
                    "Worker completed"
                );
                if let Some(failure) = completion.failure {
                    stats.failed_files.push(failure.path().clone());
                }
            }
            else => {
                tracing::error!(remaining, "Workers went away without reporting completion");
                break;
            }
        }
    }

    // Completions can overtake other workers' contributions in the
    // select above. Once every worker has completed nothing new is
    // sent, so whatever is buffered now is all that is left.
    while let Ok(contribution) = contribution_rx.try_recv() {
        absorb(words, stats, contribution);
    }
    contribution_rx.close();
    completion_rx.close();
}

fn absorb(words: &mut WordCount, stats: &mut AggregateStats, contribution: Contribution) {
    stats.contributions += 1;
    words.extend([(contribution.word, contribution.count)]);
}

/// Count every file in `files` into a fresh map with default settings.
pub async fn aggregate(files: &[PathBuf]) -> WordCount {
    let mut words = WordCount::new();
    Aggregator::default().run(files, &mut words).await;
    words
}
