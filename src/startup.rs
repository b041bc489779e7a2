//! src/startup.rs
use crate::aggregator::{AggregateStats, Aggregator};
use crate::configuration::Settings;
use crate::report::{Report, ReportOrder};
use crate::word_count::WordCount;
use anyhow::Context;
use std::path::PathBuf;

/// Everything the binary does between parsing arguments and exiting.
#[derive(Debug)]
pub struct WordCountJob {
    files: Vec<PathBuf>,
    aggregator: Aggregator,
    order: ReportOrder,
}

impl WordCountJob {
    pub fn new(settings: &Settings, files: Vec<PathBuf>, order: Option<ReportOrder>) -> Self {
        WordCountJob {
            files,
            aggregator: Aggregator::from_settings(&settings.aggregator),
            order: order.unwrap_or(settings.report.order),
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn order(&self) -> ReportOrder {
        self.order
    }

    /// Aggregate every file and write the report to `out`.
    #[tracing::instrument(name = "Run word count job", skip_all, fields(order = ?self.order))]
    pub async fn run<W: std::io::Write>(&self, out: W) -> anyhow::Result<AggregateStats> {
        let mut words = WordCount::new();
        let stats = self.aggregator.run(&self.files, &mut words).await;
        Report::new(&words, self.order)
            .write_to(out)
            .context("Failed to write report")?;
        Ok(stats)
    }
}
