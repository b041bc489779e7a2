//! src/report.rs
use crate::word_count::WordCount;
use std::fmt;

const WORD_HEADER: &str = "Word";
const FREQUENCY_HEADER: &str = "Frequency";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, clap::ArgEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportOrder {
    /// Most frequent first, equal counts by word.
    Frequency,
    /// By word.
    Alphabetical,
}

/// A word count laid out as a two column table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    rows: Vec<(String, usize)>,
    word_width: usize,
    frequency_width: usize,
}

impl Report {
    pub fn new(words: &WordCount, order: ReportOrder) -> Self {
        let mut rows: Vec<(String, usize)> = words
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        match order {
            ReportOrder::Alphabetical => rows.sort_unstable_by(|a, b| a.0.cmp(&b.0)),
            ReportOrder::Frequency => {
                rows.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            }
        }

        let word_width = rows
            .iter()
            .map(|(word, _)| word.chars().count())
            .max()
            .unwrap_or(0);
        let frequency_width = rows
            .iter()
            .map(|(_, count)| digits(*count))
            .max()
            .unwrap_or(0);

        Report {
            rows,
            word_width,
            frequency_width,
        }
    }

    pub fn alphabetical(words: &WordCount) -> Self {
        Self::new(words, ReportOrder::Alphabetical)
    }

    pub fn by_frequency(words: &WordCount) -> Self {
        Self::new(words, ReportOrder::Frequency)
    }

    pub fn rows(&self) -> &[(String, usize)] {
        &self.rows
    }

    pub fn write_to<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

fn digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "Frequency" ends where the count column ends, with at least one
        // space when the columns are narrower than the headers.
        let gap = (self.word_width + self.frequency_width)
            .saturating_sub(WORD_HEADER.len() + FREQUENCY_HEADER.len())
            .max(1);
        writeln!(f, "{WORD_HEADER} {:gap$}{FREQUENCY_HEADER}", "")?;
        for (word, count) in &self.rows {
            writeln!(
                f,
                "{word:<ww$} {count:>fw$}",
                ww = self.word_width,
                fw = self.frequency_width
            )?;
        }
        Ok(())
    }
}
