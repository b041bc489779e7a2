//! src/lib.rs
pub mod aggregator;
pub mod configuration;
pub mod counter;
pub mod error;
pub mod report;
pub mod startup;
pub mod telemetry;
#[cfg(test)]
mod test_utils;
pub mod tokenizer;
pub mod word_count;
pub mod worker;
