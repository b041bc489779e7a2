//! src/configuration.rs
use crate::report::ReportOrder;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::Path;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub aggregator: AggregatorSettings,
    pub report: ReportSettings,
    pub log: LogSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct AggregatorSettings {
    /// Lower bound for both channels. The number of files is always used
    /// when it is larger.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub channel_capacity: usize,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ReportSettings {
    pub order: ReportOrder,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct LogSettings {
    pub filter: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    get_configuration_from(&base_path.join("configuration"))
}

/// Defaults, then `base.yaml` in `config_dir` if present, then `WORDCOUNT_*`
/// environment variables.
pub fn get_configuration_from(config_dir: &Path) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("aggregator.channel_capacity", 0)?
        .set_default("report.order", "frequency")?
        .set_default("log.filter", "warn")?
        .add_source(config::File::from(config_dir.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("WORDCOUNT")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
