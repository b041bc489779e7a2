//! src/main.rs
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use wordcount::configuration::get_configuration;
use wordcount::report::ReportOrder;
use wordcount::startup::WordCountJob;
use wordcount::telemetry::init_tracing;

/// Count word frequencies across text files.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Files to count. Each one is read by its own worker.
    #[clap(required = true, parse(from_os_str))]
    files: Vec<PathBuf>,

    /// How to order the report.
    ///
    /// Defaults to `report.order` from the configuration, which is frequency.
    #[clap(short, long, arg_enum)]
    order: Option<ReportOrder>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage, help and argument errors all exit with status 1.
            e.print().context("Failed to print usage")?;
            std::process::exit(1);
        }
    };

    let settings = get_configuration().context("Failed to read configuration.")?;
    init_tracing(&settings.log.filter)?;

    let job = WordCountJob::new(&settings, args.files, args.order);
    let stats = job.run(std::io::stdout().lock()).await?;
    if !stats.failed_files.is_empty() {
        tracing::warn!(
            failed = stats.failed_files.len(),
            "Some files could not be counted completely"
        );
    }
    Ok(())
}
