//! Ledger Export - batch file runner
//!
//! Renders one batch file from a JSON transaction dump.
//!
//! # Usage
//!
//! ```bash
//! ledger-export --destination general_ledger --date 2020-09-30 --input transactions.json
//!
//! EXPORT_APP_NAME=CoverApp EXPORT_FISCAL_START_MONTH=7 ledger-export -d statement -i policy.json -o statement.csv
//! ```
//!
//! # Environment Variables
//!
//! * `EXPORT_APP_NAME` - Application name in journal descriptions (default: CoverApp)
//! * `EXPORT_FISCAL_START_MONTH` - First month of the fiscal year, 1-12 (default: 1)
//! * `EXPORT_DISPLAY_DATE_FORMAT` - strftime pattern for statement dates (default: %m/%d/%Y)
//! * `EXPORT_OUTPUT_DIR` - Directory for batch files (default: exports)
//! * `EXPORT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_runner::{config::RunnerConfig, run_export, ExportRequest};

#[derive(Debug, Parser)]
#[command(name = "ledger-export", version, about = "Render accumulated transactions into a batch file")]
struct Cli {
    /// Destination format (general_ledger, sequenced_ledger, policyholder_statement)
    #[arg(short, long)]
    destination: String,

    /// Run date fixing fiscal period and journal description (YYYY-MM-DD, default today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// JSON array of transactions
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (default: <output_dir>/<destination>_<year>_<period>.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RunnerConfig::from_env().context("failed to load export configuration")?;

    init_tracing(&config.log_level);

    let run_date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let mut request = ExportRequest::new(cli.destination, run_date, cli.input);
    if let Some(output) = cli.output {
        request = request.with_output(output);
    }

    tracing::info!(
        destination = %request.destination,
        %run_date,
        input = %request.input.display(),
        "starting export run"
    );

    let report = run_export(&config, &request).context("export run failed")?;

    println!(
        "{} rows ({} read) written to {}",
        report.summary.rows,
        report.read,
        report.output.display()
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
