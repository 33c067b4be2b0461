use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ledger_trends::cli::{run_reports, FilterArgs, ReportArgs};
use ledger_trends::config::{Settings, TrendsPaths};

#[derive(Parser)]
#[command(
    name = "trends",
    author = "Kaylee Beyene",
    version,
    about = "Spending and income trends from a bank CSV export",
    long_about = "trends reads a CSV export of bank transactions (date, amount, \
                  description) and reports totals, the biggest income and expense \
                  trends, and savings rates over the whole range or rolling windows."
)]
struct Cli {
    /// CSV file to read transactions from
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    #[command(flatten)]
    reports: ReportArgs,

    #[command(flatten)]
    filters: FilterArgs,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show current configuration and paths, then exit
    #[arg(long)]
    show_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load_or_default(&TrendsPaths::new()?)?,
    };

    if cli.show_config {
        println!("ledger-trends Configuration");
        println!("===========================");
        match &cli.config {
            Some(path) => println!("Settings file:   {}", path.display()),
            None => println!("Settings file:   {}", TrendsPaths::new()?.settings_file().display()),
        }
        println!();
        println!("Settings:");
        println!("  Currency symbol:    {}", settings.currency_symbol);
        println!("  CSV date format:    {}", settings.csv_date_format);
        println!("  Header date format: {}", settings.header_date_format);
        println!("  CSV has header:     {}", settings.csv_has_header);
        println!("  CSV delimiter:      {:?}", settings.csv_delimiter);
        println!("  Window weeks:       {}", settings.window_weeks);
        return Ok(());
    }

    let Some(file) = cli.file else {
        println!("Please provide a filename using the -f flag");
        return Ok(());
    };

    if !cli.reports.any_requested() {
        println!(
            "Nothing to report. Use -e for totals, -t N for top trends or -x N for windowed trends."
        );
        println!("Run 'trends --help' for usage information.");
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_reports(&file, &cli.filters, &cli.reports, &settings, &mut out)?;
    out.flush()?;

    Ok(())
}
