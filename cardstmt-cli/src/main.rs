use anyhow::{bail, Context, Result};
use cardstmt_core::BatchSummary;
use cardstmt_ingest::{Aggregator, DocumentSource};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod export;
mod state;

use export::{write_records, CsvSink};

#[derive(Parser, Debug)]
#[command(
    name = "cardstmt",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CARDSTMT_BUILD_REV"), ")"),
    about = "Extract transactions from credit card statements into CSV"
)]
struct Cli {
    /// Log per-page progress and every parsed transaction
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement (or a directory of statements) and write CSV
    Extract(ExtractArgs),

    /// Manage ~/.cardstmt/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a config file with default values
    Init,
    /// Print the effective configuration
    Show,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Path to a statement file or a directory of statements
    #[arg(long)]
    statement_path: PathBuf,

    /// Add a Rewards column (yes/no, true/false, 1/0; default from config)
    #[arg(long, value_parser = parse_bool)]
    show_rewards: Option<bool>,

    /// Password for locked statements
    #[arg(long, env = "CARDSTMT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Output CSV file (default from config, usually output.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write CSV to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Input document kind
    #[arg(long, value_enum, default_value_t = InputFormat::Pdf)]
    format: InputFormat,

    /// Override the text that opens the transaction block
    #[arg(long)]
    marker: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// PDF statements (*.pdf)
    Pdf,
    /// Extracted text, pages separated by form feeds (*.txt)
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Extract(args) => {
            let cfg = config::load_config()?;
            extract(args, &cfg)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}

fn parse_bool(v: &str) -> Result<bool, String> {
    match v.to_ascii_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        _ => Err(format!("boolean value expected, got '{v}'")),
    }
}

fn document_source(format: InputFormat) -> Result<Box<dyn DocumentSource>> {
    match format {
        #[cfg(feature = "pdf")]
        InputFormat::Pdf => Ok(Box::new(cardstmt_ingest::sources::PdfSource)),
        #[cfg(not(feature = "pdf"))]
        InputFormat::Pdf => bail!("built without PDF support; use --format text"),
        InputFormat::Text => Ok(Box::new(cardstmt_ingest::sources::TextSource)),
    }
}

fn log_summary(summary: &BatchSummary) {
    info!(
        records = summary.records,
        credits = summary.credits,
        debits = summary.debits,
        total_debit = %summary.total_debit,
        total_credit = %summary.total_credit,
        net_rewards = ?summary.net_rewards,
        "batch complete"
    );
}

fn extract(args: ExtractArgs, cfg: &config::Config) -> Result<()> {
    let mut options = cfg.scan_options()?;
    if let Some(show_rewards) = args.show_rewards {
        options.show_rewards = show_rewards;
    }
    if let Some(marker) = args.marker {
        if marker.is_empty() {
            bail!("--marker must not be empty");
        }
        options.block_marker = marker;
    }

    let source = document_source(args.format)?;
    let aggregator = Aggregator::new(source.as_ref(), &options, args.password)?;

    let records = aggregator
        .collect_path(&args.statement_path)
        .with_context(|| format!("extracting {}", args.statement_path.display()))?;
    let summary = BatchSummary::from_records(&records);

    log_summary(&summary);

    if args.stdout {
        let mut sink = CsvSink::from_writer(io::stdout().lock());
        write_records(&mut sink, aggregator.shape(), &records)?;
        return Ok(());
    }

    let out = args.output.unwrap_or_else(|| cfg.output.path.clone());
    let mut sink = CsvSink::create(&out)?;
    write_records(&mut sink, aggregator.shape(), &records)?;

    println!("Wrote {} transactions to {}", summary.records, out.display());
    println!(
        "  debits: {} ({})  credits: {} ({})",
        summary.debits, summary.total_debit, summary.credits, summary.total_credit
    );
    if let Some(rewards) = summary.net_rewards {
        println!("  net rewards: {}", rewards);
    }

    Ok(())
}
