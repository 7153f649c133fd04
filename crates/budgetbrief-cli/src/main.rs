mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "budgetbrief",
    version,
    about = "Consolidate program-area budget tables from Budget in Brief PDF reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that runs the pipeline.
#[derive(clap::Args)]
pub struct PatternArgs {
    /// JSON config file with begin_patterns, end_pattern, early_page_limit, file_pattern
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Begin-of-table marker (repeatable; replaces the configured list)
    #[arg(long = "begin", value_name = "TEXT")]
    pub begin: Vec<String>,

    /// End-of-table marker
    #[arg(long = "end", value_name = "TEXT")]
    pub end: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every report in a directory into one CSV file
    Extract {
        /// Directory holding the PDF reports
        input_dir: PathBuf,

        /// CSV file to write
        #[arg(short, long, default_value = "epa_budget.csv")]
        output: PathBuf,

        /// Write a JSON report of processed and skipped documents
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,

        #[command(flatten)]
        patterns: PatternArgs,
    },
    /// Show where the table markers are found in one report
    Locate {
        /// Path to PDF file
        input_file: PathBuf,

        #[command(flatten)]
        patterns: PatternArgs,
    },
    /// Extract and print the normalized table of one report
    Inspect {
        /// Path to PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        patterns: PatternArgs,
    },
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_dir,
            output,
            report,
            patterns,
        } => commands::resolve_config(patterns)
            .and_then(|config| commands::extract::run(&input_dir, &output, report, &config)),
        Commands::Locate {
            input_file,
            patterns,
        } => commands::resolve_config(patterns)
            .and_then(|config| commands::locate::run(&input_file, &config)),
        Commands::Inspect {
            input_file,
            output,
            patterns,
        } => commands::resolve_config(patterns)
            .and_then(|config| commands::inspect::run(&input_file, &output, &config)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
