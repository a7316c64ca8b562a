//! scorecard CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "scorecard", version, about = "Quality-audit questionnaire")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive audit
    Run {
        /// Criteria CSV path (overrides config)
        #[arg(long)]
        criteria: Option<PathBuf>,

        /// Audit log CSV path (overrides config)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a criteria CSV file
    Validate {
        /// Criteria CSV path
        #[arg(long)]
        criteria: PathBuf,
    },

    /// Show past audits from the log
    History {
        /// Audit log CSV path (overrides config)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example criteria
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scorecard=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            criteria,
            log,
            config,
        } => commands::run::execute(criteria, log, config),
        Commands::Validate { criteria } => commands::validate::execute(criteria),
        Commands::History {
            log,
            format,
            config,
        } => commands::history::execute(log, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
