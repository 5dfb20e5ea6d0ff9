use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dari::commands;
use dari::config::Config;

#[derive(Parser)]
#[command(
    name = "dari",
    version,
    about = "Deterministic industry classification and semantic matching for R&D funding programs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); overrides DARI_LOG_FORMAT
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a funding program title into an industry category
    Classify {
        /// Program title to classify
        title: Option<String>,

        /// Administering ministry name
        #[arg(short, long)]
        ministry: Option<String>,

        /// Program description
        #[arg(short, long)]
        description: Option<String>,

        /// JSONL file of program records to classify as a batch
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print an audit report after a batch run
        #[arg(long, default_value = "false")]
        report: bool,
    },

    /// Score an organization's semantic compatibility against programs
    Score {
        /// Organization profile JSON file
        #[arg(short, long)]
        org: PathBuf,

        /// Program record JSON file (or JSONL with --batch)
        #[arg(short, long)]
        program: PathBuf,

        /// Treat the program file as a JSONL batch
        #[arg(long, default_value = "false")]
        batch: bool,
    },

    /// Look up cross-industry relevance for a pair of industry labels
    Relevance {
        /// Program industry label (e.g. AGRICULTURE)
        program_industry: String,

        /// Organization industry label; omit for the unknown-org neutral score
        #[arg(short, long)]
        org_industry: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let log_format = cli
        .log_format
        .clone()
        .unwrap_or_else(|| config.logging.format.clone());
    setup_tracing(&log_format, &config.logging.level, cli.verbose)?;

    tracing::info!("dari match engine starting");

    match cli.command {
        Commands::Classify {
            title,
            ministry,
            description,
            input,
            report,
        } => {
            tracing::info!(
                title = ?title,
                ministry = ?ministry,
                input = ?input,
                "Starting classify command"
            );
            commands::classify(title, ministry, description, input, report)?;
        }

        Commands::Score {
            org,
            program,
            batch,
        } => {
            tracing::info!(
                org = %org.display(),
                program = %program.display(),
                batch = %batch,
                "Starting score command"
            );
            commands::score(org, program, batch)?;
        }

        Commands::Relevance {
            program_industry,
            org_industry,
        } => {
            tracing::info!(
                program = %program_industry,
                org = ?org_industry,
                "Starting relevance command"
            );
            commands::relevance(org_industry, program_industry)?;
        }
    }

    tracing::info!("dari completed successfully");
    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("dari=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new(format!("dari={level},warn"))
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
