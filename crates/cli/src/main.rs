//! # labnote-cli
//!
//! Command-line adapter over the lab-report pipeline: process a local PDF
//! and print the formatted consultation note.

use anyhow::Result;
use clap::{Parser, Subcommand};
use labnote::providers::factory::{create_provider, ProviderConfig};
use labnote::LabReportClientBuilder;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process a lab-report PDF into a consultation note
    Process(ProcessArgs),
}

#[derive(Parser, Debug)]
struct ProcessArgs {
    /// Path to the lab-report PDF
    file: PathBuf,
    /// Print the full result record as pretty JSON instead of just the note
    #[arg(long)]
    json: bool,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the note itself stays pipeable.
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => process(args).await,
    }
}

async fn process(args: ProcessArgs) -> Result<()> {
    let provider_config = ProviderConfig::from_env()?;
    let ai_provider = create_provider(&provider_config)?;
    let client = LabReportClientBuilder::new()
        .ai_provider(ai_provider)
        .build()?;

    info!("Processing '{}'.", args.file.display());
    let result = client.process_report(&args.file).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.formatted_results);
    }

    Ok(())
}
