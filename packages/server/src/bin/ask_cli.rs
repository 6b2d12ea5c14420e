//! CLI for asking the product Q&A engine questions without the HTTP server
//!
//! Loads the catalog from the same environment configuration as the server
//! and prints JSON to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use server_core::{kernel::build_engine, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ask_cli")]
#[command(about = "Ask product questions against the configured catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a question, e.g. `ask_cli ask "weight of the Vogue Walker"`
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// List every product title in the catalog
    Titles,
}

#[derive(Serialize)]
struct TitlesOutput<'a> {
    mode: &'a str,
    count: usize,
    titles: Vec<&'a str>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let engine = build_engine(&config).await?;

    match cli.command {
        Commands::Ask { question } => {
            let result = engine.answer(&question.join(" "));
            print_json(&result)?;
        }
        Commands::Titles => {
            let index = engine.snapshot();
            print_json(&TitlesOutput {
                mode: engine.source_name(),
                count: index.len(),
                titles: index.titles().collect(),
            })?;
        }
    }

    Ok(())
}
