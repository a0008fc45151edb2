use anyhow::{Context, Result};
use cassist_agent::OpenAiExtractor;
use cassist_cli::Shell;
use cassist_core::{Assistant, AssistantConfig};
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Natural-language assistant for token swaps and cross-chain bridges.
///
/// Reads `OPENAI_API_KEY` (required), `OPENAI_MODEL` and `OPENAI_BASE_URL`
/// from the environment or a `.env` file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {}

/// Logs go to stderr so they never interleave with the conversation on stdout.
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to set global default tracing subscriber")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    Cli::parse();
    init_tracing()?;

    let config = AssistantConfig::from_env().context("Failed to load configuration")?;
    info!("Starting assistant with {:?}", config);

    let extractor = OpenAiExtractor::from_config(&config);
    let shell = Shell::new(Assistant::new(Box::new(extractor)));

    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("Console I/O failed")
}
