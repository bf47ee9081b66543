use anyhow::Context;
use clap::Parser;
use pinseek_core::{Config, Dataset};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "pinseek", about = "Indian pincode search bot for Telegram")]
struct Cli {
    /// Path to the pincode directory CSV (overrides the configured path).
    #[arg(long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config = Config::load().context("load configuration")?;
    if let Some(path) = cli.data {
        config.data.path = path;
    }
    anyhow::ensure!(
        !config.telegram.token.trim().is_empty(),
        "no bot token configured; set PINSEEK_TELEGRAM__TOKEN or telegram.token in ~/.config/pinseek/config.toml"
    );

    let dataset = Dataset::load(&config.data.path)
        .with_context(|| format!("load dataset from {}", config.data.path.display()))?;
    tracing::info!(
        records = dataset.len(),
        path = %config.data.path.display(),
        "dataset loaded"
    );

    pinseek_telegram::run(&config, Arc::new(dataset)).await
}
