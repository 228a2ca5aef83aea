//! Recast CLI — entry point.
//!
//! # Commands
//!
//! - `recast preview [MODEL]` — run the built-in sample transformation
//! - `recast transform --file PATH --instruction TEXT` — transform a file
//! - `recast models` — list providers, models and key status

mod helpers;
mod models;
mod preview;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use recast_core::config::{load_config, Config};
use recast_core::{LlmConfig, ProviderId};
use recast_providers::registry;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Recast — natural-language code transformations through an LLM
#[derive(Parser)]
#[command(name = "recast", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview a sample transformation with a model
    Preview {
        /// Model to preview (defaults to the configured model)
        model: Option<String>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Transform a source file according to an instruction
    Transform {
        /// Path of the file to transform
        #[arg(short, long)]
        file: String,

        /// What to do with the code
        #[arg(short, long)]
        instruction: String,

        /// Model to use (defaults to the configured model)
        #[arg(short, long)]
        model: Option<String>,

        /// Provider to use instead of inferring it from the model
        #[arg(short, long)]
        provider: Option<ProviderId>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// List supported models and provider key status
    Models,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(None);

    match cli.command {
        Commands::Preview { model, logs } => {
            init_logging(logs);
            let model = model.unwrap_or_else(|| config.defaults.model.clone());
            preview::run(&config, &model).await
        }
        Commands::Transform {
            file,
            instruction,
            model,
            provider,
            logs,
        } => {
            init_logging(logs);
            let model = model.unwrap_or_else(|| config.defaults.model.clone());
            run_transform(&config, &file, &instruction, &model, provider).await
        }
        Commands::Models => models::run(&config),
    }
}

// ─────────────────────────────────────────────
// Transform command
// ─────────────────────────────────────────────

async fn run_transform(
    config: &Config,
    file: &str,
    instruction: &str,
    model: &str,
    provider: Option<ProviderId>,
) -> Result<()> {
    let path = helpers::expand_tilde(file);
    let llm = build_llm_config(config, model, provider);
    info!(path = %path.display(), model = %model, "transforming file");

    let code = recast_providers::transform_file(&path, instruction, &llm)
        .await
        .with_context(|| format!("transformation of {} failed", path.display()))?;
    println!("{code}");

    Ok(())
}

/// Per-call settings for `model`, with credentials for the provider that will serve it.
pub fn build_llm_config(config: &Config, model: &str, provider: Option<ProviderId>) -> LlmConfig {
    let explicit = provider.is_some();
    let provider = provider.or_else(|| registry::provider_for_model(model));
    let mut llm = config.llm_config(model, provider);
    if !explicit {
        // Leave inference to the dispatcher.
        llm.provider = None;
    }
    llm
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("recast=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
