//! `recast models` — list providers, their models and API key status.

use anyhow::Result;
use colored::Colorize;

use recast_core::config::{get_config_path, Config};
use recast_core::ProviderId;
use recast_providers::registry::{self, ProviderSpec, PROVIDERS};

/// Where a provider's API key will come from.
#[derive(Debug, PartialEq, Eq)]
enum KeySource {
    Config,
    Env(&'static str),
    Missing(&'static str),
}

fn key_source<F>(config: &Config, spec: &ProviderSpec, env: F) -> KeySource
where
    F: Fn(&str) -> Option<String>,
{
    if config.providers.get(spec.id).is_configured() {
        KeySource::Config
    } else if env(spec.env_key).is_some_and(|k| !k.is_empty()) {
        KeySource::Env(spec.env_key)
    } else {
        KeySource::Missing(spec.env_key)
    }
}

/// Run the models command.
pub fn run(config: &Config) -> Result<()> {
    let config_path = get_config_path();

    println!();
    println!("{}", "Recast Models".cyan().bold());
    println!();

    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_path.exists() {
            "✓".green().to_string()
        } else {
            "(not found)".dimmed().to_string()
        }
    );
    println!("  {:<18} {}", "Default model:".bold(), config.defaults.model);

    // Effective values after file, environment and built-in defaults.
    let model = &config.defaults.model;
    let provider = registry::provider_for_model(model).unwrap_or(ProviderId::Google);
    let effective = config.llm_config(model, Some(provider)).resolve(provider);
    println!(
        "  {:<18} {} | max_tokens: {} | timeout: {}s",
        "Parameters:".bold(),
        format!("temp: {}", effective.temperature).dimmed(),
        format!("{}", effective.max_tokens).dimmed(),
        format!("{}", effective.timeout.as_secs()).dimmed(),
    );

    for spec in PROVIDERS {
        let status = match key_source(config, spec, |k| std::env::var(k).ok()) {
            KeySource::Config => format!("{} (key in config)", "✓".green()),
            KeySource::Env(var) => format!("{} (key from {var})", "✓".green()),
            KeySource::Missing(var) => format!("{}", format!("· no key (set {var})").dimmed()),
        };

        println!();
        println!("  {:<18} {}", format!("{}:", spec.display_name).bold(), status);
        for model in spec.models {
            let marker = if *model == config.defaults.model { "*" } else { " " };
            println!("    {marker} {model}");
        }
    }

    println!();

    Ok(())
}
