//! Configure command handler for the default endpoint.

use anyhow::Result;
use inquire::{CustomUserError, Text};
use inquire::validator::Validation;

use super::chat::load_resolved_config;
use crate::config::{ConfigManager, validate_endpoint};
use crate::ui::{Style, handle_prompt_cancellation};

/// Prompts for the endpoint and saves it to the config file.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    let current = load_resolved_config(None)?.endpoint;
    let endpoint = Text::new("Answering endpoint:")
        .with_default(&current)
        .with_validator(|input: &str| {
            Ok::<_, CustomUserError>(match validate_endpoint(input.trim()) {
                Ok(()) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;

    config.askbar.endpoint = Some(endpoint.trim().to_string());
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );
    Ok(())
}

/// Prints the config file location and the effective endpoint.
pub fn show_config(endpoint: Option<String>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    let resolved = load_resolved_config(endpoint)?;

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}  {}{}",
        Style::label(format!("{:<8}", "file")),
        Style::secondary(manager.config_path().display()),
        if manager.exists() {
            String::new()
        } else {
            format!(" {}", Style::hint("(not created)"))
        }
    );
    println!(
        "  {}  {}",
        Style::label(format!("{:<8}", "saved")),
        file_config
            .askbar
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {} {}",
        Style::label("endpoint"),
        Style::value(&resolved.endpoint),
        Style::secondary(format!("({})", resolved.source))
    );
    Ok(())
}
