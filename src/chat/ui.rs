//! Chat mode UI components.

use super::command::SLASH_COMMANDS;
use super::transcript::TranscriptEntry;
use super::view::format_entry;
use crate::config::ResolvedConfig;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &ResolvedConfig) {
    println!(
        "{} {} - Ask a question",
        Style::header("askbar"),
        Style::version(format!("v{VERSION}"))
    );
    println!("{}", Style::secondary(&config.endpoint));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &ResolvedConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}  {} {}",
        Style::label("endpoint"),
        Style::value(&config.endpoint),
        Style::secondary(format!("({})", config.source))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let width = SLASH_COMMANDS
        .iter()
        .map(|(cmd, _)| cmd.len())
        .max()
        .unwrap_or_default();
    for (cmd, desc) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:<width$}")),
            Style::secondary(desc)
        );
    }
    println!();
}

pub fn print_history(entries: &[TranscriptEntry]) {
    if entries.is_empty() {
        println!("{}", Style::hint("No messages yet."));
    } else {
        println!("{}", Style::header("Conversation"));
        for entry in entries {
            println!("{}", format_entry(entry));
        }
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
