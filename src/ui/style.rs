//! Consistent styling utilities for terminal output.
//!
//! Provides color and formatting helpers using owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section headers (e.g., "Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Labels/keys (e.g., "endpoint")
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Primary values (e.g., the endpoint URL)
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Secondary info (timestamps, descriptions, paths)
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    /// Slash commands (e.g., "/config", "/help")
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn hint<T: Display>(text: T) -> String {
        format!("{}", text.dimmed().italic())
    }

    pub fn version<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// The user's name tag in the transcript
    pub fn user<T: Display>(text: T) -> String {
        format!("{}", text.blue().bold())
    }

    /// The bot's name tag in the transcript
    pub fn bot<T: Display>(text: T) -> String {
        format!("{}", text.magenta().bold())
    }
}
