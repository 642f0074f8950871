use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const DOTS: &[&str] = &["   ", ".  ", ".. ", "...", " ..", "  .", "   "];

/// Animated "bot is typing" line shown while an answer is pending.
///
/// Clears itself from the terminal when dropped.
pub struct TypingIndicator {
    progress_bar: ProgressBar,
}

impl TypingIndicator {
    #[allow(clippy::unwrap_used)]
    pub fn start(label: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(DOTS)
                .template("{msg}{spinner}")
                .unwrap(),
        );
        progress_bar.set_message(label.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(150));

        Self { progress_bar }
    }
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
