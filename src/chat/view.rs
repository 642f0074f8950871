use super::transcript::{Sender, TranscriptEntry};
use crate::ui::{Style, TypingIndicator};

/// Rendering surface driven by a [`ChatSession`](super::ChatSession).
///
/// Implementations are assumed infallible: a view that cannot draw simply
/// drops the update.
pub trait ChatView {
    /// Appends a visual line for `entry` and keeps it in view.
    fn render_entry(&mut self, entry: &TranscriptEntry);

    /// Shows the single typing indicator.
    fn show_typing(&mut self);

    /// Removes the typing indicator. No-op if it is not shown.
    fn hide_typing(&mut self);

    /// Empties the input control after its text has been taken.
    fn clear_input(&mut self);

    /// Enables or disables the input and send controls. Enabling also
    /// returns focus to the input.
    fn set_input_enabled(&mut self, enabled: bool);
}

/// Terminal renderer: one line per entry on stdout, spinner for typing.
pub struct TerminalView {
    typing: Option<TypingIndicator>,
}

impl TerminalView {
    pub const fn new() -> Self {
        Self { typing: None }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView for TerminalView {
    fn render_entry(&mut self, entry: &TranscriptEntry) {
        println!("{}", format_entry(entry));
    }

    fn show_typing(&mut self) {
        if self.typing.is_none() {
            self.typing = Some(TypingIndicator::start(&format!(
                "      {}  typing",
                Style::bot(Sender::Bot.label())
            )));
        }
    }

    fn hide_typing(&mut self) {
        self.typing = None;
    }

    // The line editor hands over its buffer on submit, so there is nothing
    // left to clear.
    fn clear_input(&mut self) {}

    // The prompt is only read again after `submit` returns, so input is
    // already blocked while a question is in flight.
    fn set_input_enabled(&mut self, _enabled: bool) {}
}

/// Formats an entry the way [`TerminalView`] prints it.
pub fn format_entry(entry: &TranscriptEntry) -> String {
    let sender = match entry.sender() {
        Sender::User => Style::user(entry.sender().label()),
        Sender::Bot => Style::bot(entry.sender().label()),
    };
    let text = if entry.is_error() {
        Style::error(entry.text())
    } else {
        entry.text().to_string()
    };

    format!("{}  {sender}  {text}", Style::secondary(entry.timestamp()))
}
