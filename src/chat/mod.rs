//! Interactive chat against an answering endpoint.
//!
//! [`ChatSession`] owns the send lifecycle and drives any [`ChatView`];
//! [`ChatRepl`] wires it to an `inquire` prompt and the terminal.

/// Slash command parsing and autocomplete.
pub mod command;
mod repl;
mod session;
mod transcript;
mod ui;
mod view;

pub use repl::ChatRepl;
pub use session::{ChatSession, SubmitOutcome};
pub use transcript::{EntryKind, Sender, TranscriptEntry};
pub use view::{ChatView, TerminalView, format_entry};
