use chrono::{Local, NaiveTime, Timelike};
use std::fmt;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Bot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Normal,
    Error,
}

/// A single rendered line of conversation. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    text: String,
    sender: Sender,
    kind: EntryKind,
    timestamp: String,
}

impl TranscriptEntry {
    /// Creates an entry stamped with the current local time.
    pub fn new(text: impl Into<String>, sender: Sender, kind: EntryKind) -> Self {
        Self::at(text, sender, kind, Local::now().time())
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User, EntryKind::Normal)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot, EntryKind::Normal)
    }

    pub fn bot_error(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot, EntryKind::Error)
    }

    fn at(text: impl Into<String>, sender: Sender, kind: EntryKind, time: NaiveTime) -> Self {
        Self {
            text: text.into(),
            sender,
            kind,
            timestamp: format_clock(time),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn sender(&self) -> Sender {
        self.sender
    }

    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Wall-clock time of creation as `HH:MM`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn is_error(&self) -> bool {
        self.kind == EntryKind::Error
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp,
            self.sender.label(),
            self.text
        )
    }
}

fn format_clock(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
