//! # askbar - terminal chat for question-answering endpoints
//!
//! `askbar` sends each question as `{"question": "..."}` to an HTTP
//! endpoint and renders the reply's `answer` field as a chat transcript.
//! One question is in flight at a time; failures become error entries and
//! never end the session.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive chat
//! askbar
//!
//! # One question, then exit
//! askbar ask "How much does a haircut cost?"
//!
//! # Use a different endpoint
//! askbar --endpoint http://localhost:3000/ chat
//! ```
//!
//! ## Configuration
//!
//! The endpoint is taken from `--endpoint`, then `ASKBAR_ENDPOINT`, then
//! `~/.config/askbar/config.toml`:
//!
//! ```toml
//! [askbar]
//! endpoint = "https://qa.example.com/"
//! ```

/// HTTP client for the answering endpoint.
pub mod answer;

/// Chat session lifecycle, transcript and rendering.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and endpoint resolution.
pub mod config;

/// Failure kinds and their user-facing messages.
pub mod error;

/// `tracing` subscriber setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (typing indicator, colors).
pub mod ui;
