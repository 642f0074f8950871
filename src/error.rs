//! Failure classification for a single question/answer exchange.

use reqwest::StatusCode;
use thiserror::Error;

/// Shown when the endpoint replied but carried no usable answer.
pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Shown when the request could not be completed or came back non-2xx.
pub const CONNECTION_ERROR_MESSAGE: &str = "Sorry, I'm having trouble connecting to the server. \
     Please check your internet connection and try again.";

/// Errors raised while talking to the answering endpoint.
#[derive(Debug, Error)]
pub enum AskError {
    /// The request never produced a response (DNS, refused connection, TLS).
    #[error("failed to reach answering endpoint {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("answering endpoint returned HTTP {status}")]
    Status { status: StatusCode },

    /// A 2xx response whose body could not be read as an answer payload.
    #[error("failed to decode answer payload: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

/// How a failed exchange is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Endpoint reachable, but the answer was missing or empty.
    Application,
    /// The request failed at the transport or HTTP level.
    Transport,
}

impl FailureKind {
    /// The fixed transcript message for this kind of failure.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Application => GENERIC_ERROR_MESSAGE,
            Self::Transport => CONNECTION_ERROR_MESSAGE,
        }
    }
}

impl From<&AskError> for FailureKind {
    fn from(_: &AskError) -> Self {
        Self::Transport
    }
}
