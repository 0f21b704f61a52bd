//! Error types for talking to the trivia API.

use derive_more::{Display, Error};
use tracing::{error, instrument};

/// What went wrong while loading trivia data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TriviaErrorKind {
    /// Transport failure, timeout, or a non-success HTTP status.
    #[display("network failure")]
    NetworkFailure,
    /// The response did not have the shape we rely on.
    #[display("malformed response")]
    MalformedResponse,
}

/// Trivia API error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Trivia error ({}): {} at {}:{}", kind, message, file, line)]
pub struct TriviaError {
    /// Error category.
    pub kind: TriviaErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TriviaError {
    /// Creates a new trivia error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: TriviaErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(%kind, error_message = %message, "Trivia error created");
        Self {
            kind,
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a [`TriviaErrorKind::NetworkFailure`].
    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(TriviaErrorKind::NetworkFailure, message)
    }

    /// Shorthand for a [`TriviaErrorKind::MalformedResponse`].
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(TriviaErrorKind::MalformedResponse, message)
    }

    /// Short text suitable for a one-line status bar.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.kind, self.message)
    }
}

impl From<reqwest::Error> for TriviaError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::malformed(format!("Failed to decode response: {}", err))
        } else {
            Self::network(format!("HTTP request failed: {}", err))
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
