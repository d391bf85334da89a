use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::http_client::HttpError;

/// Failure classification shared by parsers, transport and argument checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedJson,
    UnexpectedShape,
    EmptySource,
    TransportFailure,
    InvalidArgument,
    NotFound,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedJson => "malformed_json",
            Self::UnexpectedShape => "unexpected_shape",
            Self::EmptySource => "empty_source",
            Self::TransportFailure => "transport_failure",
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-level input errors exposed by `coinscope-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("limit must be between {min} and {max}, got {value}")]
    LimitOutOfRange { value: i64, min: i64, max: i64 },
    #[error("limit must be a whole number: '{value}'")]
    InvalidLimit { value: String },

    #[error("currency must be 1-10 ASCII letters or digits: '{value}'")]
    InvalidCurrency { value: String },

    #[error("too many arguments for '{command}'")]
    TooManyArguments { command: &'static str },
}

/// Why a payload could not be turned into a trusted record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
}

impl ParseError {
    pub fn malformed(source: &serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::MalformedJson,
            message: format!("payload is not valid JSON: {source}"),
        }
    }

    pub fn unexpected_shape(expected: &'static str) -> Self {
        Self {
            kind: ErrorKind::UnexpectedShape,
            message: format!("expected a top-level JSON {expected}"),
        }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::EmptySource,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to parse API response: {0}")]
    Parse(#[from] ParseError),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: HttpError,
    },

    #[error("upstream returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("cryptocurrency '{id}' not found or invalid symbol")]
    NotFound { id: String },
}

impl CoreError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::InvalidArgument,
            Self::Parse(error) => error.kind(),
            Self::Transport { .. } | Self::Status { .. } => ErrorKind::TransportFailure,
            Self::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_kind_follows_wrapped_error() {
        let parse = CoreError::from(ParseError::unexpected_shape("array"));
        assert_eq!(parse.kind(), ErrorKind::UnexpectedShape);

        let status = CoreError::Status {
            url: String::from("https://example.test"),
            status: 429,
        };
        assert_eq!(status.kind(), ErrorKind::TransportFailure);
        assert_eq!(
            status.to_string(),
            "upstream returned status 429 for https://example.test"
        );
    }

    #[test]
    fn parse_error_display_includes_kind() {
        let error = ParseError::empty("no coin entries");
        assert_eq!(error.to_string(), "empty_source: no coin entries");
    }
}
