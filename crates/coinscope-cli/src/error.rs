use thiserror::Error;

use coinscope_core::{CoreError, HttpError, ValidationError};

/// CLI-level failures; every one of them exits with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to initialize HTTP client: {0}")]
    Transport(#[from] HttpError),

    #[error("{0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_)
            | Self::Core(_)
            | Self::Transport(_)
            | Self::Command(_)
            | Self::Serialization(_)
            | Self::Io(_) => 1,
        }
    }
}
