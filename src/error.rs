//! Unified error type.
//!
//! Each seam has its own `thiserror` enum; [`SoulError`] wraps them so the
//! binary and logs can treat failures uniformly.

use crate::config::ConfigError;
use crate::generation::GenerationError;
use crate::traits::{CaptureError, HttpError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum SoulError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SoulError>;

impl SoulError {
    pub fn is_retryable(&self) -> bool {
        match self {
            SoulError::Http(e) => e.is_retryable(),
            SoulError::Generation(GenerationError::Transport(e)) => e.is_retryable(),
            SoulError::Generation(GenerationError::Service { status, .. }) => {
                *status == 429 || *status >= 500
            }
            _ => false,
        }
    }

    /// Short message suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            SoulError::Http(_) | SoulError::Generation(_) => {
                "The guide's connection is interrupted. Please try again.".to_string()
            }
            SoulError::Capture(_) => "Camera or microphone unavailable.".to_string(),
            SoulError::Storage(_) => "Could not save your preferences.".to_string(),
            SoulError::Config(e) => format!("Configuration problem: {}", e),
            SoulError::Terminal(_) => "The terminal could not be set up.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SoulError::Http(_) => "HTTP",
            SoulError::Generation(e) => e.error_code(),
            SoulError::Capture(_) => "CAPTURE",
            SoulError::Storage(_) => "STORAGE",
            SoulError::Config(_) => "CONFIG",
            SoulError::Terminal(_) => "TERMINAL",
        }
    }
}
