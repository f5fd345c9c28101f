use crate::traits::HttpError;

/// Why a generation call produced no usable text.
///
/// These never reach callers of [`super::TextGenerator`]; they are logged
/// and replaced by a fallback line.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),
    #[error("service returned status {status}: {message}")]
    Service { status: u16, message: String },
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response contained no text")]
    Empty,
}

impl GenerationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            GenerationError::MissingApiKey => "GEN_NO_KEY",
            GenerationError::Transport(_) => "GEN_TRANSPORT",
            GenerationError::Service { .. } => "GEN_SERVICE",
            GenerationError::Decode(_) => "GEN_DECODE",
            GenerationError::Empty => "GEN_EMPTY",
        }
    }
}
