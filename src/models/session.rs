use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a session is conducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionMode {
    Video,
    Voice,
    Text,
}

impl SessionMode {
    /// Video mode requests a camera.
    pub fn needs_video(self) -> bool {
        matches!(self, SessionMode::Video)
    }

    /// Video and voice modes request a microphone.
    pub fn needs_audio(self) -> bool {
        matches!(self, SessionMode::Video | SessionMode::Voice)
    }

    /// Every mode carries a chat transcript; text mode opens it by default.
    pub fn is_conversational(self) -> bool {
        true
    }

    pub fn opens_chat(self) -> bool {
        matches!(self, SessionMode::Text)
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionMode::Video => "Video",
            SessionMode::Voice => "Voice",
            SessionMode::Text => "Text",
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who wrote a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptRole {
    User,
    Persona,
}

/// One chat line inside a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub role: TranscriptRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl TranscriptMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TranscriptRole::User,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn persona(text: impl Into<String>) -> Self {
        Self {
            role: TranscriptRole::Persona,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}
