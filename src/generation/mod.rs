//! Text-generation client used for persona dialogue.
//!
//! Both operations are stateless request/response calls; the caller supplies
//! the full relevant history each time. Neither ever fails from the caller's
//! point of view: transport, service and decoding errors are logged and
//! mapped to fixed fallback lines.

mod error;
mod gemini;
mod scripted;
mod wire;

pub use error::GenerationError;
pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use scripted::ScriptedGenerator;
pub use wire::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

use async_trait::async_trait;

use crate::models::TranscriptRole;

/// Reply used when the service call fails.
pub const REPLY_FALLBACK: &str = "I'm sending you peace and light. My connection is momentarily interrupted, but my presence is with you.";
/// Reply used when the service answers with no text.
pub const REPLY_EMPTY: &str = "I am reflecting on your words. Please continue...";
/// Greeting used when the service call fails.
pub const GREETING_FALLBACK: &str = "Welcome. I am honored to connect with you today.";
/// Greeting used when the service answers with no text.
pub const GREETING_EMPTY: &str = "Welcome. I am here to support your journey today.";

/// Sampling temperature for conversational replies.
pub const REPLY_TEMPERATURE: f32 = 0.8;
/// Sampling temperature for the opening greeting.
pub const GREETING_TEMPERATURE: f32 = 0.9;

/// Everything needed for one conversational reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyInput {
    pub persona_name: String,
    pub persona_specialty: String,
    /// The new user line; sent as the final user turn
    pub message: String,
    /// Prior transcript, oldest first, excluding `message`
    pub history: Vec<(TranscriptRole, String)>,
}

/// Source of persona dialogue.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Next persona line for the conversation. Never fails.
    async fn reply(&self, input: ReplyInput) -> String;

    /// A short opening line (target at most 15 words). Never fails.
    async fn greeting(&self, persona_name: &str, persona_specialty: &str, location: &str) -> String;
}

/// System instruction describing the persona for conversational replies.
pub fn persona_instruction(name: &str, specialty: &str) -> String {
    format!(
        "You are {name}, a world-class {specialty}. Provide compassionate, insightful, and healing \
         advice to the user. Keep responses concise and calming. Use a gentle tone. Address the \
         user directly and empathetically."
    )
}

/// One-shot prompt for the opening greeting.
pub fn greeting_prompt(name: &str, specialty: &str, location: &str) -> String {
    format!(
        "Generate a warm, professional, and very brief initial greeting (max 15 words) for a \
         healing session. The healer is {name}, a {specialty} from {location}."
    )
}
