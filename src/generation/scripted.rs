//! Offline generator used when no API key is configured.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{ReplyInput, TextGenerator};

const REFLECTIONS: &[&str] = &[
    "Take a slow breath with me. What you feel is welcome here.",
    "Notice where that feeling sits in your body, and let it soften.",
    "You are doing gentle, important work simply by naming this.",
    "Let us stay with this moment together. There is no rush.",
    "Be kind to yourself today. Small steps are still steps forward.",
];

/// Deterministic persona lines with no network access.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    cursor: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn reply(&self, input: ReplyInput) -> String {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed) % REFLECTIONS.len();
        let first = input.persona_name.split_whitespace().last().unwrap_or("");
        if i == 0 && !first.is_empty() {
            format!("{} ({})", REFLECTIONS[i], first)
        } else {
            REFLECTIONS[i].to_string()
        }
    }

    async fn greeting(&self, persona_name: &str, _persona_specialty: &str, location: &str) -> String {
        format!("Welcome, I am {persona_name}. Greetings from {location}.")
    }
}
