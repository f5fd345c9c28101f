use serde::{Deserialize, Serialize};
use std::fmt;

use super::Money;

/// Stable identifier of a healer in the catalog (e.g. `"h1"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealerId(pub String);

impl HealerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HealerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HealerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A bookable healer persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealerProfile {
    pub id: HealerId,
    pub name: String,
    pub specialty: String,
    /// One-line card bio
    pub bio: String,
    /// Long-form bio shown in the detail view
    pub full_bio: String,
    /// Mean rating in 0.0..=5.0
    pub rating: f64,
    pub reviews_count: u32,
    pub price_per_minute: Money,
    pub is_online: bool,
    pub avatar: String,
    pub gallery: Vec<String>,
    #[serde(default)]
    pub intro_video: Option<String>,
    pub categories: Vec<String>,
    pub location: String,
    pub languages: Vec<String>,
}

impl HealerProfile {
    /// True if the healer carries the given category tag.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Primary language followed by a `+` when more are spoken.
    pub fn language_summary(&self) -> String {
        match self.languages.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [first, ..] => format!("{}+", first),
        }
    }
}
