use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A star rating clamped to 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(u8);

impl StarRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Build a rating, clamping out-of-range values into 1..=5.
    pub fn new(stars: u8) -> Self {
        Self(stars.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for StarRating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

/// Feedback left after a session. Reviews are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: StarRating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(author: impl Into<String>, rating: StarRating, comment: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            author: author.into(),
            rating,
            comment: comment.into(),
            created_at: Utc::now(),
        }
    }
}
