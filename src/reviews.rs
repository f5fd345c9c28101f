//! Post-session summary and the review form it carries.

use crate::models::{HealerProfile, Money, Review, SessionMode, StarRating};
use crate::session::{format_elapsed, SessionOutcome};

/// Author recorded on reviews from the local profile.
pub const REVIEW_AUTHOR: &str = "alex_thompson";

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub healer: HealerProfile,
    pub mode: SessionMode,
    pub elapsed_secs: u64,
    pub cost: Money,
    pub rating: StarRating,
    pub comment: String,
}

impl SessionSummary {
    pub fn from_outcome(outcome: &SessionOutcome) -> Self {
        Self {
            healer: outcome.healer.clone(),
            mode: outcome.mode,
            elapsed_secs: outcome.elapsed_secs,
            cost: outcome.cost,
            rating: StarRating::default(),
            comment: String::new(),
        }
    }

    pub fn duration_label(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    pub fn set_rating(&mut self, stars: u8) {
        self.rating = StarRating::new(stars);
    }

    pub fn rating_up(&mut self) {
        self.rating = self.rating.increment();
    }

    pub fn rating_down(&mut self) {
        self.rating = self.rating.decrement();
    }

    /// Build the review this form describes.
    pub fn to_review(&self) -> Review {
        Review::new(REVIEW_AUTHOR, self.rating, self.comment.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_healers;

    fn summary() -> SessionSummary {
        SessionSummary::from_outcome(&SessionOutcome {
            healer: mock_healers().remove(1),
            mode: SessionMode::Voice,
            elapsed_secs: 75,
            cost: Money::from_cents(225),
        })
    }

    #[test]
    fn test_defaults() {
        let s = summary();
        assert_eq!(s.rating.get(), 5);
        assert!(s.comment.is_empty());
        assert_eq!(s.duration_label(), "01:15");
    }

    #[test]
    fn test_rating_clamps() {
        let mut s = summary();
        s.set_rating(9);
        assert_eq!(s.rating.get(), 5);
        s.set_rating(0);
        assert_eq!(s.rating.get(), 1);
        s.rating_down();
        assert_eq!(s.rating.get(), 1);
        s.rating_up();
        assert_eq!(s.rating.get(), 2);
    }

    #[test]
    fn test_to_review() {
        let mut s = summary();
        s.set_rating(4);
        s.comment = "  Very calming  ".to_string();
        let review = s.to_review();
        assert_eq!(review.author, "alex_thompson");
        assert_eq!(review.rating.get(), 4);
        assert_eq!(review.comment, "Very calming");
    }
}
