use crate::models::{HealerProfile, Review};

/// Running totals used to recompute a healer's displayed rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingAggregate {
    pub total: f64,
    pub count: u32,
}

impl RatingAggregate {
    pub fn of(healer: &HealerProfile) -> Self {
        Self {
            total: healer.rating * healer.reviews_count as f64,
            count: healer.reviews_count,
        }
    }

    pub fn add(mut self, review: &Review) -> Self {
        self.total += review.rating.get() as f64;
        self.count += 1;
        self
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// A copy of `healer` with rating and review count folded over `reviews`.
///
/// The catalog record itself is never modified.
pub fn with_reviews(healer: &HealerProfile, reviews: &[Review]) -> HealerProfile {
    if reviews.is_empty() {
        return healer.clone();
    }
    let aggregate = reviews
        .iter()
        .fold(RatingAggregate::of(healer), |acc, review| acc.add(review));
    HealerProfile {
        rating: aggregate.mean(),
        reviews_count: aggregate.count,
        ..healer.clone()
    }
}
