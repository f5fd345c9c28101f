//! Mock healer catalog plus the derived views built over it.
//!
//! - [`mock_healers`] - the fixed seed list in declaration order
//! - [`filter_healers`] - search term + category filtering
//! - [`with_reviews`] - rating recomputation from locally submitted reviews

mod data;
mod filter;
mod ratings;

pub use data::{mock_healers, GlobalStats, ALL_CATEGORY, CATEGORIES, GLOBAL_STATS};
pub use filter::{filter_healers, matches, online_count};
pub use ratings::{with_reviews, RatingAggregate};
