//! Domain records shared by the catalog, session, wallet and UI layers.

mod healer;
mod money;
mod review;
mod session;
mod theme;
mod transaction;
mod user;

pub use healer::{HealerId, HealerProfile};
pub use money::Money;
pub use review::{Review, StarRating};
pub use session::{SessionMode, TranscriptMessage, TranscriptRole};
pub use theme::Theme;
pub use transaction::{Transaction, TransactionKind};
pub use user::{UserProfile, UserRole};
