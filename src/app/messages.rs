//! AppMessage enum for async continuations.

use crate::billing::BillingToken;
use crate::session::SessionId;

/// Results delivered back to the app from spawned tasks.
///
/// Session messages carry the id of the session they were spawned for and
/// are dropped if that session is no longer active.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// The simulated connect delay elapsed
    SessionConnected { session: SessionId },
    /// One second of session time passed
    SessionTick { session: SessionId },
    /// Opening line generated
    GreetingReady { session: SessionId, text: String },
    /// Reply to the pending user line generated
    ReplyReady { session: SessionId, text: String },
    /// The simulated payment finished processing
    BillingSettled { token: BillingToken },
}

impl AppMessage {
    pub fn session(&self) -> Option<SessionId> {
        match self {
            AppMessage::SessionConnected { session }
            | AppMessage::SessionTick { session }
            | AppMessage::GreetingReady { session, .. }
            | AppMessage::ReplyReady { session, .. } => Some(*session),
            AppMessage::BillingSettled { .. } => None,
        }
    }
}
