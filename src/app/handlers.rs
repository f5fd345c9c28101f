//! Message handling for the App.

use tracing::debug;

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message.
    ///
    /// Session messages for anything other than the live session are stale
    /// (the session ended or was replaced) and are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if let Some(id) = msg.session() {
            if self.session.as_ref().map(|s| s.id()) != Some(id) {
                debug!(session = %id, ?msg, "dropping message for inactive session");
                return;
            }
        }
        self.mark_dirty();

        match msg {
            AppMessage::SessionConnected { session } => self.on_session_connected(session),
            AppMessage::SessionTick { .. } => {
                if let Some(session) = self.session.as_mut() {
                    session.tick();
                }
            }
            AppMessage::GreetingReady { text, .. } => {
                if let Some(session) = self.session.as_mut() {
                    session.apply_greeting(text);
                }
            }
            AppMessage::ReplyReady { text, .. } => {
                if let Some(session) = self.session.as_mut() {
                    session.apply_reply(text);
                }
            }
            AppMessage::BillingSettled { token } => {
                if let Some(flow) = self.billing.as_mut() {
                    flow.settle(token);
                }
                self.billing_task = None;
            }
        }
    }
}
