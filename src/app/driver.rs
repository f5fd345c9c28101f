//! Spawned tasks behind sessions and billing.
//!
//! Every task reports back over `message_tx`; nothing here touches app state
//! from another task.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::{App, AppMessage, Focus};
use crate::capture::{acquire_for_mode, CaptureOutcome};
use crate::models::{HealerId, SessionMode};
use crate::reviews::SessionSummary;
use crate::session::{Session, SessionId, SessionOutcome};

const CLOCK_PERIOD: Duration = Duration::from_secs(1);

impl App {
    /// Open a session with `healer_id`. Rejected while another session is live.
    pub fn start_session(&mut self, healer_id: &HealerId, mode: SessionMode) -> bool {
        if let Some(active) = &self.session {
            warn!(active = %active.id(), requested = %healer_id, "session already in progress, ignoring start");
            self.status = Some("A session is already in progress".to_string());
            return false;
        }
        let Some(healer) = self.healer(healer_id) else {
            warn!(healer = %healer_id, "cannot start session with unknown healer");
            return false;
        };

        let capture = acquire_for_mode(self.capture.as_ref(), mode);
        let capture_error = match &capture {
            CaptureOutcome::Unavailable(err) => Some(err.clone()),
            CaptureOutcome::Acquired(_) | CaptureOutcome::NotRequested => None,
        };
        let id = self.next_session_id;
        self.next_session_id = id.next();

        let session = Session::start(id, healer, mode, capture);
        self.focus = if session.is_chat_open() { Focus::Chat } else { Focus::List };
        self.session = Some(session);
        self.detail = None;
        self.summary = None;
        self.input.clear();
        self.status = None;
        if let Some(err) = capture_error {
            self.report(err.into());
        }

        let tx = self.message_tx.clone();
        let delay = self.config.connect_delay;
        self.session_tasks.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppMessage::SessionConnected { session: id });
        }));
        true
    }

    /// Called once the connect delay for `id` elapsed.
    pub(super) fn on_session_connected(&mut self, id: SessionId) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let wants_greeting = session.connect();
        let healer = session.healer().clone();
        self.spawn_clock(id);
        if wants_greeting {
            let tx = self.message_tx.clone();
            let generator = self.generator.clone();
            self.session_tasks.push(tokio::spawn(async move {
                let text = generator
                    .greeting(&healer.name, &healer.specialty, &healer.location)
                    .await;
                let _ = tx.send(AppMessage::GreetingReady { session: id, text });
            }));
        }
    }

    fn spawn_clock(&mut self, id: SessionId) {
        let tx = self.message_tx.clone();
        self.session_tasks.push(tokio::spawn(async move {
            let mut interval = tokio::time::interval(CLOCK_PERIOD);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(AppMessage::SessionTick { session: id }).is_err() {
                    break;
                }
            }
        }));
    }

    /// Submit the typed chat line. Returns false when nothing was sent.
    pub fn send_chat(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.is_composing() {
            debug!("reply pending, holding input");
            return false;
        }
        let Some(request) = session.submit(self.input.as_str()) else {
            return false;
        };
        self.input.clear();

        let id = session.id();
        let tx = self.message_tx.clone();
        let generator = self.generator.clone();
        self.session_tasks.retain(|task| !task.is_finished());
        self.session_tasks.push(tokio::spawn(async move {
            let text = generator.reply(request).await;
            let _ = tx.send(AppMessage::ReplyReady { session: id, text });
        }));
        true
    }

    /// End the live session, charge it and open the summary.
    pub fn end_session(&mut self) -> Option<SessionOutcome> {
        let session = self.session.take()?;
        self.abort_session_tasks();

        let outcome = session.end();
        self.wallet.debit_session(outcome.cost, &outcome.healer.name);
        self.summary = Some(SessionSummary::from_outcome(&outcome));
        self.last_session = Some(outcome.clone());
        self.input.clear();
        self.focus = Focus::List;
        Some(outcome)
    }

    /// Start processing the selected plan.
    pub fn confirm_billing(&mut self) -> bool {
        let Some(token) = self.billing.as_mut().and_then(|flow| flow.confirm()) else {
            return false;
        };
        let tx = self.message_tx.clone();
        let delay = self.config.billing_delay;
        self.billing_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppMessage::BillingSettled { token });
        }));
        info!(?token, "billing confirmed");
        true
    }
}
