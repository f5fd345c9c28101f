//! State for a single guided session with a healer persona.
//!
//! A [`Session`] is pure state: timers and generation calls are driven from
//! the app layer, which feeds results back in through the methods here.

mod clock;

pub use clock::{format_elapsed, SessionId};

use tracing::{debug, info};

use crate::capture::{CaptureOutcome, CaptureStream};
use crate::generation::ReplyInput;
use crate::models::{HealerProfile, Money, SessionMode, TranscriptMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Connecting,
    Active,
    Ended,
}

/// What a finished session is worth, handed to the wallet and summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub healer: HealerProfile,
    pub mode: SessionMode,
    pub elapsed_secs: u64,
    pub cost: Money,
}

#[derive(Debug)]
pub struct Session {
    id: SessionId,
    healer: HealerProfile,
    mode: SessionMode,
    phase: SessionPhase,
    elapsed_secs: u64,
    transcript: Vec<TranscriptMessage>,
    composing: bool,
    muted: bool,
    camera_off: bool,
    chat_open: bool,
    capture: Option<CaptureStream>,
    capture_unavailable: bool,
}

impl Session {
    pub fn start(id: SessionId, healer: HealerProfile, mode: SessionMode, capture: CaptureOutcome) -> Self {
        let capture_unavailable = matches!(capture, CaptureOutcome::Unavailable(_));
        info!(%id, healer = %healer.id, %mode, "session connecting");
        Self {
            id,
            healer,
            mode,
            phase: SessionPhase::Connecting,
            elapsed_secs: 0,
            transcript: Vec::new(),
            composing: false,
            muted: false,
            camera_off: false,
            chat_open: mode.opens_chat(),
            capture: capture.into_stream(),
            capture_unavailable,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn healer(&self) -> &HealerProfile {
        &self.healer
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Elapsed time as `mm:ss`.
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    /// Cost accrued so far at the healer's per-minute rate.
    pub fn running_cost(&self) -> Money {
        Money::for_duration(self.healer.price_per_minute, self.elapsed_secs)
    }

    pub fn transcript(&self) -> &[TranscriptMessage] {
        &self.transcript
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Whether the chat panel is showing. Text sessions open with it shown.
    pub fn is_chat_open(&self) -> bool {
        self.chat_open
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    pub fn capture(&self) -> Option<&CaptureStream> {
        self.capture.as_ref()
    }

    pub fn capture_unavailable(&self) -> bool {
        self.capture_unavailable
    }

    pub fn is_muted(&self) -> bool {
        match self.capture.as_ref().and_then(|c| c.audio.as_ref()) {
            Some(track) => !track.enabled,
            None => self.muted,
        }
    }

    pub fn is_camera_off(&self) -> bool {
        match self.capture.as_ref().and_then(|c| c.video.as_ref()) {
            Some(track) => !track.enabled,
            None => self.camera_off,
        }
    }

    /// Connecting → Active. Returns true when a greeting should be requested.
    pub fn connect(&mut self) -> bool {
        if self.phase != SessionPhase::Connecting {
            return false;
        }
        self.phase = SessionPhase::Active;
        info!(id = %self.id, "session active");
        self.mode.is_conversational()
    }

    /// Advance the clock by one second while active.
    pub fn tick(&mut self) {
        if self.phase == SessionPhase::Active {
            self.elapsed_secs += 1;
        }
    }

    /// Record a user line and build the reply request for it.
    ///
    /// Returns `None` for blank input, while a reply is pending, or outside
    /// the active phase. At most one reply is ever in flight.
    pub fn submit(&mut self, text: &str) -> Option<ReplyInput> {
        let message = text.trim();
        if message.is_empty() || self.composing || self.phase != SessionPhase::Active {
            return None;
        }

        let history = self
            .transcript
            .iter()
            .map(|m| (m.role, m.text.clone()))
            .collect();
        self.transcript.push(TranscriptMessage::user(message));
        self.composing = true;
        debug!(id = %self.id, turns = self.transcript.len(), "reply requested");

        Some(ReplyInput {
            persona_name: self.healer.name.clone(),
            persona_specialty: self.healer.specialty.clone(),
            message: message.to_string(),
            history,
        })
    }

    pub fn apply_reply(&mut self, text: impl Into<String>) {
        if self.phase == SessionPhase::Ended {
            return;
        }
        self.composing = false;
        self.transcript.push(TranscriptMessage::persona(text));
    }

    pub fn apply_greeting(&mut self, text: impl Into<String>) {
        if self.phase == SessionPhase::Active {
            self.transcript.push(TranscriptMessage::persona(text));
        }
    }

    pub fn toggle_mute(&mut self) {
        match self.capture.as_mut().and_then(|c| c.audio.as_mut()) {
            Some(track) => track.enabled = !track.enabled,
            None => self.muted = !self.muted,
        }
    }

    pub fn toggle_camera(&mut self) {
        match self.capture.as_mut().and_then(|c| c.video.as_mut()) {
            Some(track) => track.enabled = !track.enabled,
            None => self.camera_off = !self.camera_off,
        }
    }

    /// Stop the session and compute its cost. Capture is always released.
    pub fn end(mut self) -> SessionOutcome {
        self.release_capture();
        self.phase = SessionPhase::Ended;
        let cost = self.running_cost();
        info!(id = %self.id, elapsed = self.elapsed_secs, %cost, "session ended");
        SessionOutcome {
            healer: self.healer.clone(),
            mode: self.mode,
            elapsed_secs: self.elapsed_secs,
            cost,
        }
    }

    /// Stop the local tracks. Later calls are no-ops.
    pub fn release_capture(&mut self) {
        if let Some(stream) = self.capture.as_mut() {
            stream.release();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.release_capture();
    }
}
