//! Local media capture for the session self-view.
//!
//! There is no call transport: tracks exist only so mute and camera toggles
//! have something to flip, and so release on session end is observable.

mod devices;

pub use devices::{SimulatedCaptureDevice, UnavailableCaptureDevice};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::SessionMode;
use crate::traits::{CaptureDevice, CaptureError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Audio,
    Video,
}

/// A single local media track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub kind: TrackKind,
    pub enabled: bool,
    pub stopped: bool,
}

impl Track {
    pub fn new(kind: TrackKind) -> Self {
        Self {
            kind,
            enabled: true,
            stopped: false,
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.enabled = false;
    }
}

/// Count of streams handed back to the device that opened them.
#[derive(Debug, Clone, Default)]
pub struct ReleaseCounter(Arc<AtomicUsize>);

impl ReleaseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for ReleaseCounter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ReleaseCounter {}

/// The set of tracks opened for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureStream {
    pub audio: Option<Track>,
    pub video: Option<Track>,
    /// Bumped once when the stream is first released
    released: Option<ReleaseCounter>,
}

impl CaptureStream {
    /// A stream with the tracks `mode` asks for.
    pub fn for_mode(mode: SessionMode) -> Self {
        Self {
            audio: mode.needs_audio().then(|| Track::new(TrackKind::Audio)),
            video: mode.needs_video().then(|| Track::new(TrackKind::Video)),
            released: None,
        }
    }

    /// Report the first release of this stream to `counter`.
    pub fn with_release_counter(mut self, counter: ReleaseCounter) -> Self {
        self.released = Some(counter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_none() && self.video.is_none()
    }

    /// Stop every track. Safe to call more than once.
    pub fn release(&mut self) {
        if self.is_released() {
            return;
        }
        if let Some(counter) = &self.released {
            counter.record();
        }
        if let Some(track) = self.audio.as_mut() {
            track.stop();
        }
        if let Some(track) = self.video.as_mut() {
            track.stop();
        }
    }

    pub fn is_released(&self) -> bool {
        self.audio.as_ref().map_or(true, |t| t.stopped)
            && self.video.as_ref().map_or(true, |t| t.stopped)
    }
}

/// Result of best-effort capture acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Acquired(CaptureStream),
    /// Nothing was requested (text mode)
    NotRequested,
    /// Acquisition failed; the session continues without local media
    Unavailable(CaptureError),
}

impl CaptureOutcome {
    pub fn into_stream(self) -> Option<CaptureStream> {
        match self {
            CaptureOutcome::Acquired(stream) => Some(stream),
            CaptureOutcome::NotRequested | CaptureOutcome::Unavailable(_) => None,
        }
    }
}

/// Request the tracks appropriate to `mode`, swallowing failures.
///
/// Text mode never touches the device.
pub fn acquire_for_mode(device: &dyn CaptureDevice, mode: SessionMode) -> CaptureOutcome {
    if !mode.needs_audio() && !mode.needs_video() {
        return CaptureOutcome::NotRequested;
    }
    match device.acquire(mode) {
        Ok(stream) => {
            debug!(?mode, "capture acquired");
            CaptureOutcome::Acquired(stream)
        }
        Err(err) => {
            warn!(?mode, error = %err, "failed to access media devices, continuing without local media");
            CaptureOutcome::Unavailable(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingDevice {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CaptureDevice for CountingDevice {
        fn acquire(&self, mode: SessionMode) -> Result<CaptureStream, CaptureError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(CaptureError::PermissionDenied("denied".to_string()))
            } else {
                Ok(CaptureStream::for_mode(mode))
            }
        }
    }

    #[test]
    fn test_text_mode_does_not_touch_device() {
        let device = CountingDevice { calls: AtomicUsize::new(0), fail: false };
        assert_eq!(acquire_for_mode(&device, SessionMode::Text), CaptureOutcome::NotRequested);
        assert_eq!(device.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_failure_is_swallowed() {
        let device = CountingDevice { calls: AtomicUsize::new(0), fail: true };
        let outcome = acquire_for_mode(&device, SessionMode::Video);
        assert!(matches!(outcome, CaptureOutcome::Unavailable(_)));
        assert!(outcome.into_stream().is_none());
    }

    #[test]
    fn test_stream_tracks_by_mode() {
        let video = CaptureStream::for_mode(SessionMode::Video);
        assert!(video.audio.is_some() && video.video.is_some());
        let voice = CaptureStream::for_mode(SessionMode::Voice);
        assert!(voice.audio.is_some() && voice.video.is_none());
        assert!(CaptureStream::for_mode(SessionMode::Text).is_empty());
    }

    #[test]
    fn test_release_is_idempotent() {
        let counter = ReleaseCounter::new();
        let mut stream = CaptureStream::for_mode(SessionMode::Video).with_release_counter(counter.clone());
        assert!(!stream.is_released());
        stream.release();
        stream.release();
        assert!(stream.is_released());
        assert_eq!(counter.count(), 1);
    }
}
