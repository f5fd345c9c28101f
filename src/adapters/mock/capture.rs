//! Capture device that records what it hands out.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::capture::{CaptureStream, ReleaseCounter};
use crate::models::SessionMode;
use crate::traits::{CaptureDevice, CaptureError};

/// Simulated tracks whose release is counted across every stream.
#[derive(Debug, Clone, Default)]
pub struct RecordingCaptureDevice {
    acquired: Arc<AtomicUsize>,
    released: ReleaseCounter,
}

impl RecordingCaptureDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.count()
    }

    /// Streams handed out and not yet released.
    pub fn open_streams(&self) -> usize {
        self.acquired().saturating_sub(self.released())
    }
}

impl CaptureDevice for RecordingCaptureDevice {
    fn acquire(&self, mode: SessionMode) -> Result<CaptureStream, CaptureError> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(CaptureStream::for_mode(mode).with_release_counter(self.released.clone()))
    }
}
