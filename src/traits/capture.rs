//! Capture device trait abstraction.
//!
//! Sessions request local audio/video tracks to populate a self-view.
//! Acquisition is best-effort: callers receive a [`CaptureOutcome`] and
//! carry on without media when it is unavailable.

use crate::capture::CaptureStream;
use crate::models::SessionMode;

/// Capture acquisition errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// No device is present on this host
    #[error("no capture device available")]
    NoDevice,
    /// The user or platform refused access
    #[error("capture permission denied: {0}")]
    PermissionDenied(String),
    /// The device exists but could not be opened
    #[error("capture device failed: {0}")]
    DeviceFailed(String),
}

/// Source of local media tracks.
pub trait CaptureDevice: Send + Sync {
    /// Open the tracks required by `mode`.
    ///
    /// Only called for modes that need media; see
    /// [`crate::capture::acquire_for_mode`].
    fn acquire(&self, mode: SessionMode) -> Result<CaptureStream, CaptureError>;
}
