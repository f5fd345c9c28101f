use crate::models::SessionMode;
use crate::traits::{CaptureDevice, CaptureError};

use super::CaptureStream;

/// Hands out in-memory tracks for every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedCaptureDevice;

impl CaptureDevice for SimulatedCaptureDevice {
    fn acquire(&self, mode: SessionMode) -> Result<CaptureStream, CaptureError> {
        Ok(CaptureStream::for_mode(mode))
    }
}

/// Always fails; used when capture is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCaptureDevice;

impl CaptureDevice for UnavailableCaptureDevice {
    fn acquire(&self, _mode: SessionMode) -> Result<CaptureStream, CaptureError> {
        Err(CaptureError::NoDevice)
    }
}
