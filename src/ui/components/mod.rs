//! Reusable UI components

pub mod dialog_frame;
pub mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{render_status_indicator, spinner_char, StatusIndicator};
