//! View models shared by the GUI and TUI front ends
//!
//! Both renderers draw the same two things from pad state: a row of progress
//! dots and a single status element. Keeping the mapping here means the
//! front ends only decide how things look, never what is shown.

use crate::options::PinPadOptions;
use crate::status::ValidationStatus;

/// One position of the dot indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dot {
    Filled,
    Empty,
}

impl Dot {
    pub fn glyph(&self) -> char {
        match self {
            Dot::Filled => '●',
            Dot::Empty => '○',
        }
    }
}

/// Build the dot row: `entered` filled positions followed by empty ones, `max_length` in total
pub fn dot_row(entered: usize, max_length: usize) -> Vec<Dot> {
    (0..max_length)
        .map(|i| if i < entered { Dot::Filled } else { Dot::Empty })
        .collect()
}

/// Dots are drawn muted while the host is verifying
pub fn dots_muted(status: ValidationStatus) -> bool {
    status == ValidationStatus::Verifying
}

/// The single element shown above the dot row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusRegion {
    /// Busy indicator while the host verifies
    Spinner,
    /// Accepted message
    Success(String),
    /// Prompt while waiting for input
    Prompt(String),
    /// Rejected message, drawn in the alert color
    Error(String),
}

impl StatusRegion {
    pub fn for_status(status: ValidationStatus, options: &PinPadOptions) -> Self {
        match status {
            ValidationStatus::Verifying => StatusRegion::Spinner,
            ValidationStatus::Valid => StatusRegion::Success(options.message_valid.clone()),
            ValidationStatus::Idle => StatusRegion::Prompt(options.message_prompt.clone()),
            ValidationStatus::Invalid => StatusRegion::Error(options.message_wrong.clone()),
        }
    }

    /// Message text, if this region shows one
    pub fn message(&self) -> Option<&str> {
        match self {
            StatusRegion::Spinner => None,
            StatusRegion::Success(m) | StatusRegion::Prompt(m) | StatusRegion::Error(m) => Some(m),
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, StatusRegion::Error(_))
    }
}

/// Braille spinner frames
pub const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner frame for an elapsed time, advancing every 80ms
pub fn spinner_frame(elapsed: std::time::Duration) -> char {
    let index = (elapsed.as_millis() / 80) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[index]
}
