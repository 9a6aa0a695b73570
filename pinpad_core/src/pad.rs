//! # PIN Entry State Machine
//!
//! `PinPad` owns the digits typed so far and mirrors the status the host
//! reports. It never decides whether a PIN is right: it reports a completed
//! code and waits for the host to move the status.
//!
//! ## State Machine
//!
//! ```text
//!            digit (len < max)               len == max
//!   Idle ──────────────────────> Idle ─────────────────> emits Completed(code)
//!    │                                                          │
//!    │            host: set_status(Verifying)                   │
//!    └──────────────── Verifying <──────────────────────────────┘
//!                        │     │
//!      host: Valid  <────┘     └────> host: Invalid (entry cleared, shake)
//! ```
//!
//! Input is accepted only in `Idle` and `Invalid`. Nothing returns to `Idle`
//! on its own; that is the host's call.

use std::time::Instant;

use crate::errors::PinResult;
use crate::keypad::Key;
use crate::options::PinPadOptions;
use crate::shake::ShakeEffect;
use crate::status::ValidationStatus;
use crate::view::{self, Dot, StatusRegion};

/// Outcome of a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinEvent {
    /// A digit was added, PIN not complete yet
    Appended,
    /// The last digit was removed
    Removed,
    /// The PIN reached its full length; hand the code to the validator
    Completed(String),
    /// Press had no effect (input disabled, PIN full, or nothing to remove)
    Ignored,
}

/// PIN entry state for one pad instance.
#[derive(Debug, Clone)]
pub struct PinPad {
    options: PinPadOptions,
    entry: String,
    status: ValidationStatus,
    shake: ShakeEffect,
}

impl PinPad {
    /// Create a pad in `Idle` with an empty entry.
    ///
    /// Fails if the options don't pass [`PinPadOptions::validate`].
    pub fn new(options: PinPadOptions) -> PinResult<Self> {
        options.validate()?;
        Ok(PinPad {
            options,
            entry: String::new(),
            status: ValidationStatus::Idle,
            shake: ShakeEffect::new(Instant::now()),
        })
    }

    pub fn options(&self) -> &PinPadOptions {
        &self.options
    }

    /// Digits entered so far
    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn len(&self) -> usize {
        self.entry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }

    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.entry.len() == self.options.max_length
    }

    /// Whether digit and backspace controls are interactive
    pub fn is_input_enabled(&self) -> bool {
        self.status.accepts_input()
    }

    /// Append a digit.
    ///
    /// Ignored unless input is enabled and the PIN is not yet full. Returns
    /// `Completed` exactly when this press fills the last position.
    pub fn press_digit(&mut self, digit: u8) -> PinEvent {
        if digit > 9 || !self.is_input_enabled() || self.is_complete() {
            return PinEvent::Ignored;
        }

        self.entry.push(char::from(b'0' + digit));
        tracing::debug!(len = self.entry.len(), max = self.options.max_length, "digit entered");

        if self.is_complete() {
            tracing::debug!("pin complete, awaiting validation");
            PinEvent::Completed(self.entry.clone())
        } else {
            PinEvent::Appended
        }
    }

    /// Remove the last digit, if any, while input is enabled
    pub fn backspace(&mut self) -> PinEvent {
        if !self.is_input_enabled() {
            return PinEvent::Ignored;
        }
        match self.entry.pop() {
            Some(_) => {
                tracing::debug!(len = self.entry.len(), "digit removed");
                PinEvent::Removed
            }
            None => PinEvent::Ignored,
        }
    }

    /// Dispatch a keypad key
    pub fn press(&mut self, key: Key) -> PinEvent {
        match key {
            Key::Digit(d) => self.press_digit(d),
            Key::Clear => self.backspace(),
            Key::Blank => PinEvent::Ignored,
        }
    }

    /// Apply the status reported by the host.
    ///
    /// `Invalid` always clears the entry. The shake fires when the status
    /// becomes `Invalid` from anything else. Returns true when it fired.
    pub fn set_status(&mut self, status: ValidationStatus, now: Instant) -> bool {
        if status != self.status {
            tracing::debug!(from = %self.status, to = %status, "status changed");
        }
        self.status = status;

        if status == ValidationStatus::Invalid {
            self.entry.clear();
        }
        self.shake.set_trigger(status == ValidationStatus::Invalid, now)
    }

    /// Clear the entry without touching the status
    pub fn reset(&mut self) {
        self.entry.clear();
    }

    /// Advance animations; call once per frame while [`is_animating`](Self::is_animating)
    pub fn tick(&mut self, now: Instant) {
        self.shake.tick(now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.shake.is_animating(now)
    }

    /// Horizontal offset of the dot row
    pub fn shake_offset(&self, now: Instant) -> f32 {
        self.shake.offset(now)
    }

    pub fn dots(&self) -> Vec<Dot> {
        view::dot_row(self.entry.len(), self.options.max_length)
    }

    pub fn dots_muted(&self) -> bool {
        view::dots_muted(self.status)
    }

    pub fn status_region(&self) -> StatusRegion {
        StatusRegion::for_status(self.status, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn pad() -> PinPad {
        PinPad::new(PinPadOptions::default()).unwrap()
    }

    #[test]
    fn test_new_pad_is_idle_and_empty() {
        let pad = pad();
        assert_eq!(pad.status(), ValidationStatus::Idle);
        assert!(pad.is_empty());
        assert!(pad.is_input_enabled());
        assert_eq!(pad.dots(), vec![Dot::Empty; 4]);
    }

    #[test]
    fn test_new_rejects_zero_length() {
        let err = PinPad::new(PinPadOptions::default().with_max_length(0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_digits_append_in_order() {
        let mut pad = pad();
        assert_eq!(pad.press_digit(7), PinEvent::Appended);
        assert_eq!(pad.press_digit(0), PinEvent::Appended);
        assert_eq!(pad.entry(), "70");
    }

    #[test]
    fn test_non_decimal_digit_ignored() {
        let mut pad = pad();
        assert_eq!(pad.press_digit(10), PinEvent::Ignored);
        assert!(pad.is_empty());
    }

    #[test]
    fn test_full_pin_ignores_more_digits() {
        let mut pad = pad();
        for d in [1, 2, 3, 4] {
            pad.press_digit(d);
        }
        assert_eq!(pad.press_digit(5), PinEvent::Ignored);
        assert_eq!(pad.entry(), "1234");
    }

    #[test]
    fn test_input_disabled_while_verifying_or_valid() {
        let now = Instant::now();
        for status in [ValidationStatus::Verifying, ValidationStatus::Valid] {
            let mut pad = pad();
            pad.press_digit(1);
            pad.set_status(status, now);

            assert!(!pad.is_input_enabled());
            assert_eq!(pad.press_digit(2), PinEvent::Ignored);
            assert_eq!(pad.backspace(), PinEvent::Ignored);
            assert_eq!(pad.entry(), "1");
        }
    }

    #[test]
    fn test_backspace() {
        let mut pad = pad();
        assert_eq!(pad.backspace(), PinEvent::Ignored);
        pad.press_digit(1);
        pad.press_digit(2);
        assert_eq!(pad.backspace(), PinEvent::Removed);
        assert_eq!(pad.entry(), "1");
    }

    #[test]
    fn test_press_dispatches_keys() {
        let mut pad = pad();
        assert_eq!(pad.press(Key::Digit(9)), PinEvent::Appended);
        assert_eq!(pad.press(Key::Blank), PinEvent::Ignored);
        assert_eq!(pad.press(Key::Clear), PinEvent::Removed);
        assert!(pad.is_empty());
    }

    #[test]
    fn test_invalid_clears_and_shakes() {
        let now = Instant::now();
        let mut pad = pad();
        for d in [1, 2, 3, 4] {
            pad.press_digit(d);
        }
        pad.set_status(ValidationStatus::Verifying, now);
        assert!(pad.dots_muted());

        assert!(pad.set_status(ValidationStatus::Invalid, now));
        assert!(pad.is_empty());
        assert!(pad.is_animating(now));
        assert!(pad.status_region().is_alert());

        // Input re-enabled after a rejection
        assert_eq!(pad.press_digit(5), PinEvent::Appended);
    }

    #[test]
    fn test_backspace_after_rejection() {
        let now = Instant::now();
        let mut pad = pad();
        pad.set_status(ValidationStatus::Invalid, now);
        assert!(pad.is_input_enabled());

        pad.press_digit(1);
        pad.press_digit(2);
        assert_eq!(pad.backspace(), PinEvent::Removed);
        assert_eq!(pad.entry(), "1");
        assert_eq!(pad.status(), ValidationStatus::Invalid);
    }

    #[test]
    fn test_repeated_invalid_clears_without_reshaking() {
        let now = Instant::now();
        let mut pad = pad();
        pad.set_status(ValidationStatus::Invalid, now);
        pad.press_digit(3);

        assert!(!pad.set_status(ValidationStatus::Invalid, now + Duration::from_millis(50)));
        assert!(pad.is_empty());
    }

    #[test]
    fn test_valid_keeps_entry() {
        let mut pad = pad();
        for d in [4, 3, 2, 1] {
            pad.press_digit(d);
        }
        assert!(!pad.set_status(ValidationStatus::Valid, Instant::now()));
        assert_eq!(pad.entry(), "4321");
        assert_eq!(pad.status_region().message(), Some("Pin code is valid !"));
    }

    #[test]
    fn test_reset_keeps_status() {
        let mut pad = pad();
        pad.press_digit(1);
        pad.set_status(ValidationStatus::Valid, Instant::now());
        pad.reset();
        assert!(pad.is_empty());
        assert_eq!(pad.status(), ValidationStatus::Valid);
    }

    #[test]
    fn test_shake_settles() {
        let start = Instant::now();
        let mut pad = pad();
        pad.set_status(ValidationStatus::Invalid, start);

        let mut ms = 0;
        while ms < 5000 {
            pad.tick(start + Duration::from_millis(ms));
            ms += 16;
        }
        let end = start + Duration::from_millis(5000);
        pad.tick(end);
        assert!(!pad.is_animating(end));
        assert_eq!(pad.shake_offset(end), 0.0);
    }
}
