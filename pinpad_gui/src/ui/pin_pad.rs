//! PIN pad widget
//!
//! Layout, top to bottom:
//! - status region (prompt / spinner / success / error)
//! - dot indicator, wrapped in the shake
//! - keypad

use std::time::Instant;

use iced::keyboard;
use iced::widget::column;
use iced::{Alignment, Element, Length};
use pinpad_core::view::spinner_frame;
use pinpad_core::{Key, PinEvent, PinPad, PinPadOptions, PinResult, ValidationStatus};

use super::indicator::{view_dots, view_status_region};
use super::keypad::view_keypad;
use super::shaky::shaky;

/// Messages produced by the widget's own controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    KeyPressed(Key),
}

/// What the host has to do after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Validate this code, then report back through `set_status`
    Completed(String),
}

/// Iced front end for a [`PinPad`].
#[derive(Debug, Clone)]
pub struct PinPadWidget {
    pad: PinPad,
    /// When the spinner started, so frames advance from its first frame
    verifying_since: Instant,
}

impl PinPadWidget {
    pub fn new(options: PinPadOptions) -> PinResult<Self> {
        Ok(Self {
            pad: PinPad::new(options)?,
            verifying_since: Instant::now(),
        })
    }

    pub fn pad(&self) -> &PinPad {
        &self.pad
    }

    pub fn status(&self) -> ValidationStatus {
        self.pad.status()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::KeyPressed(key) => match self.pad.press(key) {
                PinEvent::Completed(code) => Action::Completed(code),
                _ => Action::None,
            },
        }
    }

    /// Apply the status computed by the host
    pub fn set_status(&mut self, status: ValidationStatus, now: Instant) {
        if status == ValidationStatus::Verifying && self.pad.status() != ValidationStatus::Verifying {
            self.verifying_since = now;
        }
        self.pad.set_status(status, now);
    }

    pub fn reset(&mut self) {
        self.pad.reset();
    }

    pub fn tick(&mut self, now: Instant) {
        self.pad.tick(now);
    }

    /// Whether the host should subscribe to window frames
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.pad.is_animating(now) || self.pad.status() == ValidationStatus::Verifying
    }

    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let options = self.pad.options();

        let spinner = spinner_frame(now.saturating_duration_since(self.verifying_since));
        let status = view_status_region(&self.pad.status_region(), spinner);

        let dots = shaky(
            view_dots(&self.pad.dots(), self.pad.dots_muted(), options),
            self.pad.shake_offset(now),
        );

        // Full width so the shake has free space on both sides of the dots
        let indicators = column![status, dots]
            .width(Length::Fill)
            .align_x(Alignment::Center);

        column![indicators, view_keypad(options, self.pad.is_input_enabled())]
            .width(Length::Fill)
            .spacing(18)
            .align_x(Alignment::Center)
            .into()
    }
}

/// Map a physical key press to a keypad key (digits and Backspace)
pub fn key_from_keyboard(key: &keyboard::Key) -> Option<Key> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Backspace) => Some(Key::Clear),
        keyboard::Key::Character(c) => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Key::from_char(ch),
                _ => None,
            }
        }
        _ => None,
    }
}
