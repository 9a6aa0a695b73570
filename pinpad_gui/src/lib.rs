//! # pinpad_gui - PIN Pad Widget for Iced
//!
//! Renders a [`pinpad_core::PinPad`] as an Iced widget: a 3x4 keypad, a
//! status line, and a dot indicator that shakes when the host rejects a PIN.
//!
//! The widget follows the Elm pattern. The host keeps a [`PinPadWidget`] in
//! its state, maps its [`PadMessage`]s into its own message type, and reacts
//! to [`PadAction::Completed`] by validating the code and calling
//! [`PinPadWidget::set_status`].

pub mod ui;

pub use ui::pin_pad::{Action as PadAction, Message as PadMessage, PinPadWidget};
