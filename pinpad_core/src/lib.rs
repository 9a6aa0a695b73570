//! # pinpad_core - PIN Entry Pad Engine
//!
//! `pinpad_core` holds everything about a numeric PIN pad that does not depend
//! on a UI toolkit: the entry state machine, the validation status the host
//! feeds back, the shake animation and the view models both front ends render.
//!
//! ## Design Philosophy
//!
//! - **Injected status**: the host decides Idle/Verifying/Valid/Invalid; the pad
//!   only accumulates digits and reports a completed code
//! - **Injected time**: animations take `Instant`s, so they are deterministic in tests
//! - **JSON-First options**: `PinPadOptions` loads from JSON with per-field defaults
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use pinpad_core::{PinEvent, PinPad, PinPadOptions, ValidationStatus};
//! use std::time::Instant;
//!
//! let mut pad = PinPad::new(PinPadOptions::default()).unwrap();
//! for digit in [1, 2, 3] {
//!     pad.press_digit(digit);
//! }
//! assert_eq!(pad.press_digit(4), PinEvent::Completed("1234".to_string()));
//!
//! // The host verifies the code and reports back
//! pad.set_status(ValidationStatus::Invalid, Instant::now());
//! assert_eq!(pad.entry(), "");
//! ```
//!
//! ## Modules
//!
//! - [`status`] - Validation status driven by the host
//! - [`options`] - Widget configuration and JSON loading
//! - [`pad`] - Entry state machine
//! - [`keypad`] - Declarative keypad layout
//! - [`view`] - Dot row and status region view models
//! - [`shake`] - Shake-on-invalid animation
//! - [`spring`] - Analytical spring physics
//! - [`verifier`] - Demo validator for the bundled hosts
//! - [`errors`] - Structured error types

pub mod errors;
pub mod keypad;
pub mod options;
pub mod pad;
pub mod shake;
pub mod spring;
pub mod status;
pub mod verifier;
pub mod view;

// Re-export commonly used types at crate root for convenience
pub use errors::{PinError, PinResult};
pub use keypad::{Key, KEYPAD_ROWS};
pub use options::{PinPadOptions, MAX_PIN_LENGTH};
pub use pad::{PinEvent, PinPad};
pub use shake::ShakeEffect;
pub use spring::{Spring, SpringParams};
pub use status::ValidationStatus;
pub use verifier::DemoVerifier;
pub use view::{Dot, StatusRegion};
