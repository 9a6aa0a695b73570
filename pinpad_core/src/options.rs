//! # Pad Options
//!
//! Immutable configuration supplied by the host: PIN length, layout metrics and
//! the four display strings. Options serialize to JSON; every field has a
//! default, so a config file only needs the fields it changes.
//!
//! ## Example
//!
//! ```rust
//! use pinpad_core::options::PinPadOptions;
//!
//! let options = PinPadOptions::from_json(r#"{ "max_length": 6 }"#).unwrap();
//! assert_eq!(options.max_length, 6);
//! assert_eq!(options.clear_button_text, "C");
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PinError, PinResult};

/// Longest PIN the pad accepts
pub const MAX_PIN_LENGTH: usize = 12;

/// Widget configuration.
///
/// Built once and handed to [`PinPad::new`](crate::PinPad::new), which
/// rejects out-of-range values through [`PinPadOptions::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinPadOptions {
    /// Number of digits that completes a PIN
    pub max_length: usize,

    /// Gap between keypad buttons, in logical pixels
    pub button_spacing: f32,

    /// Edge length of a square keypad button, in logical pixels
    pub button_size: f32,

    /// Gap between indicator dots
    pub dot_spacing: f32,

    /// Font size of an indicator dot
    pub dot_size: f32,

    /// Shown while waiting for input
    pub message_prompt: String,

    /// Shown after the host rejects a PIN
    pub message_wrong: String,

    /// Shown after the host accepts a PIN
    pub message_valid: String,

    /// Label of the backspace control
    pub clear_button_text: String,
}

impl Default for PinPadOptions {
    fn default() -> Self {
        PinPadOptions {
            max_length: 4,
            button_spacing: 8.0,
            button_size: 64.0,
            dot_spacing: 12.0,
            dot_size: 42.0,
            message_prompt: "Enter your pin code".to_string(),
            message_wrong: "Wrong pin code !".to_string(),
            message_valid: "Pin code is valid !".to_string(),
            clear_button_text: "C".to_string(),
        }
    }
}

impl PinPadOptions {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_button_spacing(mut self, spacing: f32) -> Self {
        self.button_spacing = spacing;
        self
    }

    pub fn with_button_size(mut self, size: f32) -> Self {
        self.button_size = size;
        self
    }

    /// Replace the prompt, wrong, valid and clear-button strings
    pub fn with_messages(
        mut self,
        prompt: impl Into<String>,
        wrong: impl Into<String>,
        valid: impl Into<String>,
        clear: impl Into<String>,
    ) -> Self {
        self.message_prompt = prompt.into();
        self.message_wrong = wrong.into();
        self.message_valid = valid.into();
        self.clear_button_text = clear.into();
        self
    }

    /// Check the options describe a usable pad.
    ///
    /// `max_length` must be in `1..=MAX_PIN_LENGTH`; metrics must be finite
    /// and non-negative.
    pub fn validate(&self) -> PinResult<()> {
        if self.max_length == 0 {
            return Err(PinError::invalid_input(
                "max_length",
                self.max_length.to_string(),
                "PIN length must be at least 1",
            ));
        }
        if self.max_length > MAX_PIN_LENGTH {
            return Err(PinError::invalid_input(
                "max_length",
                self.max_length.to_string(),
                format!("PIN length must not exceed {}", MAX_PIN_LENGTH),
            ));
        }

        let metrics = [
            ("button_spacing", self.button_spacing),
            ("button_size", self.button_size),
            ("dot_spacing", self.dot_spacing),
            ("dot_size", self.dot_size),
        ];
        for (field, value) in metrics {
            if !value.is_finite() || value < 0.0 {
                return Err(PinError::invalid_input(
                    field,
                    value.to_string(),
                    "Metric must be a finite, non-negative number",
                ));
            }
        }

        Ok(())
    }

    /// Parse and validate options from a JSON string
    pub fn from_json(json: &str) -> PinResult<Self> {
        let options: PinPadOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load and validate options from a JSON file
    pub fn load(path: &Path) -> PinResult<Self> {
        let mut file = File::open(path)
            .map_err(|e| PinError::config_error(path.display().to_string(), e.to_string()))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| PinError::config_error(path.display().to_string(), e.to_string()))?;

        let options: PinPadOptions =
            serde_json::from_str(&contents).map_err(|e| PinError::SerializationError {
                reason: format!("Invalid JSON in {}: {}", path.display(), e),
            })?;
        options.validate()?;

        tracing::debug!(path = %path.display(), max_length = options.max_length, "loaded pad options");
        Ok(options)
    }
}
