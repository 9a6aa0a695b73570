//! Demo validator used by the bundled hosts
//!
//! Real applications validate against their own backend. The GUI and TUI
//! demos play the host's role with a fixed secret and a simulated delay.

use std::time::Duration;

use crate::options::PinPadOptions;
use crate::status::ValidationStatus;

/// Environment variable overriding the demo secret
pub const SECRET_ENV: &str = "PINPAD_SECRET";

/// Secret used when the environment doesn't provide one
pub const DEFAULT_SECRET: &str = "1234";

/// Simulated round trip to a validation backend
pub const VERIFY_DELAY: Duration = Duration::from_millis(700);

/// Compares completed codes to a known secret.
#[derive(Clone)]
pub struct DemoVerifier {
    secret: String,
}

impl std::fmt::Debug for DemoVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoVerifier").field("secret", &"<redacted>").finish()
    }
}

impl DemoVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Read the secret from `PINPAD_SECRET`, falling back to `DEFAULT_SECRET`
    pub fn from_env() -> Self {
        Self::new(std::env::var(SECRET_ENV).unwrap_or_else(|_| DEFAULT_SECRET.to_string()))
    }

    /// Whether a pad built from `options` can ever produce this secret
    pub fn is_reachable(&self, options: &PinPadOptions) -> bool {
        self.secret.len() == options.max_length && self.secret.chars().all(|c| c.is_ascii_digit())
    }

    /// Status to report for a completed code.
    ///
    /// Plain string comparison; a real backend should compare against a
    /// stored hash instead.
    pub fn verify(&self, code: &str) -> ValidationStatus {
        if code == self.secret {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        }
    }
}
