//! # Validation Status
//!
//! The outcome of validating the entered PIN. The host application computes it
//! (against a stored secret, a remote service, ...) and hands it to the pad.

use serde::{Deserialize, Serialize};

/// Validation status of the pad, owned by the host.
///
/// Only `Idle` and `Invalid` accept input: `Verifying` waits for the host and
/// `Valid` is terminal until the host resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// Waiting for input
    #[default]
    Idle,
    /// Completed code handed to the host, awaiting its answer
    Verifying,
    /// Host accepted the code
    Valid,
    /// Host rejected the code
    Invalid,
}

impl ValidationStatus {
    pub const ALL: &'static [ValidationStatus] = &[
        ValidationStatus::Idle,
        ValidationStatus::Verifying,
        ValidationStatus::Valid,
        ValidationStatus::Invalid,
    ];

    /// Whether digit and backspace controls are interactive
    pub fn accepts_input(&self) -> bool {
        matches!(self, ValidationStatus::Idle | ValidationStatus::Invalid)
    }

    /// Short name for logs and status lines
    pub fn display_name(&self) -> &'static str {
        match self {
            ValidationStatus::Idle => "idle",
            ValidationStatus::Verifying => "verifying",
            ValidationStatus::Valid => "valid",
            ValidationStatus::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_input() {
        assert!(ValidationStatus::Idle.accepts_input());
        assert!(ValidationStatus::Invalid.accepts_input());
        assert!(!ValidationStatus::Verifying.accepts_input());
        assert!(!ValidationStatus::Valid.accepts_input());
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ValidationStatus::default(), ValidationStatus::Idle);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ValidationStatus::Verifying).unwrap();
        assert_eq!(json, "\"verifying\"");

        let roundtrip: ValidationStatus = serde_json::from_str("\"invalid\"").unwrap();
        assert_eq!(roundtrip, ValidationStatus::Invalid);
    }
}
