// ---------------------------------------------------------------------------
// StockpileError: configuration and boundary errors for the engine
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors surfaced by the stockpile engine.
///
/// None of these are business conditions: an unknown key or a malformed
/// profile is a configuration bug, and a negative headcount is rejected at
/// the input boundary before the engine runs.
#[derive(Debug, Clone, PartialEq)]
pub enum StockpileError {
    /// A risk level or location is missing from the supplied reference table.
    UnknownEnumKey { table: &'static str, key: String },
    /// Headcount below zero.
    InvalidHeadcount(i64),
    /// A reference table entry holds a value the engine cannot use.
    InvalidProfile {
        table: &'static str,
        key: String,
        reason: &'static str,
    },
}

impl fmt::Display for StockpileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockpileError::UnknownEnumKey { table, key } => {
                write!(f, "Unknown key '{key}' in {table} table")
            }
            StockpileError::InvalidHeadcount(n) => {
                write!(f, "Invalid headcount: {n} (must be >= 0)")
            }
            StockpileError::InvalidProfile { table, key, reason } => {
                write!(f, "Invalid {table} profile '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for StockpileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_key() {
        let err = StockpileError::UnknownEnumKey {
            table: "location",
            key: "nagoya".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("nagoya"), "got: {msg}");
        assert!(msg.contains("location"), "got: {msg}");
    }

    #[test]
    fn test_display_invalid_headcount() {
        let msg = format!("{}", StockpileError::InvalidHeadcount(-5));
        assert!(msg.contains("-5"), "got: {msg}");
    }

    #[test]
    fn test_display_invalid_profile() {
        let err = StockpileError::InvalidProfile {
            table: "hazard",
            key: "low".to_string(),
            reason: "stockpile days must be positive",
        };
        let msg = format!("{err}");
        assert!(msg.contains("hazard"), "got: {msg}");
        assert!(msg.contains("must be positive"), "got: {msg}");
    }

    #[test]
    fn test_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(StockpileError::InvalidHeadcount(-1));
        assert!(err.source().is_none());
    }
}
