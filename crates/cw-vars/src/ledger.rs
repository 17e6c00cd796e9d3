//! Append-only bonus and history records.
//!
//! The store only records these; it never deduplicates bonus entries or
//! aggregates them into an effective total. That resolution belongs to the
//! bonus-stacking layer outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::variable::VariableValue;

/// One recorded bonus contribution toward a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusEntry {
    /// Numeric amount of the bonus, if it has one.
    pub value: Option<i64>,
    /// Stacking category such as `"status"`, `"item"`, or
    /// `"circumstance"`; untyped when absent.
    pub bonus_type: Option<String>,
    /// Free-text description of the bonus.
    pub text: String,
    /// What granted the bonus.
    pub source: String,
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
}

/// One recorded value transition of a variable.
///
/// Appended on every successful mutation where the new value differs from
/// the previous one; equal values record nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Value after the mutation.
    pub to: VariableValue,
    /// Value before the mutation.
    pub from: VariableValue,
    /// What caused the mutation.
    pub source: String,
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_entry_serde_roundtrip() {
        let entry = BonusEntry {
            value: Some(2),
            bonus_type: Some("status".to_string()),
            text: "+2 status bonus to Athletics".to_string(),
            source: "Heroism".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: BonusEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn history_entry_serde_roundtrip() {
        let entry = HistoryEntry {
            to: VariableValue::Num(3),
            from: VariableValue::Num(1),
            source: "Class".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
