//! Attribute scores under the boost/flaw accumulation rule.
//!
//! Above the normal ceiling, two half-boosts are needed to grant one full
//! point; penalties are never halved.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{VarError, VarResult};

/// Score at which further boosts must be paired to grant a point.
const PARTIAL_THRESHOLD: i64 = 4;

/// An attribute score with its pending half-boost state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Current score.
    pub score: i64,
    /// Whether a half-boost is banked, waiting for its pair.
    pub partial: bool,
}

impl AttributeValue {
    /// Create a value at the given score with no banked half-boost.
    pub fn new(score: i64) -> Self {
        Self {
            score,
            partial: false,
        }
    }

    /// Apply a boost (`+1`), flaw (`-1`), or no-op (`0`).
    ///
    /// Flaws always subtract directly. Boosts add directly below the
    /// pairing threshold; at or above it, the first boost is banked as a
    /// half and the second converts the banked half into a full point.
    /// A `partial_override` of `Some(p)` overwrites the banked state after
    /// the delta is applied.
    ///
    /// Deltas outside `{-1, 0, 1}` are rejected with
    /// [`VarError::InvalidAdjustment`].
    pub fn apply(&mut self, delta: i64, partial_override: Option<bool>) -> VarResult<()> {
        match delta {
            -1 => self.score -= 1,
            0 => {}
            1 => {
                if self.score >= PARTIAL_THRESHOLD {
                    if self.partial {
                        self.score += 1;
                        self.partial = false;
                    } else {
                        self.partial = true;
                    }
                } else {
                    self.score += 1;
                }
            }
            other => {
                return Err(VarError::InvalidAdjustment(format!(
                    "attribute delta must be -1, 0, or 1, got {other}"
                )));
            }
        }
        if let Some(partial) = partial_override {
            self.partial = partial;
        }
        Ok(())
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.partial {
            write!(f, "{} (partial)", self.score)
        } else {
            write!(f, "{}", self.score)
        }
    }
}
