//! Proficiency ranks and the ordering lattice over them.
//!
//! Ranks form a total order, and the lattice functions here are pure:
//! they never touch a store. Merging via [`max_rank`] is how "never
//! downgrade a proficiency" is implemented.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A proficiency level. The derived `Ord` is the lattice order:
/// Untrained < Trained < Expert < Master < Legendary.
///
/// Serialized as the one-letter codes (`"U"`, `"T"`, ...) the rest of the
/// toolchain stores in content payloads.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ProficiencyRank {
    /// No training at all.
    #[default]
    #[serde(rename = "U")]
    Untrained,
    /// Basic training.
    #[serde(rename = "T")]
    Trained,
    /// Expert-level training.
    #[serde(rename = "E")]
    Expert,
    /// Master-level training.
    #[serde(rename = "M")]
    Master,
    /// The highest attainable rank.
    #[serde(rename = "L")]
    Legendary,
}

impl ProficiencyRank {
    /// Parse a one-letter rank code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "U" => Some(Self::Untrained),
            "T" => Some(Self::Trained),
            "E" => Some(Self::Expert),
            "M" => Some(Self::Master),
            "L" => Some(Self::Legendary),
            _ => None,
        }
    }

    /// The one-letter code for this rank.
    pub fn code(self) -> &'static str {
        match self {
            Self::Untrained => "U",
            Self::Trained => "T",
            Self::Expert => "E",
            Self::Master => "M",
            Self::Legendary => "L",
        }
    }
}

impl fmt::Display for ProficiencyRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untrained => write!(f, "Untrained"),
            Self::Trained => write!(f, "Trained"),
            Self::Expert => write!(f, "Expert"),
            Self::Master => write!(f, "Master"),
            Self::Legendary => write!(f, "Legendary"),
        }
    }
}

/// The higher of two ranks. Commutative and idempotent.
pub fn max_rank(a: ProficiencyRank, b: ProficiencyRank) -> ProficiencyRank {
    a.max(b)
}

/// The rank one step above `r`, clamped at Legendary.
pub fn next_rank(r: ProficiencyRank) -> ProficiencyRank {
    match r {
        ProficiencyRank::Untrained => ProficiencyRank::Trained,
        ProficiencyRank::Trained => ProficiencyRank::Expert,
        ProficiencyRank::Expert => ProficiencyRank::Master,
        ProficiencyRank::Master | ProficiencyRank::Legendary => ProficiencyRank::Legendary,
    }
}

/// The rank one step below `r`, clamped at Untrained.
pub fn prev_rank(r: ProficiencyRank) -> ProficiencyRank {
    match r {
        ProficiencyRank::Untrained | ProficiencyRank::Trained => ProficiencyRank::Untrained,
        ProficiencyRank::Expert => ProficiencyRank::Trained,
        ProficiencyRank::Master => ProficiencyRank::Expert,
        ProficiencyRank::Legendary => ProficiencyRank::Master,
    }
}

/// A relative, single-step proficiency adjustment.
///
/// Content payloads encode these as the tokens `"1"` and `"-1"` alongside
/// the absolute rank codes; [`RankStep::parse`] recognizes both spellings
/// of the upward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankStep {
    /// One rank up, clamped at Legendary.
    #[serde(rename = "1")]
    Up,
    /// One rank down, clamped at Untrained.
    #[serde(rename = "-1")]
    Down,
}

impl RankStep {
    /// Parse a relative step token. Anything other than the two recognized
    /// tokens yields `None`; callers surface that as an invalid adjustment.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" | "+1" => Some(Self::Up),
            "-1" => Some(Self::Down),
            _ => None,
        }
    }

    /// Apply this step to a rank.
    pub fn apply(self, rank: ProficiencyRank) -> ProficiencyRank {
        match self {
            Self::Up => next_rank(rank),
            Self::Down => prev_rank(rank),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn any_rank() -> impl Strategy<Value = ProficiencyRank> {
        prop_oneof![
            Just(ProficiencyRank::Untrained),
            Just(ProficiencyRank::Trained),
            Just(ProficiencyRank::Expert),
            Just(ProficiencyRank::Master),
            Just(ProficiencyRank::Legendary),
        ]
    }

    #[test]
    fn lattice_order() {
        assert!(ProficiencyRank::Untrained < ProficiencyRank::Trained);
        assert!(ProficiencyRank::Trained < ProficiencyRank::Expert);
        assert!(ProficiencyRank::Expert < ProficiencyRank::Master);
        assert!(ProficiencyRank::Master < ProficiencyRank::Legendary);
    }

    #[test]
    fn next_rank_clamps_at_legendary() {
        assert_eq!(
            next_rank(ProficiencyRank::Legendary),
            ProficiencyRank::Legendary
        );
        assert_eq!(next_rank(ProficiencyRank::Master), ProficiencyRank::Legendary);
    }

    #[test]
    fn prev_rank_clamps_at_untrained() {
        assert_eq!(
            prev_rank(ProficiencyRank::Untrained),
            ProficiencyRank::Untrained
        );
        assert_eq!(prev_rank(ProficiencyRank::Trained), ProficiencyRank::Untrained);
    }

    #[test]
    fn code_roundtrip() {
        for rank in [
            ProficiencyRank::Untrained,
            ProficiencyRank::Trained,
            ProficiencyRank::Expert,
            ProficiencyRank::Master,
            ProficiencyRank::Legendary,
        ] {
            assert_eq!(ProficiencyRank::from_code(rank.code()), Some(rank));
        }
        assert_eq!(ProficiencyRank::from_code("X"), None);
    }

    #[test]
    fn step_parse() {
        assert_eq!(RankStep::parse("1"), Some(RankStep::Up));
        assert_eq!(RankStep::parse("+1"), Some(RankStep::Up));
        assert_eq!(RankStep::parse("-1"), Some(RankStep::Down));
        assert_eq!(RankStep::parse("+2"), None);
        assert_eq!(RankStep::parse(""), None);
    }

    #[test]
    fn step_apply() {
        assert_eq!(
            RankStep::Up.apply(ProficiencyRank::Untrained),
            ProficiencyRank::Trained
        );
        assert_eq!(
            RankStep::Down.apply(ProficiencyRank::Expert),
            ProficiencyRank::Trained
        );
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&ProficiencyRank::Trained).unwrap();
        assert_eq!(json, "\"T\"");
        let back: ProficiencyRank = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(back, ProficiencyRank::Legendary);
    }

    proptest! {
        #[test]
        fn max_rank_commutative(a in any_rank(), b in any_rank()) {
            prop_assert_eq!(max_rank(a, b), max_rank(b, a));
        }

        #[test]
        fn max_rank_idempotent(a in any_rank()) {
            prop_assert_eq!(max_rank(a, a), a);
        }

        #[test]
        fn max_rank_is_upper_bound(a in any_rank(), b in any_rank()) {
            let m = max_rank(a, b);
            prop_assert!(m >= a);
            prop_assert!(m >= b);
        }

        #[test]
        fn step_moves_at_most_one(r in any_rank()) {
            let up = next_rank(r);
            let down = prev_rank(r);
            prop_assert!(up >= r);
            prop_assert!(down <= r);
            prop_assert!((up as i8 - r as i8) <= 1);
            prop_assert!((r as i8 - down as i8) <= 1);
        }
    }
}
