//! Variables: named, typed value slots whose variant is fixed at creation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeValue;
use crate::proficiency::{ProficiencyRank, RankStep};

/// The declared kind of a variable.
///
/// Serialized with the kebab-case names (`"num"`, `"list-str"`, ...) that
/// content payloads use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariableKind {
    /// Plain numeric total.
    Num,
    /// Plain string.
    Str,
    /// Flag, only AND-combinable via adjust.
    Bool,
    /// Accumulated set of tags/ids/names.
    ListStr,
    /// Attribute value under the boost/flaw rule.
    Attr,
    /// Proficiency level, optionally tied to an attribute variable.
    Prof,
}

impl VariableKind {
    /// Parse a kind from its content-payload name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "num" => Some(Self::Num),
            "str" => Some(Self::Str),
            "bool" => Some(Self::Bool),
            "list-str" => Some(Self::ListStr),
            "attr" => Some(Self::Attr),
            "prof" => Some(Self::Prof),
            _ => None,
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num => write!(f, "num"),
            Self::Str => write!(f, "str"),
            Self::Bool => write!(f, "bool"),
            Self::ListStr => write!(f, "list-str"),
            Self::Attr => write!(f, "attr"),
            Self::Prof => write!(f, "prof"),
        }
    }
}

/// A proficiency rank with an optional link to the `attr` variable used
/// when deriving a roll modifier from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProficiencyValue {
    /// Current rank.
    pub rank: ProficiencyRank,
    /// Name of the linked attribute variable, if any.
    pub attribute: Option<String>,
}

impl ProficiencyValue {
    /// A rank with no attribute link.
    pub fn new(rank: ProficiencyRank) -> Self {
        Self {
            rank,
            attribute: None,
        }
    }

    /// A rank linked to an attribute variable by name.
    pub fn with_attribute(rank: ProficiencyRank, attribute: impl Into<String>) -> Self {
        Self {
            rank,
            attribute: Some(attribute.into()),
        }
    }
}

impl fmt::Display for ProficiencyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attribute) => write!(f, "{} ({attribute})", self.rank),
            None => write!(f, "{}", self.rank),
        }
    }
}

/// A variable's payload. The variant never changes after the variable is
/// created; every mutation validates against the declared kind first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// Plain numeric total.
    Num(i64),
    /// Plain string.
    Str(String),
    /// Boolean flag.
    Bool(bool),
    /// Unique strings, first-occurrence order kept.
    ListStr(Vec<String>),
    /// Attribute score with partial-boost state.
    Attr(AttributeValue),
    /// Proficiency rank with optional attribute link.
    Prof(ProficiencyValue),
}

impl VariableValue {
    /// The kind of this payload.
    pub fn kind(&self) -> VariableKind {
        match self {
            Self::Num(_) => VariableKind::Num,
            Self::Str(_) => VariableKind::Str,
            Self::Bool(_) => VariableKind::Bool,
            Self::ListStr(_) => VariableKind::ListStr,
            Self::Attr(_) => VariableKind::Attr,
            Self::Prof(_) => VariableKind::Prof,
        }
    }

    /// The zero value for a kind: `0`, `""`, `false`, an empty list, a
    /// zeroed attribute, or an untrained proficiency.
    pub fn zero(kind: VariableKind) -> Self {
        match kind {
            VariableKind::Num => Self::Num(0),
            VariableKind::Str => Self::Str(String::new()),
            VariableKind::Bool => Self::Bool(false),
            VariableKind::ListStr => Self::ListStr(Vec::new()),
            VariableKind::Attr => Self::Attr(AttributeValue::default()),
            VariableKind::Prof => Self::Prof(ProficiencyValue::default()),
        }
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::ListStr(items) => write!(f, "[{}]", items.join(", ")),
            Self::Attr(attr) => write!(f, "{attr}"),
            Self::Prof(prof) => write!(f, "{prof}"),
        }
    }
}

/// Drop duplicate strings, keeping the first occurrence of each.
pub(crate) fn dedup_list(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// A named, typed value slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Uppercase, underscore-delimited name. The convention is enforced by
    /// callers, not by the store.
    pub name: String,
    /// Current payload.
    pub value: VariableValue,
}

impl Variable {
    /// Create a variable holding its kind's zero value.
    pub fn new(kind: VariableKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: VariableValue::zero(kind),
        }
    }

    /// Create a variable seeded with `value`. A seed whose kind does not
    /// match falls back to the kind's zero value; list seeds are
    /// deduplicated.
    pub fn with_value(kind: VariableKind, name: impl Into<String>, value: VariableValue) -> Self {
        let value = if value.kind() == kind {
            match value {
                VariableValue::ListStr(items) => VariableValue::ListStr(dedup_list(items)),
                other => other,
            }
        } else {
            VariableValue::zero(kind)
        };
        Self {
            name: name.into(),
            value,
        }
    }

    /// The declared kind of this variable.
    pub fn kind(&self) -> VariableKind {
        self.value.kind()
    }
}

/// A merge payload for [`adj_variable`](crate::store::VariableStore::adj_variable).
///
/// Each variant targets one variable kind; applying an adjustment to a
/// variable of any other kind is an invalid adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjustment {
    /// Add to a `num` variable.
    Num(i64),
    /// Concatenate onto a `str` variable.
    Str(String),
    /// AND into a `bool` variable; the result can only move toward false.
    Bool(bool),
    /// Insert one value into a `list-str` variable, discarding duplicates.
    ListItem(String),
    /// Boost, flaw, or no-op an `attr` variable.
    Attr {
        /// Requested delta; must be -1, 0, or 1.
        delta: i64,
        /// When present, overwrites the partial flag after the delta.
        partial: Option<bool>,
    },
    /// Raise a `prof` variable to at least `rank`; never downgrades.
    ProfRank {
        /// Floor rank, merged with the current rank via `max_rank`.
        rank: ProficiencyRank,
        /// When present, overwrites the stored attribute link.
        attribute: Option<String>,
    },
    /// Step a `prof` variable one rank up or down.
    ProfStep {
        /// Direction of the step.
        step: RankStep,
        /// When present, overwrites the stored attribute link.
        attribute: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_and_display_roundtrip() {
        for kind in [
            VariableKind::Num,
            VariableKind::Str,
            VariableKind::Bool,
            VariableKind::ListStr,
            VariableKind::Attr,
            VariableKind::Prof,
        ] {
            assert_eq!(VariableKind::parse(&kind.to_string()), Some(kind));
        }
        assert_eq!(VariableKind::parse("list_str"), None);
    }

    #[test]
    fn zero_values_match_their_kind() {
        for kind in [
            VariableKind::Num,
            VariableKind::Str,
            VariableKind::Bool,
            VariableKind::ListStr,
            VariableKind::Attr,
            VariableKind::Prof,
        ] {
            assert_eq!(VariableValue::zero(kind).kind(), kind);
        }
    }

    #[test]
    fn with_value_accepts_matching_seed() {
        let v = Variable::with_value(VariableKind::Num, "LEVEL", VariableValue::Num(5));
        assert_eq!(v.value, VariableValue::Num(5));
    }

    #[test]
    fn with_value_falls_back_on_kind_mismatch() {
        let v = Variable::with_value(VariableKind::Num, "LEVEL", VariableValue::Bool(true));
        assert_eq!(v.value, VariableValue::Num(0));
    }

    #[test]
    fn with_value_dedups_list_seed() {
        let v = Variable::with_value(
            VariableKind::ListStr,
            "LANGUAGE_NAMES",
            VariableValue::ListStr(vec![
                "ELVISH".to_string(),
                "DWARVISH".to_string(),
                "ELVISH".to_string(),
            ]),
        );
        assert_eq!(
            v.value,
            VariableValue::ListStr(vec!["ELVISH".to_string(), "DWARVISH".to_string()])
        );
    }

    #[test]
    fn display_formats() {
        assert_eq!(VariableValue::Num(7).to_string(), "7");
        assert_eq!(
            VariableValue::ListStr(vec!["A".to_string(), "B".to_string()]).to_string(),
            "[A, B]"
        );
        let prof = VariableValue::Prof(ProficiencyValue::with_attribute(
            ProficiencyRank::Trained,
            "ATTRIBUTE_DEX",
        ));
        assert_eq!(prof.to_string(), "Trained (ATTRIBUTE_DEX)");
    }

    #[test]
    fn variable_serde_roundtrip() {
        let v = Variable::with_value(
            VariableKind::Prof,
            "SAVE_FORT",
            VariableValue::Prof(ProficiencyValue::with_attribute(
                ProficiencyRank::Expert,
                "ATTRIBUTE_CON",
            )),
        );
        let json = serde_json::to_string(&v).unwrap();
        let back: Variable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn attr_value_serde_roundtrip() {
        let v = VariableValue::Attr(AttributeValue {
            score: 4,
            partial: true,
        });
        let json = serde_json::to_string(&v).unwrap();
        let back: VariableValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
