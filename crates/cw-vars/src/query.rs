//! Typed family queries over a store.
//!
//! Variables belong to families by name prefix (`SKILL_`, `SAVE_`, ...).
//! These helpers scan all entries of one store, keep those whose name
//! matches the prefix and whose kind matches the family, and return them
//! sorted by name so output is deterministic despite HashMap storage.

use crate::store::VariableStore;
use crate::variable::{ProficiencyValue, VariableValue};

const SKILL_PREFIX: &str = "SKILL_";
const SAVE_PREFIX: &str = "SAVE_";
const ATTRIBUTE_PREFIX: &str = "ATTRIBUTE_";
const WEAPON_PREFIX: &str = "WEAPON_";
const WEAPON_GROUP_PREFIX: &str = "WEAPON_GROUP_";
const ARMOR_PREFIX: &str = "ARMOR_";
const ARMOR_GROUP_PREFIX: &str = "ARMOR_GROUP_";
const SPEED_PREFIX: &str = "SPEED_";

/// A borrowed view of a proficiency variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfEntry<'a> {
    /// Variable name.
    pub name: &'a str,
    /// The proficiency payload.
    pub value: &'a ProficiencyValue,
}

/// A borrowed view of an attribute variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrEntry<'a> {
    /// Variable name.
    pub name: &'a str,
    /// The attribute payload.
    pub value: crate::attribute::AttributeValue,
}

/// A borrowed view of a numeric variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumEntry<'a> {
    /// Variable name.
    pub name: &'a str,
    /// The numeric payload.
    pub value: i64,
}

impl VariableStore {
    /// All `SKILL_*` proficiency variables, sorted by name.
    pub fn skill_variables(&self) -> Vec<ProfEntry<'_>> {
        self.prof_family(SKILL_PREFIX, None)
    }

    /// All `SAVE_*` proficiency variables, sorted by name.
    pub fn save_variables(&self) -> Vec<ProfEntry<'_>> {
        self.prof_family(SAVE_PREFIX, None)
    }

    /// All `WEAPON_GROUP_*` proficiency variables, sorted by name.
    pub fn weapon_group_variables(&self) -> Vec<ProfEntry<'_>> {
        self.prof_family(WEAPON_GROUP_PREFIX, None)
    }

    /// All `ARMOR_GROUP_*` proficiency variables, sorted by name.
    pub fn armor_group_variables(&self) -> Vec<ProfEntry<'_>> {
        self.prof_family(ARMOR_GROUP_PREFIX, None)
    }

    /// `WEAPON_*` proficiency variables that are not weapon groups,
    /// sorted by name. Covers individual weapon proficiencies installed by
    /// content operations.
    pub fn weapon_variables(&self) -> Vec<ProfEntry<'_>> {
        self.prof_family(WEAPON_PREFIX, Some(WEAPON_GROUP_PREFIX))
    }

    /// `ARMOR_*` proficiency variables that are not armor groups, sorted
    /// by name.
    pub fn armor_variables(&self) -> Vec<ProfEntry<'_>> {
        self.prof_family(ARMOR_PREFIX, Some(ARMOR_GROUP_PREFIX))
    }

    /// All `ATTRIBUTE_*` attribute variables, sorted by name.
    pub fn attribute_variables(&self) -> Vec<AttrEntry<'_>> {
        let mut out: Vec<AttrEntry<'_>> = self
            .variables()
            .filter_map(|var| match &var.value {
                VariableValue::Attr(value) if var.name.starts_with(ATTRIBUTE_PREFIX) => {
                    Some(AttrEntry {
                        name: &var.name,
                        value: *value,
                    })
                }
                _ => None,
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(b.name));
        out
    }

    /// `SPEED` and `SPEED_*` numeric variables, sorted by name.
    pub fn speed_variables(&self) -> Vec<NumEntry<'_>> {
        let mut out: Vec<NumEntry<'_>> = self
            .variables()
            .filter_map(|var| match &var.value {
                VariableValue::Num(value)
                    if var.name == "SPEED" || var.name.starts_with(SPEED_PREFIX) =>
                {
                    Some(NumEntry {
                        name: &var.name,
                        value: *value,
                    })
                }
                _ => None,
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(b.name));
        out
    }

    fn prof_family(&self, prefix: &str, exclude: Option<&str>) -> Vec<ProfEntry<'_>> {
        let mut out: Vec<ProfEntry<'_>> = self
            .variables()
            .filter_map(|var| match &var.value {
                VariableValue::Prof(value)
                    if var.name.starts_with(prefix)
                        && exclude.is_none_or(|e| !var.name.starts_with(e)) =>
                {
                    Some(ProfEntry {
                        name: &var.name,
                        value,
                    })
                }
                _ => None,
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(b.name));
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::proficiency::ProficiencyRank;
    use crate::store::VariableStore;
    use crate::variable::{VariableKind, VariableValue};

    #[test]
    fn skills_are_the_seventeen_core_skills() {
        let store = VariableStore::new();
        let skills = store.skill_variables();
        assert_eq!(skills.len(), 17);
        // Sorted by name
        assert_eq!(skills[0].name, "SKILL_ACROBATICS");
        assert!(skills.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn saves_and_attributes() {
        let store = VariableStore::new();
        assert_eq!(store.save_variables().len(), 3);

        let attrs = store.attribute_variables();
        assert_eq!(attrs.len(), 6);
        assert_eq!(attrs[0].name, "ATTRIBUTE_CHA");
    }

    #[test]
    fn weapon_family_excludes_groups() {
        let mut store = VariableStore::new();
        assert_eq!(store.weapon_group_variables().len(), 16);
        assert!(store.weapon_variables().is_empty());

        store.add_variable(VariableKind::Prof, "WEAPON_LONGSWORD", None);
        let weapons = store.weapon_variables();
        assert_eq!(weapons.len(), 1);
        assert_eq!(weapons[0].name, "WEAPON_LONGSWORD");
        assert_eq!(store.weapon_group_variables().len(), 16);
    }

    #[test]
    fn armor_family_excludes_groups() {
        let mut store = VariableStore::new();
        assert_eq!(store.armor_group_variables().len(), 4);
        store.add_variable(VariableKind::Prof, "ARMOR_BREASTPLATE", None);
        let armors = store.armor_variables();
        assert_eq!(armors.len(), 1);
        assert_eq!(armors[0].name, "ARMOR_BREASTPLATE");
    }

    #[test]
    fn family_filters_on_kind_too() {
        let mut store = VariableStore::new();
        // A num variable with a skill-like name is not a skill.
        store.add_variable(VariableKind::Num, "SKILL_POINTS", None);
        assert_eq!(store.skill_variables().len(), 17);
    }

    #[test]
    fn speed_family_includes_base_speed() {
        let store = VariableStore::new();
        let speeds = store.speed_variables();
        assert_eq!(speeds.len(), 5);
        assert!(speeds.iter().any(|s| s.name == "SPEED"));
        assert!(speeds.iter().all(|s| s.value == 0));
    }

    #[test]
    fn prof_entries_expose_rank() {
        let mut store = VariableStore::new();
        store
            .set_variable(
                "SKILL_STEALTH",
                VariableValue::Prof(crate::variable::ProficiencyValue::new(
                    ProficiencyRank::Master,
                )),
                "test",
            )
            .unwrap();
        let stealth = store
            .skill_variables()
            .into_iter()
            .find(|s| s.name == "SKILL_STEALTH")
            .unwrap();
        assert_eq!(stealth.value.rank, ProficiencyRank::Master);
    }
}
