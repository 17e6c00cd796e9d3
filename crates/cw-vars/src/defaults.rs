//! The Default Registry: the fixed baseline set of named variables every
//! new store is seeded with.
//!
//! Names follow the uppercase, underscore-delimited convention used by the
//! content operations that mutate them. `SKILL_LORE____` is the template
//! slot lore skills are cloned from.

use std::collections::HashMap;

use crate::proficiency::ProficiencyRank;
use crate::variable::{ProficiencyValue, Variable, VariableKind, VariableValue};

fn add(vars: &mut HashMap<String, Variable>, kind: VariableKind, name: &str) {
    vars.insert(name.to_string(), Variable::new(kind, name));
}

fn add_prof(vars: &mut HashMap<String, Variable>, name: &str) {
    add(vars, VariableKind::Prof, name);
}

fn add_prof_linked(vars: &mut HashMap<String, Variable>, name: &str, attribute: &str) {
    vars.insert(
        name.to_string(),
        Variable::with_value(
            VariableKind::Prof,
            name,
            VariableValue::Prof(ProficiencyValue::with_attribute(
                ProficiencyRank::Untrained,
                attribute,
            )),
        ),
    );
}

fn add_seeded(vars: &mut HashMap<String, Variable>, kind: VariableKind, name: &str, seed: VariableValue) {
    vars.insert(name.to_string(), Variable::with_value(kind, name, seed));
}

fn list_seed(items: &[&str]) -> VariableValue {
    VariableValue::ListStr(items.iter().map(|s| s.to_string()).collect())
}

/// Build the Default Registry. Each new store receives its own copy; no
/// variable is ever shared between stores.
pub fn default_variables() -> HashMap<String, Variable> {
    let mut vars = HashMap::new();

    // Attributes
    for name in [
        "ATTRIBUTE_STR",
        "ATTRIBUTE_DEX",
        "ATTRIBUTE_CON",
        "ATTRIBUTE_INT",
        "ATTRIBUTE_WIS",
        "ATTRIBUTE_CHA",
    ] {
        add(&mut vars, VariableKind::Attr, name);
    }

    // Saves
    add_prof_linked(&mut vars, "SAVE_FORT", "ATTRIBUTE_CON");
    add_prof_linked(&mut vars, "SAVE_REFLEX", "ATTRIBUTE_DEX");
    add_prof_linked(&mut vars, "SAVE_WILL", "ATTRIBUTE_WIS");

    // Core skills
    for (name, attribute) in [
        ("SKILL_ACROBATICS", "ATTRIBUTE_DEX"),
        ("SKILL_ARCANA", "ATTRIBUTE_INT"),
        ("SKILL_ATHLETICS", "ATTRIBUTE_STR"),
        ("SKILL_CRAFTING", "ATTRIBUTE_INT"),
        ("SKILL_DECEPTION", "ATTRIBUTE_CHA"),
        ("SKILL_DIPLOMACY", "ATTRIBUTE_CHA"),
        ("SKILL_INTIMIDATION", "ATTRIBUTE_CHA"),
        ("SKILL_MEDICINE", "ATTRIBUTE_WIS"),
        ("SKILL_NATURE", "ATTRIBUTE_WIS"),
        ("SKILL_OCCULTISM", "ATTRIBUTE_INT"),
        ("SKILL_PERFORMANCE", "ATTRIBUTE_CHA"),
        ("SKILL_RELIGION", "ATTRIBUTE_WIS"),
        ("SKILL_SOCIETY", "ATTRIBUTE_INT"),
        ("SKILL_STEALTH", "ATTRIBUTE_DEX"),
        ("SKILL_SURVIVAL", "ATTRIBUTE_WIS"),
        ("SKILL_THIEVERY", "ATTRIBUTE_DEX"),
        ("SKILL_LORE____", "ATTRIBUTE_INT"),
    ] {
        add_prof_linked(&mut vars, name, attribute);
    }

    // Spellcasting
    add_prof(&mut vars, "SPELL_ATTACK");
    add_prof(&mut vars, "SPELL_DC");
    add(&mut vars, VariableKind::ListStr, "CASTING_SOURCES");
    add(&mut vars, VariableKind::ListStr, "SPELL_SLOTS");
    add(&mut vars, VariableKind::ListStr, "SPELL_DATA");

    // Armor categories
    add_prof(&mut vars, "LIGHT_ARMOR");
    add_prof(&mut vars, "MEDIUM_ARMOR");
    add_prof(&mut vars, "HEAVY_ARMOR");
    add_prof(&mut vars, "UNARMORED_DEFENSE");

    // Weapon categories
    add_prof(&mut vars, "SIMPLE_WEAPONS");
    add_prof(&mut vars, "MARTIAL_WEAPONS");
    add_prof(&mut vars, "ADVANCED_WEAPONS");
    add_prof(&mut vars, "UNARMED_ATTACKS");

    add_prof_linked(&mut vars, "PERCEPTION", "ATTRIBUTE_WIS");
    add_prof(&mut vars, "CLASS_DC");
    add(&mut vars, VariableKind::Num, "LEVEL");
    add(&mut vars, VariableKind::Str, "SIZE");
    add(&mut vars, VariableKind::ListStr, "CORE_LANGUAGE_NAMES");

    // Health pools
    for name in [
        "MAX_HEALTH_ANCESTRY",
        "MAX_HEALTH_CLASS_PER_LEVEL",
        "MAX_HEALTH_BONUS",
        "HEALTH",
        "TEMP_HEALTH",
    ] {
        add(&mut vars, VariableKind::Num, name);
    }

    add(&mut vars, VariableKind::Num, "AC_BONUS");
    add(&mut vars, VariableKind::Bool, "UNARMORED");

    // Speeds
    for name in [
        "SPEED",
        "SPEED_FLY",
        "SPEED_CLIMB",
        "SPEED_BURROW",
        "SPEED_SWIM",
    ] {
        add(&mut vars, VariableKind::Num, name);
    }

    // Senses; use <NAME>-30 to indicate a range
    add_seeded(
        &mut vars,
        VariableKind::ListStr,
        "SENSES_PRECISE",
        list_seed(&["NORMAL_VISION"]),
    );
    add_seeded(
        &mut vars,
        VariableKind::ListStr,
        "SENSES_IMPRECISE",
        list_seed(&["HEARING"]),
    );
    add_seeded(
        &mut vars,
        VariableKind::ListStr,
        "SENSES_VAGUE",
        list_seed(&["SMELL"]),
    );

    // Resistances, weaknesses, and immunities; use <NAME>-30 for an amount
    add(&mut vars, VariableKind::ListStr, "RESISTANCES");
    add(&mut vars, VariableKind::ListStr, "WEAKNESSES");
    add(&mut vars, VariableKind::ListStr, "IMMUNITIES");

    // Granted content, by name and by id
    for family in [
        "SENSE", "CLASS", "ANCESTRY", "BACKGROUND", "HERITAGE", "FEAT", "SPELL", "LANGUAGE",
        "CLASS_FEATURE", "PHYSICAL_FEATURE",
    ] {
        add(&mut vars, VariableKind::ListStr, &format!("{family}_NAMES"));
        add(&mut vars, VariableKind::ListStr, &format!("{family}_IDS"));
    }

    // Attack roll/damage totals
    for name in [
        "ATTACK_ROLLS_BONUS",
        "ATTACK_DAMAGE_BONUS",
        "DEX_ATTACK_ROLLS_BONUS",
        "DEX_ATTACK_DAMAGE_BONUS",
        "STR_ATTACK_ROLLS_BONUS",
        "STR_ATTACK_DAMAGE_BONUS",
        "RANGED_ATTACK_ROLLS_BONUS",
        "RANGED_ATTACK_DAMAGE_BONUS",
        "MELEE_ATTACK_ROLLS_BONUS",
        "MELEE_ATTACK_DAMAGE_BONUS",
    ] {
        add(&mut vars, VariableKind::Num, name);
    }

    // Weapon groups
    for group in [
        "AXE", "BOMB", "BOW", "BRAWLING", "CLUB", "CROSSBOW", "DART", "FLAIL", "HAMMER", "KNIFE",
        "PICK", "POLEARM", "SHIELD", "SLING", "SPEAR", "SWORD",
    ] {
        add_prof(&mut vars, &format!("WEAPON_GROUP_{group}"));
    }

    // Armor groups
    for group in ["CHAIN", "COMPOSITE", "LEATHER", "PLATE"] {
        add_prof(&mut vars, &format!("ARMOR_GROUP_{group}"));
    }

    // Builder context
    add_seeded(
        &mut vars,
        VariableKind::Str,
        "PAGE_CONTEXT",
        VariableValue::Str("OUTSIDE".to_string()),
    );
    add_seeded(
        &mut vars,
        VariableKind::ListStr,
        "PRIMARY_BUILDER_TABS",
        list_seed(&[
            "skills-actions",
            "inventory",
            "feats-features",
            "details",
            "notes",
        ]),
    );

    vars
}
