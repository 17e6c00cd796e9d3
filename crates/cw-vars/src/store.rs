//! Per-build variable stores and the registry that owns them.
//!
//! Each store is an isolated scope: its own variables seeded from the
//! Default Registry, plus bonus and history ledgers keyed by variable
//! name. The registry replaces what used to be process-wide global state
//! with an explicitly owned container, so its lifetime is tied to whatever
//! orchestrates character builds.

use std::collections::HashMap;
use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::defaults::default_variables;
use crate::error::{VarError, VarResult};
use crate::ledger::{BonusEntry, HistoryEntry};
use crate::proficiency::max_rank;
use crate::variable::{Adjustment, Variable, VariableKind, VariableValue, dedup_list};

/// Identifier naming one isolated variable scope, typically one character
/// build. Any stable string works; one id is conventionally reserved for
/// default rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(String);

impl StoreId {
    /// Create an id from any string-ish key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StoreId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StoreId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One build's variables plus its bonus and history ledgers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableStore {
    variables: HashMap<String, Variable>,
    bonuses: HashMap<String, Vec<BonusEntry>>,
    history: HashMap<String, Vec<HistoryEntry>>,
}

impl Default for VariableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableStore {
    /// Create a store seeded with its own copy of the Default Registry.
    pub fn new() -> Self {
        Self {
            variables: default_variables(),
            bonuses: HashMap::new(),
            history: HashMap::new(),
        }
    }

    /// Create a store with no variables at all.
    pub fn empty() -> Self {
        Self {
            variables: HashMap::new(),
            bonuses: HashMap::new(),
            history: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Variable CRUD
    // -----------------------------------------------------------------------

    /// Install a new variable of `kind` under `name`, overwriting any
    /// existing variable of that name. A seed whose kind does not match
    /// falls back to the kind's zero value. Returns the installed variable.
    pub fn add_variable(
        &mut self,
        kind: VariableKind,
        name: impl Into<String>,
        seed: Option<VariableValue>,
    ) -> &Variable {
        let name = name.into();
        let variable = match seed {
            Some(value) => Variable::with_value(kind, name.clone(), value),
            None => Variable::new(kind, name.clone()),
        };
        self.variables.insert(name.clone(), variable);
        &self.variables[&name]
    }

    /// Remove a variable. Missing names are ignored.
    pub fn remove_variable(&mut self, name: &str) {
        self.variables.remove(name);
    }

    /// Look up a variable by name.
    pub fn get_variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Iterate over every variable in the store.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// Number of registered variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the store holds no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Replace a variable's payload outright after checking the value
    /// against the variable's declared kind.
    ///
    /// Setting a `prof` keeps the stored attribute link unless the new
    /// value carries one; list values are deduplicated. Records a history
    /// entry unless the value is unchanged.
    pub fn set_variable(
        &mut self,
        name: &str,
        value: VariableValue,
        source: impl Into<String>,
    ) -> VarResult<()> {
        let variable = self
            .variables
            .get_mut(name)
            .ok_or_else(|| VarError::UnknownVariable(name.to_string()))?;
        let expected = variable.value.kind();
        let found = value.kind();
        if found != expected {
            return Err(VarError::TypeMismatch {
                name: name.to_string(),
                expected,
                found,
            });
        }

        let old = variable.value.clone();
        match (&mut variable.value, value) {
            (VariableValue::ListStr(current), VariableValue::ListStr(items)) => {
                *current = dedup_list(items);
            }
            (VariableValue::Prof(current), VariableValue::Prof(next)) => {
                current.rank = next.rank;
                if let Some(attribute) = next.attribute {
                    current.attribute = Some(attribute);
                }
            }
            (slot, next) => *slot = next,
        }
        let new = variable.value.clone();

        self.record_history(name, new, old, source.into());
        Ok(())
    }

    /// Merge `amount` into a variable's current value.
    ///
    /// Per kind: `num` adds, `str` concatenates, `bool` ANDs, `list-str`
    /// inserts with duplicates discarded, `attr` applies the boost/flaw
    /// rule, `prof` merges an absolute rank upward via `max_rank` or steps
    /// one rank relatively. An adjustment shaped for any other kind fails
    /// with [`VarError::InvalidAdjustment`]. Records a history entry unless
    /// the value is unchanged.
    pub fn adj_variable(
        &mut self,
        name: &str,
        amount: Adjustment,
        source: impl Into<String>,
    ) -> VarResult<()> {
        let variable = self
            .variables
            .get_mut(name)
            .ok_or_else(|| VarError::UnknownVariable(name.to_string()))?;

        let old = variable.value.clone();
        match (&mut variable.value, amount) {
            (VariableValue::Num(current), Adjustment::Num(delta)) => *current += delta,
            (VariableValue::Str(current), Adjustment::Str(suffix)) => current.push_str(&suffix),
            (VariableValue::Bool(current), Adjustment::Bool(flag)) => *current = *current && flag,
            (VariableValue::ListStr(current), Adjustment::ListItem(item)) => {
                if !current.contains(&item) {
                    current.push(item);
                }
            }
            (VariableValue::Attr(current), Adjustment::Attr { delta, partial }) => {
                current.apply(delta, partial)?;
            }
            (VariableValue::Prof(current), Adjustment::ProfRank { rank, attribute }) => {
                current.rank = max_rank(current.rank, rank);
                if let Some(attribute) = attribute {
                    current.attribute = Some(attribute);
                }
            }
            (VariableValue::Prof(current), Adjustment::ProfStep { step, attribute }) => {
                current.rank = step.apply(current.rank);
                if let Some(attribute) = attribute {
                    current.attribute = Some(attribute);
                }
            }
            (value, amount) => {
                return Err(VarError::InvalidAdjustment(format!(
                    "cannot merge {amount:?} into {} variable \"{name}\"",
                    value.kind()
                )));
            }
        }
        let new = variable.value.clone();

        self.record_history(name, new, old, source.into());
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Ledgers
    // -----------------------------------------------------------------------

    /// Record a bonus contribution for `name`.
    ///
    /// The ledger is independent of whether `name` currently resolves to a
    /// live variable, and entries are never deduplicated or aggregated.
    pub fn add_variable_bonus(
        &mut self,
        name: &str,
        value: Option<i64>,
        bonus_type: Option<String>,
        text: impl Into<String>,
        source: impl Into<String>,
    ) {
        self.bonuses
            .entry(name.to_string())
            .or_default()
            .push(BonusEntry {
                value,
                bonus_type,
                text: text.into(),
                source: source.into(),
                timestamp: Utc::now(),
            });
    }

    /// Bonus entries recorded for `name`, oldest first. Empty when none.
    pub fn get_variable_bonuses(&self, name: &str) -> &[BonusEntry] {
        self.bonuses.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// History entries recorded for `name`, oldest first. Empty when none.
    pub fn get_variable_history(&self, name: &str) -> &[HistoryEntry] {
        self.history.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Append a history entry, unless the value did not actually change.
    /// Equality is deep structural equality for every variant.
    fn record_history(&mut self, name: &str, to: VariableValue, from: VariableValue, source: String) {
        if to == from {
            return;
        }
        self.history
            .entry(name.to_string())
            .or_default()
            .push(HistoryEntry {
                to,
                from,
                source,
                timestamp: Utc::now(),
            });
    }
}

/// Owns every per-build store, keyed by [`StoreId`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariableRegistry {
    stores: HashMap<StoreId, VariableStore>,
}

impl VariableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store for `id`, created and seeded from the Default Registry on
    /// first access.
    pub fn store_mut(&mut self, id: &StoreId) -> &mut VariableStore {
        self.stores.entry(id.clone()).or_default()
    }

    /// The store for `id`, if it has been created.
    pub fn store(&self, id: &StoreId) -> Option<&VariableStore> {
        self.stores.get(id)
    }

    /// Drop one build's store. The next access re-seeds it from the
    /// defaults.
    pub fn reset_store(&mut self, id: &StoreId) {
        self.stores.remove(id);
    }

    /// Drop every store for every id at once.
    pub fn reset_all(&mut self) {
        self.stores.clear();
    }

    /// Number of live stores.
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }
}
