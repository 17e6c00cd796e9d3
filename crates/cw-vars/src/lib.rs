//! Typed variable store for Charwright character builds.
//!
//! Every quantity a build tracks — attribute scores, proficiency ranks,
//! numeric totals, lists of granted abilities — lives here as a named,
//! typed variable. The operation interpreter applies rule-governed
//! mutations through this crate's API; it decides *which* mutations to
//! apply and *when*, while this crate owns the data and its per-variant
//! arithmetic (the attribute boost/flaw accumulation rule, the
//! proficiency-rank lattice) plus the bonus and history ledgers.

/// Attribute scores under the boost/flaw accumulation rule.
pub mod attribute;
/// The Default Registry every new store is seeded with.
pub mod defaults;
/// Error types used throughout the crate.
pub mod error;
/// Append-only bonus and history records.
pub mod ledger;
/// Proficiency ranks and the lattice functions over them.
pub mod proficiency;
/// Typed family queries over a store.
pub mod query;
/// Per-build variable stores and the registry that owns them.
pub mod store;
/// Variables, their kinds, values, and adjustment payloads.
pub mod variable;

/// Re-export the attribute value type.
pub use attribute::AttributeValue;
/// Re-export error types.
pub use error::{VarError, VarResult};
/// Re-export ledger entry types.
pub use ledger::{BonusEntry, HistoryEntry};
/// Re-export the rank lattice.
pub use proficiency::{ProficiencyRank, RankStep, max_rank, next_rank, prev_rank};
/// Re-export query view types.
pub use query::{AttrEntry, NumEntry, ProfEntry};
/// Re-export store types.
pub use store::{StoreId, VariableRegistry, VariableStore};
/// Re-export variable types.
pub use variable::{Adjustment, ProficiencyValue, Variable, VariableKind, VariableValue};
