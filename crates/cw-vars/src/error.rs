use crate::variable::VariableKind;

/// Alias for `Result<T, VarError>`.
pub type VarResult<T> = Result<T, VarError>;

/// Errors that can occur when mutating a variable store.
#[derive(Debug, thiserror::Error)]
pub enum VarError {
    /// The named variable is not registered in the store.
    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    /// A value's shape does not match the variable's declared kind.
    #[error("type mismatch for \"{name}\": expected {expected}, got {found}")]
    TypeMismatch {
        /// Name of the variable being mutated.
        name: String,
        /// The kind the variable was created with.
        expected: VariableKind,
        /// The kind of the supplied value.
        found: VariableKind,
    },

    /// An adjustment payload is malformed or out of range.
    #[error("invalid adjustment: {0}")]
    InvalidAdjustment(String),
}
