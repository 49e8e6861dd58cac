//! Error types

/// Errors raised while composing a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A caller column uses a key reserved for an injected column.
    #[error("column {index} uses reserved key '{key}'")]
    ReservedColumnKey { key: String, index: usize },

    /// A caller column has an empty key.
    #[error("column {index} has an empty key")]
    EmptyColumnKey { index: usize },
}
