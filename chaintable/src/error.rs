use thiserror::Error;

/// Errors that can occur when reading typed data out of a table.
///
/// `add`, `remove` and `lookup` never produce one of these: a missing key
/// is reported as `None`, not as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A stored dynamic value does not have the requested type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A number does not fit the requested type without losing precision
    #[error("Out of range: {value} does not fit in {target}")]
    OutOfRange { value: i128, target: &'static str },
}

pub type Result<T> = std::result::Result<T, TableError>;
