use crate::types::DType;
use thiserror::Error;

/// Custom error type for the tens crate.
///
/// Every fallible operation (tensor creation, encode, decode, file I/O) returns
/// this type. Errors are terminal for the call that produced them.
#[derive(Error, Debug)]
pub enum TensError {
    #[error("Bad magic: expected \"Cc\", found {found:02x?}")]
    BadMagic { found: Vec<u8> },

    /// `type_code` is set when the failure comes from a header, `type_name`
    /// names the element type that could not be resolved.
    #[error("Unsupported element type {type_name} (type code {type_code:?})")]
    UnsupportedType {
        type_code: Option<u16>,
        type_name: String,
    },

    #[error("Truncated input: needed {needed} bytes, only {available} available")]
    TruncatedInput { needed: usize, available: usize },

    #[error("{count} trailing bytes after the declared payload")]
    TrailingBytes { count: usize },

    #[error("Invalid bool byte 0x{value:02x} at offset {offset}")]
    InvalidBool { offset: usize, value: u8 },

    #[error("Header declares {declared} elements, limit is {limit}")]
    TooManyElements { declared: usize, limit: usize },

    #[error("Dimension {dim} has size {value}, which does not fit in a u32")]
    DimensionOverflow { dim: usize, value: usize },

    #[error("Rank {rank} does not fit in a u32")]
    RankOverflow { rank: usize },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Data type mismatch for operation '{operation}': expected {expected}, got {actual}")]
    DataTypeMismatch {
        expected: DType,
        actual: DType,
        operation: String,
    },

    #[error("Shape mismatch during {operation}: expected {expected}, got {actual}")]
    ShapeMismatch {
        expected: String,
        actual: String,
        operation: String,
    },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl TensError {
    /// Shorthand for the header-side `UnsupportedType` error.
    pub(crate) fn unknown_code(code: u16) -> Self {
        TensError::UnsupportedType {
            type_code: Some(code),
            type_name: "unknown".to_string(),
        }
    }
}
