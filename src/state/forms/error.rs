//! Errors for malformed form input

use super::field::FieldName;
use thiserror::Error;

/// Rejected field change or record action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("`{value}` is not an option for {field}")]
    UnknownOption { field: FieldName, value: String },
    #[error("{0} does not accept this kind of control")]
    ControlMismatch(FieldName),
    #[error("record {index} does not exist ({len} records)")]
    RecordOutOfRange { index: usize, len: usize },
}
