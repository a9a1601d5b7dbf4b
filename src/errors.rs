/*!
This module contains the error types raised when a comparison contract cannot be honored, as well
as `From` implementations for parsing errors to enable error propagation.
*/

use std::fmt;
use std::num::ParseIntError;

use bigdecimal::ParseBigDecimalError;

/// Alias for a [`Result`] that wraps a [`ContractError`].
pub type ContractResult<T> = Result<T, ContractError>;

/**
Errors that can occur when comparing or constructing values.

Comparison faults are programming errors on the part of the caller. They are reported eagerly and
are not meant to be retried.
*/
#[derive(Debug, Eq, PartialEq)]
pub enum ContractError {
    /// Variant for comparisons between values of incompatible kinds.
    InvalidOperand(String),

    /// Variant for comparisons where a required operand was absent.
    NullOperand(String),

    /// Variant for textual values that could not be parsed into a value type.
    Parse(String),
}

impl std::error::Error for ContractError {}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractError::InvalidOperand(msg) => write!(f, "Invalid operand: {}", msg),
            ContractError::NullOperand(msg) => write!(f, "Null operand: {}", msg),
            ContractError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl From<ParseIntError> for ContractError {
    fn from(err: ParseIntError) -> Self {
        ContractError::Parse(err.to_string())
    }
}

impl From<ParseBigDecimalError> for ContractError {
    fn from(err: ParseBigDecimalError) -> Self {
        ContractError::Parse(err.to_string())
    }
}
