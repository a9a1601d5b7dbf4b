/*!
This module contains a dynamically typed operand for comparisons whose value kinds are only known
at runtime.

The kind of each operand selects the comparison that applies. Comparing operands of different kinds
is rejected up front instead of coercing one side into the other.
*/

use std::cmp::Ordering;
use std::fmt;

use crate::decimal::Decimal;
use crate::errors::{ContractError, ContractResult};
use crate::phone_number::PhoneNumber;

/// The kinds of values an [`Operand`] can hold.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperandKind {
    /// A [`PhoneNumber`].
    Phone,
    /// A word ordered lexicographically.
    Word,
    /// A [`Decimal`].
    Decimal,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Phone => write!(f, "phone number"),
            OperandKind::Word => write!(f, "word"),
            OperandKind::Decimal => write!(f, "decimal"),
        }
    }
}

/// A value of one of the comparable kinds.
#[derive(Clone, Debug)]
pub enum Operand {
    /// Variant holding a phone number.
    Phone(PhoneNumber),
    /// Variant holding a word.
    Word(String),
    /// Variant holding a decimal.
    Decimal(Decimal),
}

impl Operand {
    /// Get the kind of value held by the operand.
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Phone(_) => OperandKind::Phone,
            Operand::Word(_) => OperandKind::Word,
            Operand::Decimal(_) => OperandKind::Decimal,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Phone(phone_number) => write!(f, "{}", phone_number),
            Operand::Word(word) => write!(f, "{}", word),
            Operand::Decimal(decimal) => write!(f, "{}", decimal),
        }
    }
}

/**
Compare two operands using the natural ordering of their kind.

# Errors

- [`ContractError::NullOperand`] if either operand is absent. The left operand is checked first.
- [`ContractError::InvalidOperand`] if the operands are of different kinds.
*/
pub fn compare_operands(a: Option<&Operand>, b: Option<&Operand>) -> ContractResult<Ordering> {
    let (a, b) = require_operands(a, b)?;

    let ordering = match (a, b) {
        (Operand::Phone(a), Operand::Phone(b)) => a.cmp(b),
        (Operand::Word(a), Operand::Word(b)) => a.cmp(b),
        (Operand::Decimal(a), Operand::Decimal(b)) => a.cmp(b),
        _ => return Err(mismatched_kinds(a, b)),
    };

    Ok(ordering)
}

/**
Check two operands for equality.

# Errors

Faults in the same way as [`compare_operands`].
*/
pub fn equals_operands(a: Option<&Operand>, b: Option<&Operand>) -> ContractResult<bool> {
    let (a, b) = require_operands(a, b)?;

    let equal = match (a, b) {
        (Operand::Phone(a), Operand::Phone(b)) => a == b,
        (Operand::Word(a), Operand::Word(b)) => a == b,
        (Operand::Decimal(a), Operand::Decimal(b)) => a == b,
        _ => return Err(mismatched_kinds(a, b)),
    };

    Ok(equal)
}

/// Unwrap both operands or report the first one that is missing.
fn require_operands<'a>(
    a: Option<&'a Operand>,
    b: Option<&'a Operand>,
) -> ContractResult<(&'a Operand, &'a Operand)> {
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, _) => Err(ContractError::NullOperand(
            "The left operand is absent".to_string(),
        )),
        (_, None) => Err(ContractError::NullOperand(
            "The right operand is absent".to_string(),
        )),
    }
}

fn mismatched_kinds(a: &Operand, b: &Operand) -> ContractError {
    log::debug!(
        "Rejecting comparison between a {} and a {}",
        a.kind(),
        b.kind()
    );

    ContractError::InvalidOperand(format!(
        "Cannot compare a {} with a {}",
        a.kind(),
        b.kind()
    ))
}
