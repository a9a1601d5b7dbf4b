/*!
This module contains a phone number value whose ordering is composed from its fields.

A [`PhoneNumber`] is ordered by area code, then prefix, then line number. Because the same three
fields decide both equality and ordering, two phone numbers compare as [`Ordering::Equal`] exactly
when they are equal. This makes the type safe to use in both hashed and ordered collections.
*/

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::chain::ComparatorChain;
use crate::errors::{ContractError, ContractResult};

/// A North American style phone number e.g. `339-448-5566`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PhoneNumber {
    /// The three digit area code.
    area_code: i16,
    /// The three digit exchange prefix.
    prefix: i16,
    /// The four digit line number.
    line_num: i16,
}

impl PhoneNumber {
    /// Construct a new [`PhoneNumber`].
    pub fn new(area_code: i16, prefix: i16, line_num: i16) -> Self {
        PhoneNumber {
            area_code,
            prefix,
            line_num,
        }
    }

    /// Get the area code.
    pub fn area_code(&self) -> i16 {
        self.area_code
    }

    /// Get the exchange prefix.
    pub fn prefix(&self) -> i16 {
        self.prefix
    }

    /// Get the line number.
    pub fn line_num(&self) -> i16 {
        self.line_num
    }

    /**
    Build a comparator equivalent to the natural ordering of phone numbers.

    The comparator is composed from key extractors instead of being written out by hand. It is
    constructed on demand so callers decide how long it lives and pass it explicitly to wherever it
    is needed.
    */
    pub fn comparator() -> ComparatorChain<PhoneNumber> {
        ComparatorChain::comparing("area_code", PhoneNumber::area_code)
            .then_comparing("prefix", PhoneNumber::prefix)
            .then_comparing("line_num", PhoneNumber::line_num)
    }

    /**
    Compare against a phone number that may be absent.

    # Errors

    Returns [`ContractError::NullOperand`] if `other` is `None`. No fields are read in that case.
    */
    pub fn checked_compare(&self, other: Option<&PhoneNumber>) -> ContractResult<Ordering> {
        let other = other.ok_or_else(|| {
            ContractError::NullOperand(format!("Cannot compare phone number {} to nothing", self))
        })?;

        Ok(self.cmp(other))
    }
}

impl Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut result = self.area_code.cmp(&other.area_code);
        log::trace!("Finished comparing area codes");
        if result.is_eq() {
            result = self.prefix.cmp(&other.prefix);
            log::trace!("Finished comparing prefixes");
            if result.is_eq() {
                result = self.line_num.cmp(&other.line_num);
                log::trace!("Finished comparing line numbers");
            }
        }

        result
    }
}

impl PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.area_code, self.prefix, self.line_num)
    }
}

impl FromStr for PhoneNumber {
    type Err = ContractError;

    /// Parse the `area-prefix-line` form produced by [`Display`](fmt::Display).
    ///
    /// A field may carry its own leading minus sign, so `-1--2-3` parses to `(-1, -2, 3)`.
    fn from_str(value: &str) -> ContractResult<PhoneNumber> {
        let malformed = || {
            ContractError::Parse(format!(
                "Expected a phone number of the form area-prefix-line but got {:?}.",
                value
            ))
        };

        let mut fields = [0_i16; 3];
        let mut rest = value.trim();
        for (idx, field) in fields.iter_mut().enumerate() {
            if idx > 0 {
                rest = rest.strip_prefix('-').ok_or_else(malformed)?;
            }

            let digits_start = usize::from(rest.starts_with('-'));
            let field_end = rest[digits_start..]
                .find('-')
                .map_or(rest.len(), |offset| digits_start + offset);
            *field = rest[..field_end].parse()?;
            rest = &rest[field_end..];
        }

        if !rest.is_empty() {
            return Err(malformed());
        }

        let [area_code, prefix, line_num] = fields;
        Ok(PhoneNumber::new(area_code, prefix, line_num))
    }
}
