/*!
This module contains an arbitrary-precision decimal whose equality and ordering disagree.

A [`Decimal`] is an unscaled integer together with a scale, the count of fractional digits. The
value it represents is `unscaled * 10^-scale`.

# Ordering is inconsistent with equality

Equality is representational: two decimals are equal only if both the unscaled digits and the
scale match. Ordering is numeric: decimals are ordered by the magnitude they represent, regardless
of scale. As a result `1.0` and `1.00` compare as [`Ordering::Equal`] but are not equal.

Collections that dedupe through [`Eq`] and [`Hash`] (e.g. [`HashSet`](std::collections::HashSet))
keep both values, while collections that dedupe through [`Ord`] (e.g.
[`BTreeSet`](std::collections::BTreeSet)) keep only the first. Callers that need consistent
behavior across both kinds of collection should normalize the scale before inserting.
*/

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};

use crate::errors::{ContractError, ContractResult};

/// The smallest adjusted exponent that is still rendered without scientific notation.
const MIN_PLAIN_ADJUSTED_EXPONENT: i128 = -6;

/// An arbitrary-precision decimal that remembers the scale it was written with.
#[derive(Clone, Debug)]
pub struct Decimal {
    inner: BigDecimal,
}

impl Decimal {
    /// Construct a decimal with the value `unscaled * 10^-scale`.
    pub fn new(unscaled: BigInt, scale: i64) -> Self {
        Decimal {
            inner: BigDecimal::new(unscaled, scale),
        }
    }

    /// The unscaled digits of the decimal.
    pub fn unscaled(&self) -> BigInt {
        self.inner.as_bigint_and_exponent().0
    }

    /// The number of digits after the decimal point. Negative scales denote trailing zeros.
    pub fn scale(&self) -> i64 {
        self.inner.as_bigint_and_exponent().1
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.inner.as_bigint_and_exponent() == other.inner.as_bigint_and_exponent()
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (unscaled, scale) = self.inner.as_bigint_and_exponent();
        unscaled.hash(state);
        scale.hash(state);
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        // Note: compares magnitude only, so this is inconsistent with equality.
        self.inner.cmp(&other.inner)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Decimal {
    type Err = ContractError;

    fn from_str(value: &str) -> ContractResult<Decimal> {
        let inner = BigDecimal::from_str(value.trim())?;
        log::debug!(
            "Parsed decimal {:?} with scale {}",
            value,
            inner.as_bigint_and_exponent().1
        );

        Ok(Decimal { inner })
    }
}

/**
Decimals are rendered in plain notation when the scale is not negative and the value does not need
more than six leading zeros after the decimal point. Otherwise they are rendered in scientific
notation with a single digit before the decimal point e.g. `1E+3` or `1.2E-7`. The output length
is bounded by the number of unscaled digits regardless of how large the scale is.
*/
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (unscaled, scale) = self.inner.as_bigint_and_exponent();
        let sign = if unscaled.sign() == Sign::Minus { "-" } else { "" };
        let coefficient = unscaled.magnitude().to_string();
        let adjusted_exponent = coefficient.len() as i128 - 1 - scale as i128;

        if scale >= 0 && adjusted_exponent >= MIN_PLAIN_ADJUSTED_EXPONENT {
            if scale == 0 {
                return write!(f, "{}{}", sign, coefficient);
            }

            let scale = scale as usize;
            let mut digits = coefficient;
            if digits.len() <= scale {
                // Bounded by the adjusted exponent check above
                digits = format!("{}{}", "0".repeat(scale - digits.len() + 1), digits);
            }
            let (integral, fractional) = digits.split_at(digits.len() - scale);

            return write!(f, "{}{}.{}", sign, integral, fractional);
        }

        let (leading, trailing) = coefficient.split_at(1);
        write!(f, "{}{}", sign, leading)?;
        if !trailing.is_empty() {
            write!(f, ".{}", trailing)?;
        }
        if adjusted_exponent != 0 {
            let exponent_sign = if adjusted_exponent > 0 { "+" } else { "" };
            write!(f, "E{}{}", exponent_sign, adjusted_exponent)?;
        }

        Ok(())
    }
}
