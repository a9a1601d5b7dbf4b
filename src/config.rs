/*!
This module contains the inputs used by the demonstration scenarios.

The demonstrations take no arguments, so their inputs are kept here as static values.
*/

/// The phone number that is expected to compare as the greater of the pair.
pub const GREATER_PHONE_NUMBER: (i16, i16, i16) = (339, 448, 5566);

/// The phone number that ties with [`GREATER_PHONE_NUMBER`] on everything but the line number.
pub const LESSER_PHONE_NUMBER: (i16, i16, i16) = (339, 448, 4566);

/// Words fed to an order-based set. Three of the five are duplicates of each other.
pub const WORD_LIST: [&str; 5] = ["bibibi", "alalal", "bicidi", "bibibi", "bibibi"];

/**
Decimal literals with the same magnitude but a different scale.

These compare as equal but are not equal.
*/
pub const DECIMAL_LITERALS: [&str; 2] = ["1.0", "1.00"];

/**
Integer keys that are far enough apart that subtracting them overflows.

The first key is the smaller of the two, but `i32::MIN - 1` wraps to `i32::MAX`.
*/
pub const OVERFLOWING_KEYS: (i32, i32) = (i32::MIN, 1);

/// Floating point key pairs that subtraction fails to order.
pub const UNORDERED_FLOAT_KEYS: [(f64, f64); 2] = [(f64::NAN, 1.0), (-0.0, 0.0)];

/**
Words searched for a pair whose hash keys are far enough apart that subtracting them overflows.

Hash keys spread across the whole 32-bit range, so roughly a quarter of all pairs overflow.
*/
pub const HASH_CANDIDATE_WORDS: [&str; 12] = [
    "bibibi", "alalal", "bicidi", "areaCode", "prefix", "lineNum", "339", "448", "5566", "4566",
    "1.0", "1.00",
];
