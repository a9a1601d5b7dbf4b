/*!
Comparators built by subtracting derived keys, and the safe comparators that should be used
instead.

Computing `key(a) - key(b)` and reading the sign of the result looks like a shortcut, but it is
wrong in two ways:

1. Fixed-width integer subtraction overflows when the keys are far apart. The wrapped difference
   can have the opposite sign of the true comparison.
1. Floating point subtraction does not produce a total order. `NaN` minus anything is `NaN`, which
   is neither negative nor positive, and `-0.0 - 0.0` is zero even though the two values have
   distinct representations.

[`DifferenceComparator`] and [`FloatDifferenceComparator`] reproduce these flaws on purpose.
[`KeyComparator`] and [`TotalFloatComparator`] compare the same keys correctly.
*/

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::comparator::{from_signum, Comparator};

/**
A comparator that subtracts 32-bit integer keys.

# Legacy

The subtraction wraps on overflow the same way 32-bit integer arithmetic does on common virtual
machines. This is deliberately broken and only exists to show how it breaks. Use
[`KeyComparator`] instead.
*/
pub struct DifferenceComparator<T, F> {
    key_fn: F,
    value_type: PhantomData<fn(&T)>,
}

impl<T, F> DifferenceComparator<T, F>
where
    F: Fn(&T) -> i32,
{
    /// Create a comparator that subtracts the keys extracted by `key_fn`.
    pub fn new(key_fn: F) -> Self {
        DifferenceComparator {
            key_fn,
            value_type: PhantomData,
        }
    }

    /// The wrapped difference `key(a) - key(b)`.
    pub fn raw_difference(&self, a: &T, b: &T) -> i32 {
        let key_a = (self.key_fn)(a);
        let key_b = (self.key_fn)(b);
        let (difference, overflowed) = key_a.overflowing_sub(key_b);
        if overflowed {
            log::debug!(
                "Subtracting key {} from key {} overflowed to {}",
                key_b,
                key_a,
                difference
            );
        }

        difference
    }
}

impl<T, F> Comparator<T> for DifferenceComparator<T, F>
where
    F: Fn(&T) -> i32,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        from_signum(self.raw_difference(a, b) as i64)
    }
}

impl<T, F> fmt::Debug for DifferenceComparator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DifferenceComparator").finish_non_exhaustive()
    }
}

/// A comparator that compares 32-bit integer keys without subtracting them.
pub struct KeyComparator<T, F> {
    key_fn: F,
    value_type: PhantomData<fn(&T)>,
}

impl<T, F> KeyComparator<T, F>
where
    F: Fn(&T) -> i32,
{
    /// Create a comparator that compares the keys extracted by `key_fn`.
    pub fn new(key_fn: F) -> Self {
        KeyComparator {
            key_fn,
            value_type: PhantomData,
        }
    }
}

impl<T, F> Comparator<T> for KeyComparator<T, F>
where
    F: Fn(&T) -> i32,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key_fn)(a).cmp(&(self.key_fn)(b))
    }
}

impl<T, F> fmt::Debug for KeyComparator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyComparator").finish_non_exhaustive()
    }
}

/**
A comparator that subtracts floating point keys.

Any comparison involving `NaN` reports [`Ordering::Equal`], and `-0.0` is reported equal to `0.0`.
Neither is a total order. Use [`TotalFloatComparator`] instead.
*/
pub struct FloatDifferenceComparator<T, F> {
    key_fn: F,
    value_type: PhantomData<fn(&T)>,
}

impl<T, F> FloatDifferenceComparator<T, F>
where
    F: Fn(&T) -> f64,
{
    /// Create a comparator that subtracts the keys extracted by `key_fn`.
    pub fn new(key_fn: F) -> Self {
        FloatDifferenceComparator {
            key_fn,
            value_type: PhantomData,
        }
    }
}

impl<T, F> Comparator<T> for FloatDifferenceComparator<T, F>
where
    F: Fn(&T) -> f64,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let difference = (self.key_fn)(a) - (self.key_fn)(b);
        if difference < 0.0 {
            Ordering::Less
        } else if difference > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T, F> fmt::Debug for FloatDifferenceComparator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatDifferenceComparator")
            .finish_non_exhaustive()
    }
}

/**
A comparator that orders floating point keys with the IEEE 754 `totalOrder` predicate.

Negative `NaN` sorts first, then negative infinity through `-0.0`, then `0.0` through positive
infinity, and positive `NaN` sorts last.
*/
pub struct TotalFloatComparator<T, F> {
    key_fn: F,
    value_type: PhantomData<fn(&T)>,
}

impl<T, F> TotalFloatComparator<T, F>
where
    F: Fn(&T) -> f64,
{
    /// Create a comparator that totally orders the keys extracted by `key_fn`.
    pub fn new(key_fn: F) -> Self {
        TotalFloatComparator {
            key_fn,
            value_type: PhantomData,
        }
    }
}

impl<T, F> Comparator<T> for TotalFloatComparator<T, F>
where
    F: Fn(&T) -> f64,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key_fn)(a).total_cmp(&(self.key_fn)(b))
    }
}

impl<T, F> fmt::Debug for TotalFloatComparator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TotalFloatComparator").finish_non_exhaustive()
    }
}

/**
Derive a 32-bit key from the hash of a value.

The hasher is constructed with fixed keys so the result is stable within a build.
*/
pub fn hash_key<T: Hash + ?Sized>(value: &T) -> i32 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish() as i32
}

/// A comparator that subtracts hash keys. Broken in the same way as [`DifferenceComparator`].
pub fn hash_difference_comparator<T: Hash>() -> DifferenceComparator<T, fn(&T) -> i32> {
    DifferenceComparator::new(hash_key::<T> as fn(&T) -> i32)
}

/// A comparator that compares hash keys without subtracting them.
pub fn hash_key_comparator<T: Hash>() -> KeyComparator<T, fn(&T) -> i32> {
    KeyComparator::new(hash_key::<T> as fn(&T) -> i32)
}

/**
Find the first pair of `candidates` whose hash keys overflow when subtracted.

Pairs are tried in order with the earlier candidate on the left. Returns `None` if no pair
overflows.
*/
pub fn find_overflowing_hash_pair<'a, T: Hash + ?Sized>(
    candidates: &[&'a T],
) -> Option<(&'a T, &'a T)> {
    for (idx, left) in candidates.iter().enumerate() {
        for right in candidates[idx + 1..].iter() {
            let (_, overflowed) = hash_key(*left).overflowing_sub(hash_key(*right));
            if overflowed {
                return Some((*left, *right));
            }
        }
    }

    None
}
