// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Utilities to assist with comparing based on various characteristics. Useful for sorting by
properties different from the natural ordering provided by ordering traits e.g. [`Ord`].

Comparators are plain values. Call sites that sort or order elements take the comparator as an
explicit argument instead of reaching for a shared global instance.
*/

use std::cmp::Ordering;

/// An interface for structs intended to be used as a comparator.
pub trait Comparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` > `b`
    1. Returns [`Ordering::Equal`] if `a` == `b`
    1. Returns [`Ordering::Less`] if `a` < `b`

    A well-behaved comparator is also antisymmetric and transitive, and any two elements it
    considers equal compare identically against every third element.
    */
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// A comparator that defers to the natural ordering of a type.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Convert an [`Ordering`] to the three-way integer convention i.e. -1, 0, or 1.
pub fn signum(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Interpret a negative, zero, or positive integer as an [`Ordering`].
pub fn from_signum(value: i64) -> Ordering {
    value.cmp(&0)
}

/// Sort `values` in place using the provided comparator.
pub fn sort_by_comparator<T, C>(values: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    values.sort_by(|a, b| comparator.compare(a, b));
}
