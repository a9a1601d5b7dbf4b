/*!
A builder for comparators that order values by several fields.

Fields are compared in priority order. The first field that does not tie decides the result and
the remaining fields are never evaluated. New tiebreak levels can be appended to an existing chain
without touching the levels that came before.

```
use ordcontract::{Comparator, ComparatorChain, PhoneNumber};

let comparator = ComparatorChain::comparing("area_code", |pn: &PhoneNumber| pn.area_code())
    .then_comparing("prefix", |pn: &PhoneNumber| pn.prefix())
    .then_comparing("line_num", |pn: &PhoneNumber| pn.line_num());

let a = PhoneNumber::new(339, 448, 5566);
let b = PhoneNumber::new(339, 448, 4566);
assert!(comparator.compare(&a, &b).is_gt());
```
*/

use std::cmp::Ordering;
use std::fmt;

use crate::comparator::Comparator;

/// The type-erased comparison performed by a single level of a chain.
type LevelFn<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A single named level of a [`ComparatorChain`].
struct Level<T> {
    /// A name for the field being compared. Used for logging.
    name: &'static str,

    /// Compares the field extracted from both operands.
    compare: LevelFn<T>,
}

/// A comparator composed of field comparisons applied in priority order.
pub struct ComparatorChain<T> {
    levels: Vec<Level<T>>,
}

impl<T: 'static> ComparatorChain<T> {
    /// Start a chain that compares the [`Ord`] key extracted by `key_fn`.
    pub fn comparing<K, F>(name: &'static str, key_fn: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        ComparatorChain { levels: vec![] }.then_comparing(name, key_fn)
    }

    /// Start a chain that compares the key extracted by `key_fn` with a custom comparator.
    pub fn comparing_by<K, F, C>(name: &'static str, key_fn: F, key_comparator: C) -> Self
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
        C: Comparator<K> + Send + Sync + 'static,
    {
        ComparatorChain { levels: vec![] }.then_comparing_by(name, key_fn, key_comparator)
    }

    /// Append a tiebreak level that compares the [`Ord`] key extracted by `key_fn`.
    pub fn then_comparing<K, F>(self, name: &'static str, key_fn: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.then_with(name, move |a: &T, b: &T| key_fn(a).cmp(&key_fn(b)))
    }

    /// Append a tiebreak level that compares the key extracted by `key_fn` with `key_comparator`.
    pub fn then_comparing_by<K, F, C>(self, name: &'static str, key_fn: F, key_comparator: C) -> Self
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
        C: Comparator<K> + Send + Sync + 'static,
    {
        self.then_with(name, move |a: &T, b: &T| {
            key_comparator.compare(&key_fn(a), &key_fn(b))
        })
    }

    /// Append a tiebreak level that compares whole values with `comparator`.
    pub fn then_with<C>(mut self, name: &'static str, comparator: C) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        self.levels.push(Level {
            name,
            compare: Box::new(move |a: &T, b: &T| comparator.compare(a, b)),
        });

        self
    }

    /// Return a comparator that imposes the reverse of this chain's ordering.
    pub fn reversed(self) -> Self {
        ComparatorChain { levels: vec![] }.then_with("reversed", move |a: &T, b: &T| {
            self.compare(b, a)
        })
    }
}

impl<T> ComparatorChain<T> {
    /// The number of levels in the chain.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if the chain has no levels. An empty chain considers all values equal.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl<T> Comparator<T> for ComparatorChain<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        for level in self.levels.iter() {
            let result = (level.compare)(a, b);
            log::trace!("Compared field {} with result {:?}", level.name, result);
            if result.is_ne() {
                return result;
            }
        }

        Ordering::Equal
    }
}

impl<T> fmt::Debug for ComparatorChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.levels.iter().map(|level| level.name).collect();
        f.debug_struct("ComparatorChain")
            .field("levels", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    struct Employee {
        department: &'static str,
        level: u8,
        name: &'static str,
    }

    fn employee(department: &'static str, level: u8, name: &'static str) -> Employee {
        Employee {
            department,
            level,
            name,
        }
    }

    #[test]
    fn earlier_levels_take_priority() {
        let comparator = ComparatorChain::comparing("department", |e: &Employee| e.department)
            .then_comparing("level", |e: &Employee| e.level);

        assert_eq!(
            comparator.compare(&employee("eng", 9, "x"), &employee("ops", 1, "y")),
            Ordering::Less
        );
        assert_eq!(
            comparator.compare(&employee("eng", 3, "x"), &employee("eng", 1, "y")),
            Ordering::Greater
        );
    }

    #[test]
    fn ties_on_every_level_are_equal() {
        let comparator = ComparatorChain::comparing("department", |e: &Employee| e.department)
            .then_comparing("level", |e: &Employee| e.level);

        assert_eq!(
            comparator.compare(&employee("eng", 3, "x"), &employee("eng", 3, "y")),
            Ordering::Equal
        );
    }

    #[test]
    fn new_levels_break_remaining_ties() {
        let comparator = ComparatorChain::comparing("department", |e: &Employee| e.department)
            .then_comparing("level", |e: &Employee| e.level);
        assert_eq!(comparator.len(), 2);

        let comparator = comparator.then_comparing("name", |e: &Employee| e.name);
        assert_eq!(comparator.len(), 3);
        assert_eq!(
            comparator.compare(&employee("eng", 3, "x"), &employee("eng", 3, "y")),
            Ordering::Less
        );
    }

    #[test]
    fn evaluation_stops_at_the_first_deciding_level() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&evaluations);
        let comparator = ComparatorChain::comparing("level", |e: &Employee| e.level).then_with(
            "counted",
            move |_: &Employee, _: &Employee| {
                counter.fetch_add(1, AtomicOrdering::SeqCst);
                Ordering::Equal
            },
        );

        comparator.compare(&employee("eng", 1, "x"), &employee("eng", 2, "x"));
        assert_eq!(evaluations.load(AtomicOrdering::SeqCst), 0);

        comparator.compare(&employee("eng", 1, "x"), &employee("eng", 1, "x"));
        assert_eq!(evaluations.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn custom_key_comparators_can_be_used() {
        let case_insensitive =
            |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase());
        let comparator = ComparatorChain::comparing_by(
            "name",
            |e: &Employee| e.name.to_string(),
            case_insensitive,
        );

        assert_eq!(
            comparator.compare(&employee("eng", 1, "Alice"), &employee("ops", 2, "alice")),
            Ordering::Equal
        );
    }

    #[test]
    fn reversed_chain_inverts_every_result() {
        let comparator = ComparatorChain::comparing("level", |e: &Employee| e.level).reversed();

        assert_eq!(
            comparator.compare(&employee("eng", 1, "x"), &employee("eng", 2, "x")),
            Ordering::Greater
        );
        assert_eq!(
            comparator.compare(&employee("eng", 2, "x"), &employee("eng", 2, "y")),
            Ordering::Equal
        );
    }

    #[test]
    fn empty_chain_considers_everything_equal() {
        let comparator: ComparatorChain<Employee> = ComparatorChain { levels: vec![] };

        assert!(comparator.is_empty());
        assert_eq!(
            comparator.compare(&employee("eng", 1, "x"), &employee("ops", 2, "y")),
            Ordering::Equal
        );
        assert_eq!(format!("{:?}", comparator), "ComparatorChain { levels: [] }");
    }
}
