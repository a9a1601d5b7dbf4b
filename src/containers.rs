/*!
This module exercises value types against hash-based and order-based sets.

A hash-based set dedupes with [`Eq`] and [`Hash`]. An order-based set dedupes with the ordering
alone. The two only agree on membership when the ordering is consistent with equality.

Elements are always added one at a time with `insert` so that deduplication goes through the
container's own lookup.
*/

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::comparator::{sort_by_comparator, Comparator, NaturalOrder};

/// The final contents of a hash-based set and an order-based set fed the same values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetMembership<T> {
    /**
    Contents of the hash-based set.

    Listed in ascending order, with ordering-equal members in insertion order, so that reports
    are deterministic.
    */
    pub hashed: Vec<T>,

    /// Contents of the order-based set in iteration order.
    pub ordered: Vec<T>,
}

impl<T> SetMembership<T> {
    /// Returns true if the two sets ended up with a different number of members.
    pub fn diverges(&self) -> bool {
        self.hashed.len() != self.ordered.len()
    }
}

impl<T: fmt::Display> fmt::Display for SetMembership<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "hash-based set ({}): {}",
            self.hashed.len(),
            join(&self.hashed)
        )?;
        write!(
            f,
            "order-based set ({}): {}",
            self.ordered.len(),
            join(&self.ordered)
        )
    }
}

/// Insert `values` in sequence into both a [`HashSet`] and a [`BTreeSet`].
pub fn insert_into_sets<T, I>(values: I) -> SetMembership<T>
where
    T: Clone + Eq + Hash + Ord + fmt::Debug,
    I: IntoIterator<Item = T>,
{
    let mut hashed: HashSet<T> = HashSet::new();
    let mut ordered: BTreeSet<T> = BTreeSet::new();
    let mut hashed_members: Vec<T> = vec![];

    for value in values {
        let added_to_hashed = hashed.insert(value.clone());
        let added_to_ordered = ordered.insert(value.clone());
        log::debug!(
            "Inserted {:?}: hash-based set added={} order-based set added={}",
            value,
            added_to_hashed,
            added_to_ordered
        );

        if added_to_hashed {
            hashed_members.push(value);
        }
    }

    // Stable sort so that ordering-equal members stay in insertion order.
    sort_by_comparator(&mut hashed_members, &NaturalOrder);

    SetMembership {
        hashed: hashed_members,
        ordered: ordered.into_iter().collect(),
    }
}

/// Remove duplicates from `values` by passing them through an order-based set.
pub fn dedup_sorted<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut set = BTreeSet::new();
    for value in values {
        set.insert(value);
    }

    set.into_iter().collect()
}

/**
An order-based set whose members are deduped and ordered solely by a comparator.

Two elements that the comparator considers equal are treated as the same member even if they are
not equal according to [`PartialEq`]. The member that was inserted first is kept.
*/
pub struct ComparatorSet<T, C> {
    /// Members in ascending order according to `comparator`.
    members: Vec<T>,

    /// The comparator used for both ordering and deduplication.
    comparator: C,
}

impl<T, C: Comparator<T>> ComparatorSet<T, C> {
    /// Create an empty set that orders members with `comparator`.
    pub fn new(comparator: C) -> Self {
        ComparatorSet {
            members: vec![],
            comparator,
        }
    }

    /**
    Add a value to the set.

    Returns false and drops `value` if a member comparing equal to it is already present.
    */
    pub fn insert(&mut self, value: T) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(insertion_index) => {
                self.members.insert(insertion_index, value);
                true
            }
        }
    }

    /// Returns true if a member comparing equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// The number of members in the set.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate the members in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    /// Consume the set and return its members in ascending order.
    pub fn into_vec(self) -> Vec<T> {
        self.members
    }

    fn search(&self, value: &T) -> Result<usize, usize> {
        self.members
            .binary_search_by(|member| self.comparator.compare(member, value))
    }
}

impl<T, C: Comparator<T>> Extend<T> for ComparatorSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ComparatorSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members.iter()).finish()
    }
}

/// Render values as a bracketed, comma separated list.
pub(crate) fn join<T: fmt::Display>(values: &[T]) -> String {
    let rendered: Vec<String> = values.iter().map(|value| value.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use pretty_assertions::assert_eq;

    use crate::chain::ComparatorChain;
    use crate::decimal::Decimal;
    use crate::phone_number::PhoneNumber;

    use super::*;

    #[test]
    fn consistent_types_have_matching_membership() {
        let membership = insert_into_sets(vec![
            PhoneNumber::new(339, 448, 5566),
            PhoneNumber::new(339, 448, 4566),
            PhoneNumber::new(339, 448, 5566),
        ]);

        assert!(!membership.diverges());
        assert_eq!(membership.hashed, membership.ordered);
        assert_eq!(
            membership.ordered,
            vec![
                PhoneNumber::new(339, 448, 4566),
                PhoneNumber::new(339, 448, 5566)
            ]
        );
    }

    #[test]
    fn inconsistent_types_have_diverging_membership() {
        let values: Vec<Decimal> = ["1.0", "1.00"]
            .iter()
            .map(|literal| literal.parse().unwrap())
            .collect();

        let membership = insert_into_sets(values);

        assert!(membership.diverges());
        assert_eq!(membership.hashed.len(), 2);
        assert_eq!(membership.ordered.len(), 1);
        assert_eq!(membership.ordered[0].to_string(), "1.0");
        assert_eq!(
            membership.to_string(),
            "hash-based set (2): [1.0, 1.00]\norder-based set (1): [1.0]"
        );
    }

    #[test]
    fn dedup_sorted_removes_duplicates_and_sorts() {
        let words = dedup_sorted(vec!["bibibi", "alalal", "bicidi", "bibibi", "bibibi"]);

        assert_eq!(words, vec!["alalal", "bibibi", "bicidi"]);
    }

    #[test]
    fn comparator_set_dedupes_by_comparator_alone() {
        let case_insensitive = |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase());
        let mut set = ComparatorSet::new(case_insensitive);

        assert!(set.insert("Bibibi".to_string()));
        assert!(set.insert("alalal".to_string()));
        assert!(!set.insert("BIBIBI".to_string()));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&"bibibi".to_string()));
        assert_eq!(
            set.into_vec(),
            vec!["alalal".to_string(), "Bibibi".to_string()]
        );
    }

    #[test]
    fn comparator_set_orders_by_the_supplied_chain() {
        let mut set = ComparatorSet::new(PhoneNumber::comparator().reversed());
        set.extend(vec![
            PhoneNumber::new(1, 2, 3),
            PhoneNumber::new(3, 2, 1),
            PhoneNumber::new(2, 2, 2),
            PhoneNumber::new(3, 2, 1),
        ]);

        let members: Vec<String> = set.iter().map(|pn| pn.to_string()).collect();
        assert_eq!(members, vec!["3-2-1", "2-2-2", "1-2-3"]);
    }

    #[test]
    fn empty_comparator_set() {
        let set: ComparatorSet<u32, ComparatorChain<u32>> =
            ComparatorSet::new(ComparatorChain::comparing("value", |value: &u32| *value));

        assert!(set.is_empty());
        assert!(!set.contains(&1));
        assert_eq!(format!("{:?}", set), "{}");
        assert_eq!(
            ComparatorChain::comparing("value", |value: &u32| *value).compare(&1, &1),
            Ordering::Equal
        );
    }
}
