/*!
Demonstration scenarios.

Each scenario returns a report instead of printing directly. The binaries under `src/bin` print
the reports and the tests assert on them.
*/

use std::cmp::Ordering;
use std::fmt;

use crate::comparator::{signum, Comparator};
use crate::config::{
    DECIMAL_LITERALS, GREATER_PHONE_NUMBER, HASH_CANDIDATE_WORDS, LESSER_PHONE_NUMBER,
    OVERFLOWING_KEYS, UNORDERED_FLOAT_KEYS, WORD_LIST,
};
use crate::containers::{dedup_sorted, insert_into_sets, join, SetMembership};
use crate::decimal::Decimal;
use crate::errors::ContractResult;
use crate::phone_number::PhoneNumber;
use crate::pitfall::{
    find_overflowing_hash_pair, hash_difference_comparator, hash_key, hash_key_comparator,
    DifferenceComparator, FloatDifferenceComparator, KeyComparator, TotalFloatComparator,
};

/// The result of comparing two phone numbers field by field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PhoneNumberReport {
    /// The left hand side of the comparison.
    pub left: PhoneNumber,
    /// The right hand side of the comparison.
    pub right: PhoneNumber,
    /// The result of the hand written [`Ord`] implementation.
    pub natural: Ordering,
    /// The result of the comparator composed from key extractors.
    pub composed: Ordering,
}

impl fmt::Display for PhoneNumberReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} compared to {} (natural ordering): {}",
            self.left,
            self.right,
            signum(self.natural)
        )?;
        write!(
            f,
            "{} compared to {} (composed comparator): {}",
            self.left,
            self.right,
            signum(self.composed)
        )
    }
}

/// Compare two phone numbers that only differ in their line number.
pub fn phone_number_compare() -> PhoneNumberReport {
    let (area_code, prefix, line_num) = GREATER_PHONE_NUMBER;
    let left = PhoneNumber::new(area_code, prefix, line_num);
    let (area_code, prefix, line_num) = LESSER_PHONE_NUMBER;
    let right = PhoneNumber::new(area_code, prefix, line_num);

    let comparator = PhoneNumber::comparator();
    log::info!("Comparing {} to {}", left, right);

    PhoneNumberReport {
        left,
        right,
        natural: left.cmp(&right),
        composed: comparator.compare(&left, &right),
    }
}

/// The result of removing duplicate words with an order-based set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordListReport {
    /// The words in the order they were inserted.
    pub input: Vec<String>,
    /// The distinct words in ascending order.
    pub deduped: Vec<String>,
}

impl fmt::Display for WordListReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "inserted: {}", join(&self.input))?;
        write!(f, "ordered set: {}", join(&self.deduped))
    }
}

/// Remove duplicate words by inserting them into an order-based set.
pub fn word_list() -> WordListReport {
    let input: Vec<String> = WORD_LIST.iter().map(|word| word.to_string()).collect();
    log::info!("Inserting {} words into an ordered set", input.len());

    WordListReport {
        deduped: dedup_sorted(input.clone()),
        input,
    }
}

/// The result of inserting decimals of equal magnitude but different scale into sets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecimalReport {
    /// The first decimal.
    pub first: Decimal,
    /// The second decimal.
    pub second: Decimal,
    /// Whether the two decimals are equal.
    pub equal: bool,
    /// How the first decimal compares to the second.
    pub ordering: Ordering,
    /// Contents of the sets after inserting both decimals.
    pub membership: SetMembership<Decimal>,
}

impl fmt::Display for DecimalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} equals {}: {}", self.first, self.second, self.equal)?;
        writeln!(
            f,
            "{} compared to {}: {}",
            self.first,
            self.second,
            signum(self.ordering)
        )?;
        write!(f, "{}", self.membership)
    }
}

/**
Show how hash-based and order-based sets disagree on decimals with different scales.

# Errors

Returns [`ContractError::Parse`](crate::ContractError::Parse) if a configured literal is
not a valid decimal.
*/
pub fn decimal_sets() -> ContractResult<DecimalReport> {
    let [first, second] = DECIMAL_LITERALS;
    let first: Decimal = first.parse()?;
    let second: Decimal = second.parse()?;

    let membership = insert_into_sets(vec![first.clone(), second.clone()]);
    if membership.diverges() {
        log::warn!(
            "Hash-based and order-based sets disagree: {} vs {} members",
            membership.hashed.len(),
            membership.ordered.len()
        );
    }

    Ok(DecimalReport {
        equal: first == second,
        ordering: first.cmp(&second),
        first,
        second,
        membership,
    })
}

/// A floating point key pair ordered by subtraction and by the total order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatComparison {
    /// The left key.
    pub left: f64,
    /// The right key.
    pub right: f64,
    /// The result of subtracting the keys.
    pub naive: Ordering,
    /// The result of the IEEE 754 total order.
    pub total: Ordering,
}

/// A pair of words ordered by subtracting their hash keys and by comparing them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HashComparison {
    /// The left word.
    pub left: String,
    /// The right word.
    pub right: String,
    /// The hash key of the left word.
    pub left_key: i32,
    /// The hash key of the right word.
    pub right_key: i32,
    /// The ordering reported by subtracting the hash keys.
    pub naive: Ordering,
    /// The ordering reported by comparing the hash keys.
    pub safe: Ordering,
}

/// The result of comparing keys by subtraction and by safe comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct DifferenceReport {
    /// The left integer key.
    pub left: i32,
    /// The right integer key.
    pub right: i32,
    /// The wrapped difference of the integer keys.
    pub raw_difference: i32,
    /// The ordering reported by the subtracting comparator.
    pub naive: Ordering,
    /// The ordering reported by the safe comparator.
    pub safe: Ordering,
    /// Floating point key pairs that subtraction fails to order.
    pub floats: Vec<FloatComparison>,
    /// A pair of words whose hash keys overflow when subtracted, if one was found.
    pub hashes: Option<HashComparison>,
}

impl fmt::Display for DifferenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} - {} = {} so the difference comparator returns {} but the key comparator returns {}",
            self.left,
            self.right,
            self.raw_difference,
            signum(self.naive),
            signum(self.safe)
        )?;

        for (idx, comparison) in self.floats.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:?} vs {:?}: difference comparator returns {} but total order returns {}",
                comparison.left,
                comparison.right,
                signum(comparison.naive),
                signum(comparison.total)
            )?;
        }

        if let Some(comparison) = &self.hashes {
            write!(
                f,
                "\n{:?} (hash {}) vs {:?} (hash {}): hash difference comparator returns {} \
                 but hash key comparator returns {}",
                comparison.left,
                comparison.left_key,
                comparison.right,
                comparison.right_key,
                signum(comparison.naive),
                signum(comparison.safe)
            )?;
        }

        Ok(())
    }
}

/// Compare keys that subtraction gets wrong.
pub fn difference_comparators() -> DifferenceReport {
    let naive = DifferenceComparator::new(|key: &i32| *key);
    let safe = KeyComparator::new(|key: &i32| *key);
    let (left, right) = OVERFLOWING_KEYS;

    let naive_float = FloatDifferenceComparator::new(|key: &f64| *key);
    let total_float = TotalFloatComparator::new(|key: &f64| *key);
    let floats = UNORDERED_FLOAT_KEYS
        .iter()
        .map(|&(left, right)| FloatComparison {
            left,
            right,
            naive: naive_float.compare(&left, &right),
            total: total_float.compare(&left, &right),
        })
        .collect();

    let naive_hash = hash_difference_comparator::<&str>();
    let safe_hash = hash_key_comparator::<&str>();
    let hashes = find_overflowing_hash_pair(&HASH_CANDIDATE_WORDS).map(|(left, right)| {
        log::info!("Hash keys of {:?} and {:?} overflow when subtracted", left, right);
        HashComparison {
            left: left.to_string(),
            right: right.to_string(),
            left_key: hash_key(left),
            right_key: hash_key(right),
            naive: naive_hash.compare(&left, &right),
            safe: safe_hash.compare(&left, &right),
        }
    });

    DifferenceReport {
        left,
        right,
        raw_difference: naive.raw_difference(&left, &right),
        naive: naive.compare(&left, &right),
        safe: safe.compare(&left, &right),
        floats,
        hashes,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn setup() {
        let _ = env_logger::builder()
            // Include all events in tests
            .filter_level(log::LevelFilter::max())
            // Ensure events are captured by `cargo test`
            .is_test(true)
            // Ignore errors initializing the logger if tests race to configure it
            .try_init();
    }

    #[test]
    fn phone_number_scenario_reports_greater() {
        setup();

        let report = phone_number_compare();

        assert_eq!(report.natural, Ordering::Greater);
        assert_eq!(report.composed, Ordering::Greater);
        assert_eq!(
            report.to_string(),
            "339-448-5566 compared to 339-448-4566 (natural ordering): 1\n\
             339-448-5566 compared to 339-448-4566 (composed comparator): 1"
        );
    }

    #[test]
    fn word_list_scenario_dedupes_in_ascending_order() {
        setup();

        let report = word_list();

        assert_eq!(report.input.len(), 5);
        assert_eq!(report.deduped, vec!["alalal", "bibibi", "bicidi"]);
        assert_eq!(
            report.to_string(),
            "inserted: [bibibi, alalal, bicidi, bibibi, bibibi]\n\
             ordered set: [alalal, bibibi, bicidi]"
        );
    }

    #[test]
    fn decimal_scenario_shows_diverging_sets() {
        setup();

        let report = decimal_sets().unwrap();

        assert!(!report.equal);
        assert_eq!(report.ordering, Ordering::Equal);
        assert_eq!(report.membership.hashed.len(), 2);
        assert_eq!(report.membership.ordered.len(), 1);
        assert_eq!(
            report.to_string(),
            "1.0 equals 1.00: false\n\
             1.0 compared to 1.00: 0\n\
             hash-based set (2): [1.0, 1.00]\n\
             order-based set (1): [1.0]"
        );
    }

    #[test]
    fn difference_scenario_contrasts_naive_and_safe_results() {
        setup();

        let report = difference_comparators();

        assert_eq!(report.raw_difference, i32::MAX);
        assert_eq!(report.naive, Ordering::Greater);
        assert_eq!(report.safe, Ordering::Less);

        assert_eq!(report.floats.len(), 2);
        assert_eq!(report.floats[0].naive, Ordering::Equal);
        assert_eq!(report.floats[0].total, Ordering::Greater);
        assert_eq!(report.floats[1].naive, Ordering::Equal);
        assert_eq!(report.floats[1].total, Ordering::Less);
        let hashes = report
            .hashes
            .as_ref()
            .expect("the candidate words should contain an overflowing pair");
        assert_eq!(hashes.left_key.cmp(&hashes.right_key), hashes.safe);
        assert_eq!(hashes.naive, hashes.safe.reverse());
        assert_ne!(hashes.naive, Ordering::Equal);
        assert!(report
            .to_string()
            .contains("hash difference comparator returns"));
        assert!(report
            .to_string()
            .starts_with("-2147483648 - 1 = 2147483647 so the difference comparator returns 1"));
    }
}
