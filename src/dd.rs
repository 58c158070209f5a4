//! Duplicate-distribution tuples.
//!
//! A [`DdTuple`] is the canonical summary of a with-replacement draw sequence:
//! entry `i` (1-indexed) counts the distinct items that were observed exactly
//! `i` times. For example, in an experiment with 8 draws, the tuple `(2, 1, 0, 1)`
//! means that 2 items were seen once, 1 item was seen twice, and 1 item was
//! seen four times.
//!
//! # Example
//!
//! ```
//! use vase_rs::dd::DdTuple;
//!
//! let dd = DdTuple::from_draws(["a", "b", "a", "c", "a"]);
//! assert_eq!(dd, DdTuple::new([2, 0, 1])); // "b", "c" once; "a" three times
//! assert_eq!(dd.num_unique(), 3);
//! assert_eq!(dd.num_draws(), 5);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A duplicate-distribution tuple.
///
/// Immutable value object; equality and hashing are by trimmed value.
///
/// # Invariants
///
/// - The last entry is non-zero (trailing zeros are trimmed on construction).
/// - The empty tuple represents zero draws.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DdTuple {
    entries: Vec<u64>,
}

impl DdTuple {
    /// Creates a tuple from raw entries, trimming trailing zeros.
    pub fn new(entries: impl IntoIterator<Item = u64>) -> Self {
        let mut entries: Vec<u64> = entries.into_iter().collect();
        while entries.last() == Some(&0) {
            entries.pop();
        }
        DdTuple { entries }
    }

    /// The empty tuple, representing zero draws.
    pub fn empty() -> Self {
        DdTuple { entries: Vec::new() }
    }

    /// Builds a tuple from per-item observation counts.
    ///
    /// Each element of the input is the number of times one distinct item was
    /// drawn. Zero counts are ignored (they correspond to items never drawn).
    ///
    /// ```
    /// use vase_rs::dd::DdTuple;
    ///
    /// // Counts [3, 1, 1, 0, 0]: two items seen once, one item seen thrice.
    /// let dd = DdTuple::from_counts([3, 1, 1, 0, 0]);
    /// assert_eq!(dd, DdTuple::new([2, 0, 1]));
    /// ```
    pub fn from_counts(counts: impl IntoIterator<Item = u64>) -> Self {
        let mut entries = Vec::new();
        for c in counts {
            if c == 0 {
                continue;
            }
            let i = c as usize;
            if entries.len() < i {
                entries.resize(i, 0);
            }
            entries[i - 1] += 1;
        }
        DdTuple { entries }
    }

    /// Reduces a concrete draw sequence to its duplicate pattern.
    pub fn from_draws<I, T>(draws: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Eq + Hash,
    {
        let mut counts: HashMap<T, u64> = HashMap::new();
        for item in draws {
            *counts.entry(item).or_insert(0) += 1;
        }
        Self::from_counts(counts.into_values())
    }

    /// The trimmed entries, `entries()[i]` counting items seen `i + 1` times.
    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    /// Number of distinct items observed: `sum(d_i)`.
    pub fn num_unique(&self) -> u64 {
        self.entries.iter().sum()
    }

    /// Total draws represented: `sum(i * d_i)`.
    pub fn num_draws(&self) -> u64 {
        self.entries.iter().enumerate().map(|(i, &d)| (i as u64 + 1) * d).sum()
    }
}

impl fmt::Display for DdTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.entries.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, ")")
    }
}
