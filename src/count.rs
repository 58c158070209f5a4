//! Exact counting of draw sequences by duplicate pattern.
//!
//! For a pattern `dd` with `t` draws and `u` distinct items, the number of
//! distinguishable length-`t` sequences over `n` labeled items that reduce to
//! `dd` is
//!
//! ```text
//! count(dd, n) = t! / prod_i( i!^d_i * d_i! )  *  n! / (n - u)!
//! ```
//!
//! The first factor partitions the `t` labeled draw positions into groups
//! matching the pattern: `i!^d_i` discounts the interchangeable positions
//! within one item's repeated slots, `d_i!` the interchangeable items within a
//! duplicate class. The second factor assigns `u` distinct physical items out
//! of `n` to the duplicate classes.
//!
//! All arithmetic is exact over [`BigUint`]: `t!` grows astronomically, and
//! these counts are compared for exact equality elsewhere, so floating point
//! is never used here.

use num_bigint::BigUint;

use crate::dd::DdTuple;
use crate::error::{Error, Result};

/// Exact factorial `k!` over arbitrary-precision integers.
pub fn factorial(k: u64) -> BigUint {
    let mut acc = BigUint::from(1u32);
    for f in 2..=k {
        acc *= f;
    }
    acc
}

/// Exact falling factorial `n! / (n - u)! = n * (n-1) * ... * (n-u+1)`.
///
/// # Panics
///
/// Panics if `u > n`. Callers that cannot guarantee the bound should go
/// through [`DdTuple::count`], which reports the violation as
/// [`Error::PopulationTooSmall`] instead.
pub fn falling_factorial(n: u64, u: u64) -> BigUint {
    assert!(u <= n);
    let mut acc = BigUint::from(1u32);
    for f in (n - u + 1)..=n {
        acc *= f;
    }
    acc
}

impl DdTuple {
    /// Returns the exact number of draw sequences over `n` labeled items whose
    /// duplicate pattern equals `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PopulationTooSmall`] if `n < self.num_unique()`:
    /// a population cannot produce more distinct observations than it has
    /// items. This is checked up front rather than left to underflow inside
    /// the falling factorial.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bigint::BigUint;
    /// use vase_rs::dd::DdTuple;
    ///
    /// let dd = DdTuple::new([1, 2, 1]);
    /// assert_eq!(dd.count(5).unwrap(), BigUint::from(100800u32));
    /// ```
    pub fn count(&self, n: u64) -> Result<BigUint> {
        let u = self.num_unique();
        if n < u {
            return Err(Error::PopulationTooSmall { population: n, unique: u });
        }
        let t = self.num_draws();

        let mut denom = BigUint::from(1u32);
        for (i, &d) in self.entries().iter().enumerate() {
            let i = i as u64 + 1;
            denom *= factorial(d) * factorial(i).pow(d as u32);
        }

        Ok(factorial(t) / denom * falling_factorial(n, u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), BigUint::from(1u32));
        assert_eq!(factorial(1), BigUint::from(1u32));
        assert_eq!(factorial(5), BigUint::from(120u32));
        assert_eq!(factorial(20), BigUint::from(2_432_902_008_176_640_000u64));
        // 25! overflows u64; check against the known decimal expansion.
        assert_eq!(factorial(25).to_string(), "15511210043330985984000000");
    }

    #[test]
    fn test_falling_factorial() {
        assert_eq!(falling_factorial(5, 0), BigUint::from(1u32));
        assert_eq!(falling_factorial(5, 2), BigUint::from(20u32));
        assert_eq!(falling_factorial(5, 5), BigUint::from(120u32));
        assert_eq!(falling_factorial(0, 0), BigUint::from(1u32));
    }

    #[test]
    #[should_panic]
    fn test_falling_factorial_exceeding_population_panics() {
        falling_factorial(3, 4);
    }

    #[test]
    fn test_count_known_values() {
        // The (n = 5, t = 8) table from the reference data.
        assert_eq!(DdTuple::new([1, 2, 1]).count(5).unwrap(), BigUint::from(100800u32));
        assert_eq!(DdTuple::new([3, 1, 1]).count(5).unwrap(), BigUint::from(67200u32));
        assert_eq!(DdTuple::new([2, 3]).count(5).unwrap(), BigUint::from(50400u32));
        assert_eq!(DdTuple::new([2, 1, 0, 1]).count(5).unwrap(), BigUint::from(50400u32));
        assert_eq!(DdTuple::new([0, 0, 0, 0, 0, 0, 0, 1]).count(5).unwrap(), BigUint::from(5u32));
    }

    #[test]
    fn test_count_simple() {
        // One item seen once: n choices.
        assert_eq!(DdTuple::new([1]).count(4).unwrap(), BigUint::from(4u32));
        // Two distinct items in two draws: n * (n - 1) ordered pairs.
        assert_eq!(DdTuple::new([2]).count(4).unwrap(), BigUint::from(12u32));
        // One item seen twice: n choices (positions are interchangeable).
        assert_eq!(DdTuple::new([0, 1]).count(4).unwrap(), BigUint::from(4u32));
        // Zero draws: exactly one (empty) sequence, even for n = 0.
        assert_eq!(DdTuple::empty().count(0).unwrap(), BigUint::from(1u32));
        assert_eq!(DdTuple::empty().count(7).unwrap(), BigUint::from(1u32));
    }

    #[test]
    fn test_count_population_too_small() {
        let err = DdTuple::new([0, 1]).count(0).unwrap_err();
        assert!(matches!(err, Error::PopulationTooSmall { population: 0, unique: 1 }));

        let err = DdTuple::new([3, 1]).count(3).unwrap_err();
        assert!(matches!(err, Error::PopulationTooSmall { population: 3, unique: 4 }));
    }
}
