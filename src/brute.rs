//! Brute-force reference oracle.
//!
//! [`brute_force`] walks all `n^t` equiprobable draw sequences, reduces each
//! to its [`DdTuple`], and tallies occurrences per pattern. It exists to
//! validate the closed-form count and the pruned enumerator on small inputs
//! and is never intended for production-scale arguments: the cost is
//! `O(n^t * t)`, so the total sequence count is checked against a ceiling
//! before any work is done.

use std::collections::HashMap;

use num_bigint::BigUint;

use crate::dd::DdTuple;
use crate::error::{Error, Result};

/// Exact tally of draw sequences per duplicate pattern, for a fixed `(n, t)`.
///
/// Invariant (validated in tests): the values sum to `n^t`, and each value
/// equals [`DdTuple::count`] for its key.
pub type DdDistribution = HashMap<DdTuple, BigUint>;

/// Default ceiling on the number of sequences [`brute_force`] will enumerate.
///
/// The reference validations run up to `8^8` (about 1.7e7).
pub const DEFAULT_COST_CEILING: u64 = 100_000_000;

/// Enumerates all `n^t` draw sequences and tallies them by duplicate pattern,
/// with the [default cost ceiling][DEFAULT_COST_CEILING].
pub fn brute_force(n: u64, t: u64) -> Result<DdDistribution> {
    brute_force_bounded(n, t, DEFAULT_COST_CEILING)
}

/// [`brute_force`] with an explicit ceiling on the sequence count.
///
/// # Errors
///
/// Returns [`Error::CostCeiling`] before doing any work if `n^t > ceiling`.
pub fn brute_force_bounded(n: u64, t: u64, ceiling: u64) -> Result<DdDistribution> {
    let sequences = BigUint::from(n).pow(t as u32);
    if sequences > BigUint::from(ceiling) {
        return Err(Error::CostCeiling { sequences, ceiling });
    }
    log::debug!("brute_force(n={}, t={}): {} sequences", n, t, sequences);

    let mut distribution = DdDistribution::new();

    if t == 0 {
        // One empty sequence, even for n = 0.
        distribution.insert(DdTuple::empty(), BigUint::from(1u32));
        return Ok(distribution);
    }
    if n == 0 {
        return Ok(distribution);
    }

    // Odometer over all length-t sequences on the alphabet 0..n.
    let mut seq = vec![0usize; t as usize];
    let mut counts = vec![0u64; n as usize];
    loop {
        for &s in &seq {
            counts[s] += 1;
        }
        let dd = DdTuple::from_counts(counts.iter().copied());
        *distribution.entry(dd).or_insert_with(|| BigUint::from(0u32)) += 1u32;
        for c in counts.iter_mut() {
            *c = 0;
        }

        let mut pos = 0;
        loop {
            if pos == seq.len() {
                return Ok(distribution);
            }
            seq[pos] += 1;
            if seq[pos] < n as usize {
                break;
            }
            seq[pos] = 0;
            pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_2_2() {
        // Sequences on {0, 1} of length 2: 00, 01, 10, 11.
        let bf = brute_force(2, 2).unwrap();
        println!("{:?}", bf);

        assert_eq!(bf.len(), 2);
        assert_eq!(bf[&DdTuple::new([2])], BigUint::from(2u32)); // 01, 10
        assert_eq!(bf[&DdTuple::new([0, 1])], BigUint::from(2u32)); // 00, 11
    }

    #[test]
    fn test_brute_force_totals() {
        for n in 0..=4u64 {
            for t in 0..=4u64 {
                let bf = brute_force(n, t).unwrap();
                let total: BigUint = bf.values().sum();
                assert_eq!(total, BigUint::from(n).pow(t as u32), "n = {}, t = {}", n, t);
            }
        }
    }

    #[test]
    fn test_brute_force_degenerate() {
        let bf = brute_force(0, 0).unwrap();
        assert_eq!(bf.len(), 1);
        assert_eq!(bf[&DdTuple::empty()], BigUint::from(1u32));

        let bf = brute_force(0, 3).unwrap();
        assert!(bf.is_empty());

        let bf = brute_force(5, 0).unwrap();
        assert_eq!(bf[&DdTuple::empty()], BigUint::from(1u32));
    }

    #[test]
    fn test_brute_force_ceiling() {
        let err = brute_force_bounded(10, 10, 1_000_000).unwrap_err();
        match err {
            Error::CostCeiling { sequences, ceiling } => {
                assert_eq!(sequences, BigUint::from(10_000_000_000u64));
                assert_eq!(ceiling, 1_000_000);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        // Far past the default ceiling as well.
        assert!(brute_force(100, 100).is_err());
    }

    #[test]
    fn test_brute_force_deterministic() {
        let first = brute_force(3, 4).unwrap();
        let second = brute_force(3, 4).unwrap();
        assert_eq!(first, second);
    }
}
