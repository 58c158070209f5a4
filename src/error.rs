//! Error taxonomy for the estimation engine.
//!
//! Every failure is surfaced to the caller; the engine never clamps inputs or
//! substitutes defaults, since a silently wrong count is worse than a visible
//! error.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors produced by counting, enumeration, the brute-force oracle,
/// the Monte Carlo scorer, and the maximum-likelihood estimator.
#[derive(Debug, Error)]
pub enum Error {
    /// A population of `population` items cannot produce `unique` distinct
    /// observations. Raised by [`count`][crate::dd::DdTuple::count] and by
    /// everything built on top of it.
    #[error("population of {population} cannot produce {unique} distinct items")]
    PopulationTooSmall { population: u64, unique: u64 },

    /// A caller-supplied argument is outside the operation's domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A brute-force request would enumerate more sequences than the
    /// configured ceiling allows. Raised before any work is done.
    #[error("brute force over {sequences} sequences exceeds the ceiling of {ceiling}")]
    CostCeiling { sequences: BigUint, ceiling: u64 },

    /// The root-finder's bracket does not contain a sign change.
    /// The endpoint values are included for diagnosis.
    #[error("no sign change over [{lo}, {hi}]: f(lo) = {f_lo}, f(hi) = {f_hi}")]
    BracketWithoutRoot { lo: f64, hi: f64, f_lo: f64, f_hi: f64 },

    /// The root-finder did not converge within its iteration budget.
    #[error("root finder did not converge within {max_iter} iterations on [{lo}, {hi}]")]
    NoConvergence { max_iter: usize, lo: f64, hi: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
