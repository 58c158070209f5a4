//! Maximum-likelihood population-size estimation.
//!
//! An observation is summarized by two scalars: `u` distinct items seen over
//! `t` draws. The estimator relaxes the discrete counting problem to the
//! reals through a continuous extension of the harmonic number,
//!
//! ```text
//! H(s) = euler_gamma + digamma(s + 1)
//! ```
//!
//! and solves
//!
//! ```text
//! f(n) = n * (H(n) - H(n - u)) - t = 0
//! ```
//!
//! for `n` over the bracket `[u, t * 100_000]` with a bracketed root-finder.
//!
//! The equation is used exactly as given by the reference model; note that it
//! does not match the textbook coupon-collector expectation
//! `n * (1 - ((n-1)/n)^t)` for the distinct count, and no derivation
//! accompanies it. It is validated empirically against the Monte Carlo scorer
//! rather than re-derived.

use statrs::consts::EULER_MASCHERONI;
use statrs::function::gamma::digamma;

use crate::error::{Error, Result};
use crate::solver::{BracketedSolver, Brent};

/// Upper bracket endpoint for the root search, as a multiple of `t`.
pub const BRACKET_FACTOR: f64 = 100_000.0;

/// Continuous extension of the harmonic number to real `s > -1`.
///
/// Agrees with `1 + 1/2 + ... + 1/s` at non-negative integers; `harmonic(0)`
/// is exactly 0 since `digamma(1) = -euler_gamma`.
pub fn harmonic(s: f64) -> f64 {
    EULER_MASCHERONI + digamma(s + 1.0)
}

/// Maximum-likelihood estimate of the population size for an observation of
/// `u` distinct items over `t` draws, using the default Brent solver.
pub fn mle(u: u64, t: u64) -> Result<f64> {
    mle_with_solver(u, t, &Brent::default())
}

/// [`mle`] with a caller-supplied root-finder.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `u == 0`, `t == 0`, or `u > t` (an
///   observation cannot contain more distinct items than draws).
/// - [`Error::BracketWithoutRoot`] if the defining equation does not change
///   sign over `[u, t * 100_000]`; the error carries the attempted bracket
///   and endpoint values for diagnosis.
/// - [`Error::NoConvergence`] if the solver exhausts its iteration budget.
pub fn mle_with_solver<S: BracketedSolver>(u: u64, t: u64, solver: &S) -> Result<f64> {
    if u == 0 || t == 0 {
        return Err(Error::InvalidInput("u and t must be positive"));
    }
    if u > t {
        return Err(Error::InvalidInput("cannot observe more distinct items than draws"));
    }

    let us = u as f64;
    let ts = t as f64;
    let lo = us;
    let hi = ts * BRACKET_FACTOR;
    log::debug!("mle(u={}, t={}): solving over [{}, {}]", u, t, lo, hi);

    solver.find_root(|n| n * (harmonic(n) - harmonic(n - us)) - ts, lo, hi)
}
