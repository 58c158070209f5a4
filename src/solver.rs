//! Bracketed root-finding.
//!
//! The estimator in [`mle`][crate::mle] needs a root of a smooth scalar
//! function over a known bracket. The solver is behind a small trait so the
//! numeric method can be swapped or tested independently of the
//! domain-specific equation.

use crate::error::{Error, Result};

/// A solver that locates a root of `f` inside a bracket `[lo, hi]` on which
/// `f` changes sign.
pub trait BracketedSolver {
    /// Returns `x` in `[lo, hi]` with `f(x)` approximately zero.
    ///
    /// # Errors
    ///
    /// - [`Error::BracketWithoutRoot`] if `f(lo)` and `f(hi)` have the same
    ///   (nonzero) sign.
    /// - [`Error::NoConvergence`] if the iteration budget is exhausted.
    fn find_root<F: Fn(f64) -> f64>(&self, f: F, lo: f64, hi: f64) -> Result<f64>;
}

/// Brent's method: bisection combined with the secant step and inverse
/// quadratic interpolation. Guaranteed to converge for a continuous `f` with
/// a sign change over the bracket, at superlinear speed near simple roots.
#[derive(Debug, Clone, Copy)]
pub struct Brent {
    /// Absolute tolerance on the root position.
    pub tol: f64,
    /// Iteration budget.
    pub max_iter: usize,
}

impl Default for Brent {
    fn default() -> Self {
        Brent { tol: 1e-12, max_iter: 100 }
    }
}

impl BracketedSolver for Brent {
    fn find_root<F: Fn(f64) -> f64>(&self, f: F, lo: f64, hi: f64) -> Result<f64> {
        let mut a = lo;
        let mut b = hi;
        let mut fa = f(a);
        let mut fb = f(b);

        if fa == 0.0 {
            return Ok(a);
        }
        if fb == 0.0 {
            return Ok(b);
        }
        if (fa > 0.0) == (fb > 0.0) {
            return Err(Error::BracketWithoutRoot { lo, hi, f_lo: fa, f_hi: fb });
        }

        let mut c = b;
        let mut fc = fb;
        let mut d = 0.0;
        let mut e = 0.0;

        for _ in 0..self.max_iter {
            if (fb > 0.0) == (fc > 0.0) {
                // Root is between a and b: rename a as the contrapoint.
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * self.tol;
            let xm = 0.5 * (c - b);
            if xm.abs() <= tol1 || fb == 0.0 {
                return Ok(b);
            }

            if e.abs() >= tol1 && fa.abs() > fb.abs() {
                // Attempt inverse quadratic interpolation (secant when a == c).
                let s = fb / fa;
                let mut p;
                let mut q;
                if a == c {
                    p = 2.0 * xm * s;
                    q = 1.0 - s;
                } else {
                    let r0 = fa / fc;
                    let r1 = fb / fc;
                    p = s * (2.0 * xm * r0 * (r0 - r1) - (b - a) * (r1 - 1.0));
                    q = (r0 - 1.0) * (r1 - 1.0) * (s - 1.0);
                }
                if p > 0.0 {
                    q = -q;
                }
                p = p.abs();
                let min1 = 3.0 * xm * q - (tol1 * q).abs();
                let min2 = (e * q).abs();
                if 2.0 * p < min1.min(min2) {
                    // Interpolation acceptable.
                    e = d;
                    d = p / q;
                } else {
                    // Interpolation failed; fall back to bisection.
                    d = xm;
                    e = d;
                }
            } else {
                d = xm;
                e = d;
            }

            a = b;
            fa = fb;
            if d.abs() > tol1 {
                b += d;
            } else {
                b += tol1.copysign(xm);
            }
            fb = f(b);
        }

        Err(Error::NoConvergence { max_iter: self.max_iter, lo, hi })
    }
}
