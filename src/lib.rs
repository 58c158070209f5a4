//! # vase-rs: playlist-size estimation from duplicate statistics
//!
//! **`vase-rs`** estimates the size of an unknown population from repeated,
//! memoryless, with-replacement draws, using only the statistics of observed
//! duplicates.
//!
//! ## The model
//!
//! When monitoring an Internet radio station, after a while some songs repeat.
//! Can the repeats be used to assess the total size of the playlist? The
//! playlist is modeled as a vase of uniquely identifiable balls (the songs);
//! song selection is a sequence of random, memoryless draws from the vase,
//! **with replacement**. Every draw sequence reduces to a canonical duplicate
//! pattern --- a [`DdTuple`][crate::dd::DdTuple] whose entry `i` counts the
//! distinct items observed exactly `i` times --- and everything in this crate
//! operates on those patterns.
//!
//! ## Key Features
//!
//! - **Exact combinatorics**: [`DdTuple::count`][crate::dd::DdTuple::count]
//!   gives the exact number of draw sequences producing a pattern, over
//!   arbitrary-precision integers. No floating point, no overflow.
//! - **Pruned enumeration**: [`enumerate`][crate::enumerate::enumerate]
//!   lazily produces every pattern feasible for a given population and draw
//!   count, with dual-budget branch-and-bound pruning.
//! - **Reference oracle**: [`brute_force`][crate::brute::brute_force]
//!   exhaustively tallies all `n^t` sequences on small inputs to validate the
//!   two components above, behind a cost ceiling.
//! - **Monte Carlo scoring**: [`score`][crate::montecarlo::score] ranks an
//!   observed pattern's plausibility against a hypothesized population size,
//!   over an injectable, seedable random source.
//! - **Maximum-likelihood estimation**: [`mle`][crate::mle::mle] solves a
//!   continuous relaxation of the counting problem, via the digamma-extended
//!   harmonic number and a pluggable bracketed root-finder.
//!
//! ## Basic Usage
//!
//! ```rust
//! use vase_rs::dd::DdTuple;
//! use vase_rs::mle::mle;
//!
//! // Over 8 draws we heard 1 song once, 2 songs twice, and 1 song three times.
//! let dd = DdTuple::new([1, 2, 1]);
//! assert_eq!(dd.num_unique(), 4);
//! assert_eq!(dd.num_draws(), 8);
//!
//! // Exactly 100800 draw sequences over 5 songs produce this pattern.
//! assert_eq!(dd.count(5).unwrap().to_string(), "100800");
//!
//! // Best single-number estimate of the playlist size.
//! let estimate = mle(dd.num_unique(), dd.num_draws()).unwrap();
//! assert!(estimate >= dd.num_unique() as f64);
//! ```
//!
//! ## Core Components
//!
//! - **[`dd`]**: the canonical duplicate-pattern value type.
//! - **[`count`]**: exact sequence counting (factorials over `BigUint`).
//! - **[`enumerate`]**: lazy pattern enumeration.
//! - **[`brute`]**: the exhaustive test oracle.
//! - **[`montecarlo`]**: empirical plausibility scoring.
//! - **[`solver`]**: the bracketed root-finding abstraction.
//! - **[`mle`]**: the maximum-likelihood population-size estimator.
//!
//! The engine is single-threaded, synchronous, and CPU-bound; there is no
//! I/O, no persisted state, and no shared mutable state. All failures are
//! surfaced through [`error::Error`]; nothing is clamped or silently
//! recovered.

pub mod brute;
pub mod count;
pub mod dd;
pub mod enumerate;
pub mod error;
pub mod mle;
pub mod montecarlo;
pub mod solver;
