//! Lazy enumeration of every duplicate pattern for a given population and
//! draw count.
//!
//! [`enumerate`] produces each [`DdTuple`] reachable by drawing `t` times,
//! with replacement, from a population of `n` items. The enumeration is a
//! depth-first branch-and-bound search that extends a partial tuple one
//! multiplicity position at a time, maintaining two decreasing budgets:
//!
//! - `balls`: how many more distinct items the population can still contribute
//!   (initialized to `n`);
//! - `draws`: how many draws are still unaccounted for (initialized to `t`).
//!
//! At position `i`, placing `p` items seen exactly `i` times costs `p` balls
//! and `i * p` draws. A branch yields when `draws` reaches 0 and is pruned as
//! soon as either budget would go negative, or when the remaining draws cannot
//! be covered by the next position's minimum nonzero placement.
//!
//! Both budgets must be checked: pruning on `draws` alone admits tuples whose
//! implied `num_unique` exceeds `n`.
//!
//! # Example
//!
//! ```
//! use vase_rs::enumerate::enumerate;
//!
//! // 18 distinct patterns arise from 8 draws out of 5 items.
//! assert_eq!(enumerate(5, 8).count(), 18);
//! ```
//!
//! # Performance
//!
//! The iterator uses a stack-based traversal with a single reusable prefix
//! vector; tuple allocations happen only when yielding. The sequence is
//! finite and restartable: no state is shared across calls, so enumerating
//! twice with the same arguments produces the same tuples. Ordering is
//! deterministic but not contractually significant; callers should treat the
//! output as an unordered collection.

use crate::dd::DdTuple;

/// Returns a lazy iterator over every valid [`DdTuple`] for `t` draws from a
/// population of `n` items.
///
/// Degenerate inputs: `t = 0` yields exactly the empty tuple; `n = 0` with
/// `t > 0` yields nothing.
pub fn enumerate(n: u64, t: u64) -> DdEnumerator {
    DdEnumerator::new(n, t)
}

/// Frame on the exploration stack: one multiplicity position.
#[derive(Debug)]
struct Frame {
    /// Next candidate value for `d_i` at this position.
    next: u64,
    /// Balls budget on entry to this position.
    balls: u64,
    /// Draws budget on entry to this position.
    draws: u64,
}

/// An iterator over duplicate patterns, created by [`enumerate`].
///
/// # Implementation Notes
///
/// Depth-first traversal with backtracking. The partial tuple is maintained in
/// a single vector that grows and shrinks with the stack; on entry to each
/// `next()` loop iteration the stack holds one frame per open position and the
/// prefix holds the committed values above it.
#[derive(Debug)]
pub struct DdEnumerator {
    stack: Vec<Frame>,
    /// Partial tuple being built (reused across iterations).
    prefix: Vec<u64>,
}

impl DdEnumerator {
    pub fn new(n: u64, t: u64) -> Self {
        DdEnumerator {
            stack: vec![Frame { next: 0, balls: n, draws: t }],
            prefix: Vec::new(),
        }
    }
}

impl Iterator for DdEnumerator {
    type Item = DdTuple;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Position being filled is 1-indexed by stack depth.
            let i = self.stack.len() as u64;
            let frame = self.stack.last_mut()?;

            let p = frame.next;
            if p > frame.balls || p * i > frame.draws {
                // Every feasible value at this position has been tried:
                // backtrack, dropping the value that led here (absent only
                // at the root).
                self.stack.pop();
                self.prefix.pop();
                continue;
            }
            frame.next += 1;

            let balls = frame.balls - p;
            let draws = frame.draws - p * i;
            self.prefix.push(p);

            if draws == 0 {
                // All draws accounted for: yield the tuple so far.
                let dd = DdTuple::new(self.prefix.iter().copied());
                self.prefix.pop();
                return Some(dd);
            }

            // Recurse only if the next position can still contribute: the
            // minimum nonzero placement there costs i + 1 draws and 1 ball.
            if balls > 0 && draws > i {
                self.stack.push(Frame { next: 0, balls, draws });
            } else {
                self.prefix.pop();
            }
        }
    }
}
