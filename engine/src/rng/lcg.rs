//! 64-bit linear-congruential sequence generator
//!
//! This is the deterministic core every generator draws from. The multiplier
//! and increment are fixed by the benchmark specification and must not be
//! changed: the published row values depend on this exact sequence.
//!
//! # Algorithm
//!
//! `state' = state * MULTIPLIER + INCREMENT (mod 2^64)`, computed with
//! wrapping 64-bit arithmetic. Ranged draws map the post-advance state into
//! `[min, max]` by taking the high 64 bits of the 128-bit product of the
//! state and the range width, which is bias-free for every width including
//! non-powers of two.
//!
//! # Determinism
//!
//! Same seed → same sequence of values, on any platform. This is CRITICAL
//! for:
//! - Reproducing a data set from its parameters alone
//! - Generating load-unit partitions independently and getting identical rows
//! - Debugging (replay the exact draw sequence of any row)

use serde::{Deserialize, Serialize};

/// Sequence multiplier, fixed by the benchmark specification.
pub const SEQUENCE_MULTIPLIER: u64 = 6364136223846793005;

/// Sequence increment, fixed by the benchmark specification.
pub const SEQUENCE_INCREMENT: u64 = 1442695040888963407;

/// Increment used by `double_incr_range(0, 1, ..)` draws feeding `neg_exp`.
const NEG_EXP_INCREMENT: f64 = 0.000000000001;

/// Deterministic sequence generator
///
/// Each generator owns its own `Sequence`; states are never shared. Side
/// lookups keyed by a different ordinal must use [`Sequence::fork`] so the
/// owner's state is untouched.
///
/// # Example
/// ```
/// use market_datagen_core_rs::Sequence;
///
/// let mut seq = Sequence::new(12345);
/// let value = seq.int_range(0, 99); // inclusive on both ends
/// assert!((0..=99).contains(&value));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Internal state (64-bit)
    state: u64,
}

impl Sequence {
    /// Create a new sequence positioned at `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a sequence for a side draw keyed by `key`.
    ///
    /// The forked state is `nth_element(base_seed, key)`: the exact state
    /// the base sequence would hold after `key` advances. Consuming the
    /// fork never affects any other sequence, so keyed lookups (a name by
    /// customer ordinal, a tax id by owner ordinal) can happen in any
    /// order, any number of times, without changing the rows being built.
    pub fn fork(base_seed: u64, key: u64) -> Self {
        Self::new(Self::nth_element(base_seed, key))
    }

    /// Get the current state (for checkpointing/replay).
    pub fn seed(&self) -> u64 {
        self.state
    }

    /// Reposition the sequence at `seed`.
    pub fn set_seed(&mut self, seed: u64) {
        self.state = seed;
    }

    /// Advance the state by one step and return the new state.
    pub fn advance(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(SEQUENCE_MULTIPLIER)
            .wrapping_add(SEQUENCE_INCREMENT);
        self.state
    }

    /// Compute the state after `n` advances from `seed` without iterating.
    ///
    /// Binary exponentiation over the affine recurrence: maintains the
    /// running multiplier block `A^(2^i)` and the additive block for
    /// `2^i` steps, folding in each set bit of `n`. O(log n), and equal to
    /// `n` repeated calls of [`Sequence::advance`] for every `n`, including
    /// `n = 0` (identity).
    ///
    /// This is the primitive that makes random-access reseeding possible:
    /// any partition computes its own starting state analytically instead
    /// of replaying everything before it.
    ///
    /// # Example
    /// ```
    /// use market_datagen_core_rs::Sequence;
    ///
    /// let mut seq = Sequence::new(7);
    /// for _ in 0..1000 {
    ///     seq.advance();
    /// }
    /// assert_eq!(Sequence::nth_element(7, 1000), seq.seed());
    /// ```
    pub fn nth_element(seed: u64, n: u64) -> u64 {
        let mut seed = seed;
        let mut a_pow = SEQUENCE_MULTIPLIER;
        let mut d_sum = SEQUENCE_INCREMENT;
        let mut remaining = n;
        while remaining > 0 {
            if remaining & 1 == 1 {
                seed = seed.wrapping_mul(a_pow).wrapping_add(d_sum);
            }
            // Double the block: A^(2k) = (A^k)^2, and the additive part of
            // 2k steps is d_sum * (A^k + 1).
            d_sum = d_sum.wrapping_mul(a_pow.wrapping_add(1));
            a_pow = a_pow.wrapping_mul(a_pow);
            remaining >>= 1;
        }
        seed
    }

    /// Draw an integer uniformly from `[min, max]` (both inclusive).
    ///
    /// # Panics
    /// Panics if min > max
    pub fn int_range(&mut self, min: i32, max: i32) -> i32 {
        self.int64_range(min as i64, max as i64) as i32
    }

    /// Draw a 64-bit integer uniformly from `[min, max]` (both inclusive).
    ///
    /// Advances once, then takes the high 64 bits of the 128-bit product
    /// of the new state and the range width.
    ///
    /// # Panics
    /// Panics if min > max
    pub fn int64_range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "int64_range: min {min} > max {max}");
        let width = (max as i128 - min as i128 + 1) as u64;
        let high = ((self.advance() as u128 * width as u128) >> 64) as u64;
        min + high as i64
    }

    /// Draw from `[min, max]` excluding one interior value.
    ///
    /// Consumes exactly one draw: maps `[min, max-1]` and shifts values at
    /// or above `exclude` up by one.
    ///
    /// # Panics
    /// Panics if `exclude` is outside `[min, max]` or the range is a single
    /// value.
    pub fn int_range_excluding(&mut self, min: i32, max: i32, exclude: i32) -> i32 {
        self.int64_range_excluding(min as i64, max as i64, exclude as i64) as i32
    }

    /// 64-bit variant of [`Sequence::int_range_excluding`].
    pub fn int64_range_excluding(&mut self, min: i64, max: i64, exclude: i64) -> i64 {
        assert!(
            min <= exclude && exclude <= max,
            "int64_range_excluding: exclude {exclude} outside [{min}, {max}]"
        );
        assert!(min < max, "int64_range_excluding: empty result range");
        let value = self.int64_range(min, max - 1);
        if value >= exclude {
            value + 1
        } else {
            value
        }
    }

    /// Draw a double from the grid `{min, min+incr, min+2*incr, ..}` capped
    /// at `max`.
    ///
    /// Maps an integer draw of width `floor((max-min)/incr)` and scales by
    /// `incr`, so the draw consumes exactly one advance.
    pub fn double_incr_range(&mut self, min: f64, max: f64, incr: f64) -> f64 {
        assert!(incr > 0.0, "double_incr_range: increment must be positive");
        let width = ((max - min) / incr) as i64;
        min + self.int64_range(0, width) as f64 * incr
    }

    /// Return true with probability `percent`/100.
    ///
    /// # Example
    /// ```
    /// use market_datagen_core_rs::Sequence;
    ///
    /// let mut seq = Sequence::new(42);
    /// let _heads = seq.percent(50);
    /// assert!(!seq.percent(0)); // never
    /// ```
    pub fn percent(&mut self, percent: i32) -> bool {
        self.int_range(1, 100) <= percent
    }

    /// Expand a format pattern into a random alphanumeric string.
    ///
    /// `n` produces a decimal digit, `a` an uppercase letter; every other
    /// character is copied through. Each `n` or `a` consumes one draw;
    /// literal characters consume none.
    ///
    /// # Example
    /// ```
    /// use market_datagen_core_rs::Sequence;
    ///
    /// let mut seq = Sequence::new(42);
    /// let tax_id = seq.alphanum_formatted("nnn-aa-nnnn");
    /// assert_eq!(tax_id.len(), 11);
    /// ```
    pub fn alphanum_formatted(&mut self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len());
        for ch in pattern.chars() {
            match ch {
                'n' => out.push((b'0' + self.int_range(0, 9) as u8) as char),
                'a' => out.push((b'A' + self.int_range(0, 25) as u8) as char),
                other => out.push(other),
            }
        }
        out
    }

    /// Draw from a negative-exponential distribution with the given mean.
    ///
    /// Inverse-CDF sampling over a `double_incr_range(0, 1, 1e-12)` draw,
    /// clamped to the first nonzero grid point: the log never sees 0.0, so
    /// the result is always finite (at most `~27.6 * mean`).
    pub fn neg_exp(&mut self, mean: f64) -> f64 {
        let uniform = self
            .double_incr_range(0.0, 1.0, NEG_EXP_INCREMENT)
            .max(NEG_EXP_INCREMENT);
        -1.0 * uniform.ln() * mean
    }
}
