//! Entity generator state machines
//!
//! One generator per output table, each built on the sequence core, the
//! scaling math, and the shared reference bundle.
//!
//! # Key Principles
//!
//! 1. **Explicit state**: a generator is an immutable config value; all
//!    mutation lives in a state value threaded through a pure transition
//!    (`step`), so any single transition can be tested in isolation
//! 2. **Fixed draw order**: each row consumes its draws in a documented
//!    order; the order is part of the contract because it decides which
//!    values consume which part of the sequence
//! 3. **Boundary reseeding**: at the first row and at every unit boundary
//!    the sequence is repositioned analytically with `nth_element`, which
//!    is what makes unit-aligned partitions generate identical rows with
//!    zero coordination
//! 4. **`has_more` is pure**: it never consumes randomness

pub mod accounts;
pub mod address;
pub mod broker;
pub mod company;
pub mod competitor;
pub mod customer;
pub mod daily_market;
pub mod financial;
pub mod news;
pub mod security;
pub mod tax_rate;
pub mod watch_list;

pub use accounts::CustomerAccountsGenerator;
pub use address::AddressGenerator;
pub use broker::BrokerGenerator;
pub use company::CompanyGenerator;
pub use competitor::CompanyCompetitorGenerator;
pub use customer::CustomerGenerator;
pub use daily_market::DailyMarketGenerator;
pub use financial::FinancialGenerator;
pub use news::NewsGenerator;
pub use security::SecurityGenerator;
pub use tax_rate::TaxRateGenerator;
pub use watch_list::WatchListGenerator;

use crate::rng::Sequence;
use serde::{Deserialize, Serialize};

/// Common contract for every table generator
///
/// `step` consumes the state by value and returns the successor state with
/// the produced row; `has_more` is a pure predicate on the state.
pub trait TableGenerator {
    type State;
    type Row;

    /// Initial state for this generator's configured partition.
    fn start(&self) -> Self::State;

    /// Whether another row remains. Consumes no randomness.
    fn has_more(&self, state: &Self::State) -> bool;

    /// Produce the next row and successor state.
    ///
    /// # Panics
    /// Panics if called when `has_more` is false.
    fn step(&self, state: Self::State) -> (Self::State, Self::Row);

    /// Iterator adapter over the full configured range.
    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows {
            generator: self,
            state: Some(self.start()),
        }
    }
}

/// Iterator over a generator's rows
pub struct Rows<'g, G: TableGenerator> {
    generator: &'g G,
    state: Option<G::State>,
}

impl<G: TableGenerator> Iterator for Rows<'_, G> {
    type Item = G::Row;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state.take()?;
        if !self.generator.has_more(&state) {
            return None;
        }
        let (next, row) = self.generator.step(state);
        self.state = Some(next);
        Some(row)
    }
}

/// Reseeding schedule for one entity
///
/// `skip_per_row` bounds the draws any single row may consume; unit
/// boundaries are then `rows_per_unit * skip_per_row` advances apart in
/// the seed space, so consecutive units can never bleed into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReseedSchedule {
    base_seed: u64,
    rows_per_unit: u64,
    skip_per_row: u64,
}

impl ReseedSchedule {
    pub fn new(base_seed: u64, rows_per_unit: u64, skip_per_row: u64) -> Self {
        assert!(rows_per_unit > 0, "reseed unit must be positive");
        assert!(skip_per_row > 0, "per-row skip must be positive");
        Self {
            base_seed,
            rows_per_unit,
            skip_per_row,
        }
    }

    /// Cursor positioned at an absolute 0-based row ordinal, which must
    /// sit on a unit boundary (partitions start only at boundaries).
    pub fn start_cursor(&self, start_ordinal: u64) -> Cursor {
        assert!(
            start_ordinal % self.rows_per_unit == 0,
            "partition start {start_ordinal} not on a unit boundary of {}",
            self.rows_per_unit
        );
        Cursor {
            ordinal: start_ordinal,
            seq: Sequence::new(self.base_seed),
        }
    }

    /// Reposition the cursor's sequence when its ordinal opens a new unit.
    ///
    /// The new state is computed analytically from the base seed, never by
    /// replaying earlier units.
    pub fn reseed_at_boundary(&self, cursor: &mut Cursor) {
        if cursor.ordinal % self.rows_per_unit == 0 {
            cursor.seq = Sequence::fork(self.base_seed, cursor.ordinal * self.skip_per_row);
        }
    }
}

/// Position of a generator within its row space: the absolute 0-based row
/// ordinal plus the sequence the next row will draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub ordinal: u64,
    pub seq: Sequence,
}
