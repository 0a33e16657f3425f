//! Address table generator
//!
//! One address per company followed by one per customer. The absolute
//! address ordinal space is `[1 .. company_total]` for companies and
//! `[company_total + 1 .. company_total + customer_total]` for customers,
//! so a partition emits two contiguous runs. Both region starts fall on
//! unit boundaries because company counts come in blocks of 500 and
//! customer counts in blocks of 1000.
//!
//! Draw order per row (at most 6 of the 10 budgeted draws): street
//! number, street, suffix, secondary-line gate, apartment number (only
//! when gated in), zip.

use serde::{Deserialize, Serialize};

use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::AddressRow;
use crate::reference::ReferenceBundle;
use crate::scaling::ids::address_id;
use crate::scaling::{
    scaled_count, start_offset, ConfigError, GenerationParams, COMPANIES_PER_UNIT,
};

/// Base seed of the address table sequence.
pub const ADDRESS_BASE_SEED: u64 = 26_778_071;

/// Reseed unit: the largest block size that keeps both the company region
/// (blocks of 500) and the customer region (blocks of 1000) aligned.
pub const ADDRESS_ROWS_PER_UNIT: u64 = 500;

/// Per-row draw budget.
pub const ADDRESS_ROW_RNG_SKIP: u64 = 10;

const SECONDARY_LINE_PERCENT: i32 = 25;

pub struct AddressGenerator<'a> {
    bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    /// First absolute 0-based ordinal of the partition's company region.
    company_start: u64,
    company_rows: u64,
    /// First absolute 0-based ordinal of the partition's customer region.
    customer_start: u64,
    customer_rows: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressState {
    pub cursor: Cursor,
    pub emitted: u64,
}

impl<'a> AddressGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        let company_total = params.company_total();
        Ok(Self {
            bundle,
            schedule: ReseedSchedule::new(
                ADDRESS_BASE_SEED,
                ADDRESS_ROWS_PER_UNIT,
                ADDRESS_ROW_RNG_SKIP,
            ),
            company_start: start_offset(params.start_customer, COMPANIES_PER_UNIT),
            company_rows: scaled_count(params.customer_count, COMPANIES_PER_UNIT),
            customer_start: company_total + params.start_customer - 1,
            customer_rows: params.customer_count,
        })
    }

    /// Total rows this partition emits.
    pub fn total_rows(&self) -> u64 {
        self.company_rows + self.customer_rows
    }
}

impl TableGenerator for AddressGenerator<'_> {
    type State = AddressState;
    type Row = AddressRow;

    fn start(&self) -> AddressState {
        AddressState {
            cursor: self.schedule.start_cursor(self.company_start),
            emitted: 0,
        }
    }

    fn has_more(&self, state: &AddressState) -> bool {
        state.emitted < self.total_rows()
    }

    fn step(&self, state: AddressState) -> (AddressState, AddressRow) {
        assert!(self.has_more(&state), "address generator exhausted");
        let mut cursor = state.cursor;
        self.schedule.reseed_at_boundary(&mut cursor);
        let seq = &mut cursor.seq;

        let street_number = seq.int_range(100, 9999);
        let street = &self.bundle.streets
            [seq.int64_range(0, self.bundle.streets.len() as i64 - 1) as usize];
        let suffix = &self.bundle.street_suffixes
            [seq.int64_range(0, self.bundle.street_suffixes.len() as i64 - 1) as usize];
        let line2 = if seq.percent(SECONDARY_LINE_PERCENT) {
            Some(format!("Apt. {}", seq.int_range(1, 999)))
        } else {
            None
        };
        let zip =
            &self.bundle.zips[seq.int64_range(0, self.bundle.zips.len() as i64 - 1) as usize];

        let row = AddressRow {
            ad_id: address_id(cursor.ordinal + 1),
            line1: format!("{street_number} {street} {suffix}"),
            line2,
            zip: zip.code.clone(),
            town: zip.town.clone(),
            division: zip.division.clone(),
            country_code: zip.country_code,
        };

        let emitted = state.emitted + 1;
        // Jump from the end of the company region to the customer region;
        // both region starts sit on unit boundaries.
        cursor.ordinal = if emitted == self.company_rows {
            self.customer_start
        } else {
            cursor.ordinal + 1
        };
        (AddressState { cursor, emitted }, row)
    }
}
