//! Company competitor generator
//!
//! Three competitor links per company, flattened into one row stream so
//! the reseed unit matches the per-unit scaling constant. Draw order per
//! row: competitor company (excluding the company itself), industry.

use serde::{Deserialize, Serialize};

use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::CompanyCompetitorRow;
use crate::reference::ReferenceBundle;
use crate::scaling::ids::company_id;
use crate::scaling::{
    scaled_count, start_offset, ConfigError, GenerationParams, COMPETITORS_PER_UNIT,
};

/// Base seed of the competitor table sequence.
pub const COMPETITOR_BASE_SEED: u64 = 43_058_870;

/// Per-row draw budget; rows consume 2.
pub const COMPETITOR_ROW_RNG_SKIP: u64 = 4;

/// Competitor links per company.
pub const COMPETITORS_PER_COMPANY: u64 = 3;

pub struct CompanyCompetitorGenerator<'a> {
    bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    start_ordinal0: u64,
    row_count: u64,
    company_total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorState {
    pub cursor: Cursor,
    pub emitted: u64,
}

impl<'a> CompanyCompetitorGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            bundle,
            schedule: ReseedSchedule::new(
                COMPETITOR_BASE_SEED,
                COMPETITORS_PER_UNIT,
                COMPETITOR_ROW_RNG_SKIP,
            ),
            start_ordinal0: start_offset(params.start_customer, COMPETITORS_PER_UNIT),
            row_count: scaled_count(params.customer_count, COMPETITORS_PER_UNIT),
            company_total: params.company_total(),
        })
    }
}

impl TableGenerator for CompanyCompetitorGenerator<'_> {
    type State = CompetitorState;
    type Row = CompanyCompetitorRow;

    fn start(&self) -> CompetitorState {
        CompetitorState {
            cursor: self.schedule.start_cursor(self.start_ordinal0),
            emitted: 0,
        }
    }

    fn has_more(&self, state: &CompetitorState) -> bool {
        state.emitted < self.row_count
    }

    fn step(&self, state: CompetitorState) -> (CompetitorState, CompanyCompetitorRow) {
        assert!(self.has_more(&state), "competitor generator exhausted");
        let mut cursor = state.cursor;
        self.schedule.reseed_at_boundary(&mut cursor);
        let company_ordinal = cursor.ordinal / COMPETITORS_PER_COMPANY + 1;
        let seq = &mut cursor.seq;

        let competitor_ordinal = seq.int64_range_excluding(
            1,
            self.company_total as i64,
            company_ordinal as i64,
        ) as u64;
        let industry = &self.bundle.industries
            [seq.int64_range(0, self.bundle.industries.len() as i64 - 1) as usize];

        let row = CompanyCompetitorRow {
            co_id: company_id(company_ordinal),
            competitor_co_id: company_id(competitor_ordinal),
            in_id: industry.id.clone(),
        };

        cursor.ordinal += 1;
        (
            CompetitorState {
                cursor,
                emitted: state.emitted + 1,
            },
            row,
        )
    }
}
