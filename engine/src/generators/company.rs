//! Company table generator
//!
//! Company names are a pure function of the ordinal (base name list with a
//! `#N` wraparound suffix), so the security and news generators reproduce
//! them without coordination. Draw order per row: industry, S&P rating,
//! CEO gender gate, CEO first name, CEO last name, founding date.

use serde::{Deserialize, Serialize};

use crate::core::Date;
use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::CompanyRow;
use crate::reference::ReferenceBundle;
use crate::scaling::ids::{address_id, company_address_ordinal, company_id};
use crate::scaling::{
    scaled_count, start_offset, wraparound_suffix, ConfigError, GenerationParams,
    COMPANIES_PER_UNIT,
};

/// Base seed of the company table sequence.
pub const COMPANY_BASE_SEED: u64 = 88_059_280;

/// Per-row draw budget; rows consume 6.
pub const COMPANY_ROW_RNG_SKIP: u64 = 15;

const FEMALE_PERCENT: i32 = 49;
const COMPANY_STATUS: &str = "ACTV";

/// Company name for a 0-based company ordinal: the base list wraps with a
/// numeric suffix once exhausted.
pub fn company_name(bundle: &ReferenceBundle, ordinal0: u64) -> String {
    let file_size = bundle.company_names.len() as u64;
    let base = &bundle.company_names[(ordinal0 % file_size) as usize];
    match wraparound_suffix(ordinal0, file_size) {
        0 => base.clone(),
        suffix => format!("{base} #{suffix}"),
    }
}

pub struct CompanyGenerator<'a> {
    bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    start_ordinal0: u64,
    row_count: u64,
    open_min_day: i64,
    open_max_day: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyState {
    pub cursor: Cursor,
    pub emitted: u64,
}

impl<'a> CompanyGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            bundle,
            schedule: ReseedSchedule::new(
                COMPANY_BASE_SEED,
                COMPANIES_PER_UNIT,
                COMPANY_ROW_RNG_SKIP,
            ),
            start_ordinal0: start_offset(params.start_customer, COMPANIES_PER_UNIT),
            row_count: scaled_count(params.customer_count, COMPANIES_PER_UNIT),
            open_min_day: Date::from_ymd(1850, 1, 1).day_number(),
            open_max_day: Date::from_ymd(1999, 12, 31).day_number(),
        })
    }
}

impl TableGenerator for CompanyGenerator<'_> {
    type State = CompanyState;
    type Row = CompanyRow;

    fn start(&self) -> CompanyState {
        CompanyState {
            cursor: self.schedule.start_cursor(self.start_ordinal0),
            emitted: 0,
        }
    }

    fn has_more(&self, state: &CompanyState) -> bool {
        state.emitted < self.row_count
    }

    fn step(&self, state: CompanyState) -> (CompanyState, CompanyRow) {
        assert!(self.has_more(&state), "company generator exhausted");
        let mut cursor = state.cursor;
        self.schedule.reseed_at_boundary(&mut cursor);
        let ordinal = cursor.ordinal + 1;
        let seq = &mut cursor.seq;

        let industry = &self.bundle.industries
            [seq.int64_range(0, self.bundle.industries.len() as i64 - 1) as usize];
        let sp_rate = self.bundle.sp_ratings.random(seq).clone();
        let ceo_list = if seq.percent(FEMALE_PERCENT) {
            &self.bundle.female_first_names
        } else {
            &self.bundle.male_first_names
        };
        let ceo_first = ceo_list.random(seq).clone();
        let ceo_last = self.bundle.last_names.random(seq).clone();
        let open_date = Date::from_day_number(
            seq.int64_range(self.open_min_day, self.open_max_day),
        );

        let row = CompanyRow {
            co_id: company_id(ordinal),
            st_id: COMPANY_STATUS.to_string(),
            name: company_name(self.bundle, cursor.ordinal),
            in_id: industry.id.clone(),
            sp_rate,
            ceo: format!("{ceo_first} {ceo_last}"),
            ad_id: address_id(company_address_ordinal(ordinal)),
            desc: format!("{} company in the {} sector", industry.name, industry.sector),
            open_date,
        };

        cursor.ordinal += 1;
        (
            CompanyState {
                cursor,
                emitted: state.emitted + 1,
            },
            row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::TableGenerator;
    use crate::scaling::ids::COMPANY_ID_SHIFT;

    #[test]
    fn test_scaled_row_count() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(2000, 10);
        let rows: Vec<_> = CompanyGenerator::new(&params, &bundle)
            .unwrap()
            .rows()
            .collect();
        assert_eq!(rows.len(), 1000);
        assert_eq!(rows[0].co_id, COMPANY_ID_SHIFT + 1);
        assert_eq!(rows[999].co_id, COMPANY_ID_SHIFT + 1000);
    }

    #[test]
    fn test_names_wrap_with_suffix() {
        let bundle = ReferenceBundle::builtin();
        let file_size = bundle.company_names.len() as u64;
        assert_eq!(company_name(&bundle, 0), bundle.company_names[0]);
        assert_eq!(
            company_name(&bundle, file_size),
            format!("{} #1", bundle.company_names[0])
        );
        assert_eq!(
            company_name(&bundle, 2 * file_size + 3),
            format!("{} #2", bundle.company_names[3])
        );
    }

    #[test]
    fn test_company_names_are_unique() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(4000, 10);
        let mut names: Vec<String> = CompanyGenerator::new(&params, &bundle)
            .unwrap()
            .rows()
            .map(|r| r.name)
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_industry_codes_come_from_reference_data() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 10);
        for row in CompanyGenerator::new(&params, &bundle).unwrap().rows() {
            assert!(bundle.industries.iter().any(|i| i.id == row.in_id));
            assert_eq!(row.ad_id, row.co_id - COMPANY_ID_SHIFT + crate::scaling::ids::ADDRESS_ID_SHIFT);
        }
    }
}
