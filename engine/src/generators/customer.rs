//! Customer table generator
//!
//! Name, gender, middle initial and tax id come from the person
//! sub-sequences keyed by ordinal, so they cost this generator no draws
//! and stay reproducible from any other table. The main sequence covers
//! only the row-local attributes, in a fixed order: date of birth, primary
//! phone, secondary phone, two email domains.

use serde::{Deserialize, Serialize};

use crate::core::Date;
use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::CustomerRow;
use crate::person::{self, PersonCache};
use crate::reference::ReferenceBundle;
use crate::scaling::ids::{address_id, customer_address_ordinal, customer_id};
use crate::scaling::{ConfigError, GenerationParams, Tier, LOAD_UNIT_SIZE};

/// Base seed of the customer table sequence.
pub const CUSTOMER_BASE_SEED: u64 = 37_039_940;

/// Per-row draw budget. The widest row consumes 27 draws (date of birth,
/// two fully extended phone numbers, two email domains).
pub const CUSTOMER_ROW_RNG_SKIP: u64 = 35;

const PHONE_LOCAL_FORMAT: &str = "nnn-nnnn";
const PHONE_EXTENSION_FORMAT: &str = "nnn";
const PHONE_EXTENSION_PERCENT: i32 = 25;

/// Active status; the initial population carries no other customer state.
const CUSTOMER_STATUS: &str = "ACTV";

pub struct CustomerGenerator<'a> {
    bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    start_ordinal: u64,
    row_count: u64,
    company_total: u64,
    dob_min_day: i64,
    dob_max_day: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerState {
    pub cursor: Cursor,
    pub emitted: u64,
    cache: PersonCache,
}

impl<'a> CustomerGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            bundle,
            schedule: ReseedSchedule::new(
                CUSTOMER_BASE_SEED,
                LOAD_UNIT_SIZE,
                CUSTOMER_ROW_RNG_SKIP,
            ),
            start_ordinal: params.start_customer,
            row_count: params.customer_count,
            company_total: params.company_total(),
            dob_min_day: Date::from_ymd(1940, 1, 1).day_number(),
            dob_max_day: Date::from_ymd(1985, 12, 31).day_number(),
        })
    }

    fn phone(&self, seq: &mut crate::rng::Sequence) -> String {
        let area =
            &self.bundle.area_codes[seq.int64_range(0, self.bundle.area_codes.len() as i64 - 1) as usize];
        let local = seq.alphanum_formatted(PHONE_LOCAL_FORMAT);
        if seq.percent(PHONE_EXTENSION_PERCENT) {
            let ext = seq.alphanum_formatted(PHONE_EXTENSION_FORMAT);
            format!("{area}-{local} x{ext}")
        } else {
            format!("{area}-{local}")
        }
    }
}

impl TableGenerator for CustomerGenerator<'_> {
    type State = CustomerState;
    type Row = CustomerRow;

    fn start(&self) -> CustomerState {
        CustomerState {
            cursor: self.schedule.start_cursor(self.start_ordinal - 1),
            emitted: 0,
            cache: PersonCache::new(),
        }
    }

    fn has_more(&self, state: &CustomerState) -> bool {
        state.emitted < self.row_count
    }

    fn step(&self, state: CustomerState) -> (CustomerState, CustomerRow) {
        assert!(self.has_more(&state), "customer generator exhausted");
        let mut cursor = state.cursor;
        let mut cache = state.cache;
        self.schedule.reseed_at_boundary(&mut cursor);
        let ordinal = cursor.ordinal + 1;
        let seq = &mut cursor.seq;

        let (is_female, first_name, last_name) = cache.name_of(self.bundle, ordinal);
        let dob = Date::from_day_number(
            seq.int64_range(self.dob_min_day, self.dob_max_day),
        );
        let phone_1 = self.phone(seq);
        let phone_2 = self.phone(seq);
        let email_domain_1 = &self.bundle.email_domains
            [seq.int64_range(0, self.bundle.email_domains.len() as i64 - 1) as usize];
        let email_domain_2 = &self.bundle.email_domains
            [seq.int64_range(0, self.bundle.email_domains.len() as i64 - 1) as usize];
        let email_local = format!(
            "{}{}",
            first_name.chars().next().unwrap_or('x'),
            last_name.to_lowercase()
        );

        let row = CustomerRow {
            c_id: customer_id(ordinal),
            tax_id: person::tax_id(ordinal),
            st_id: CUSTOMER_STATUS.to_string(),
            last_name,
            first_name,
            middle_initial: person::middle_initial(ordinal),
            gender: if is_female { 'F' } else { 'M' },
            tier: Tier::of_ordinal(ordinal).number(),
            dob,
            ad_id: address_id(customer_address_ordinal(ordinal, self.company_total)),
            phone_1,
            phone_2,
            email_1: format!("{email_local}@{email_domain_1}"),
            email_2: format!("{email_local}@{email_domain_2}"),
        };

        cursor.ordinal += 1;
        (
            CustomerState {
                cursor,
                emitted: state.emitted + 1,
                cache,
            },
            row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::TableGenerator;
    use crate::scaling::ids::customer_ordinal;

    #[test]
    fn test_row_count_and_unique_ids() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(2000, 10);
        let generator = CustomerGenerator::new(&params, &bundle).unwrap();
        let rows: Vec<_> = generator.rows().collect();
        assert_eq!(rows.len(), 2000);
        let mut ids: Vec<u64> = rows.iter().map(|r| r.c_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 2000);
    }

    #[test]
    fn test_person_attributes_match_sub_sequences() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 10);
        let generator = CustomerGenerator::new(&params, &bundle).unwrap();
        for (index, row) in generator.rows().enumerate().step_by(97) {
            let ordinal = index as u64 + 1;
            assert_eq!(customer_ordinal(row.c_id), ordinal);
            assert_eq!(row.first_name, person::first_name(&bundle, ordinal));
            assert_eq!(row.last_name, person::last_name(&bundle, ordinal));
            assert_eq!(row.tax_id, person::tax_id(ordinal));
            assert_eq!(row.middle_initial, person::middle_initial(ordinal));
            assert_eq!(row.gender == 'F', person::is_female(ordinal));
            assert_eq!(row.tier, Tier::of_ordinal(ordinal).number());
        }
    }

    #[test]
    fn test_dob_within_configured_span() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 10);
        let generator = CustomerGenerator::new(&params, &bundle).unwrap();
        let min = Date::from_ymd(1940, 1, 1);
        let max = Date::from_ymd(1985, 12, 31);
        for row in generator.rows() {
            assert!(row.dob >= min && row.dob <= max, "dob {} out of span", row.dob);
        }
    }

    #[test]
    fn test_address_ids_follow_company_block() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 10);
        let generator = CustomerGenerator::new(&params, &bundle).unwrap();
        let first = generator.rows().next().unwrap();
        // 500 company addresses precede the first customer address.
        assert_eq!(first.ad_id, address_id(501));
    }
}
