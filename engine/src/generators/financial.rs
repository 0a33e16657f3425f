//! Quarterly financial generator
//!
//! Twenty quarters (five years starting Q1 2000) per company, company
//! major, with a reseed at every company block. Earnings and both EPS
//! figures are derived from the drawn revenue, margin and share counts,
//! so the derived columns are consistent within each row by construction.
//! Draw order per row: revenue, margin, inventory, assets, liabilities,
//! basic shares, diluted share delta.

use serde::{Deserialize, Serialize};

use crate::core::{Date, Money};
use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::FinancialRow;
use crate::reference::ReferenceBundle;
use crate::scaling::ids::company_id;
use crate::scaling::{
    scaled_count, start_offset, ConfigError, GenerationParams, COMPANIES_PER_UNIT,
};

/// Base seed of the financial table sequence.
pub const FINANCIAL_BASE_SEED: u64 = 53_507_160;

/// Per-row draw budget; rows consume 7.
pub const FINANCIAL_ROW_RNG_SKIP: u64 = 8;

/// Quarters of history per company.
pub const QUARTERS_PER_COMPANY: u64 = 20;

/// First year of the reported history.
pub const FIRST_FINANCIAL_YEAR: i32 = 2000;

const MIN_QUARTER_REVENUE_DOLLARS: f64 = 1_000_000.0;
const MAX_QUARTER_REVENUE_DOLLARS: f64 = 1_000_000_000.0;
const MIN_MARGIN_PERCENT: f64 = -10.0;
const MAX_MARGIN_PERCENT: f64 = 30.0;
const MIN_BASIC_SHARES: i64 = 1_000_000;
const MAX_BASIC_SHARES: i64 = 600_000_000;
const MAX_DILUTION_SHARES: i64 = 10_000_000;

pub struct FinancialGenerator<'a> {
    // Financial rows use no reference data today; the bundle stays in the
    // constructor signature so all generators build uniformly.
    _bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    company_start0: u64,
    company_rows: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialState {
    pub cursor: Cursor,
    pub emitted: u64,
}

impl<'a> FinancialGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            _bundle: bundle,
            schedule: ReseedSchedule::new(
                FINANCIAL_BASE_SEED,
                QUARTERS_PER_COMPANY,
                FINANCIAL_ROW_RNG_SKIP,
            ),
            company_start0: start_offset(params.start_customer, COMPANIES_PER_UNIT),
            company_rows: scaled_count(params.customer_count, COMPANIES_PER_UNIT),
        })
    }

    /// Total rows this partition emits.
    pub fn total_rows(&self) -> u64 {
        self.company_rows * QUARTERS_PER_COMPANY
    }
}

impl TableGenerator for FinancialGenerator<'_> {
    type State = FinancialState;
    type Row = FinancialRow;

    fn start(&self) -> FinancialState {
        FinancialState {
            cursor: self
                .schedule
                .start_cursor(self.company_start0 * QUARTERS_PER_COMPANY),
            emitted: 0,
        }
    }

    fn has_more(&self, state: &FinancialState) -> bool {
        state.emitted < self.total_rows()
    }

    fn step(&self, state: FinancialState) -> (FinancialState, FinancialRow) {
        assert!(self.has_more(&state), "financial generator exhausted");
        let mut cursor = state.cursor;
        self.schedule.reseed_at_boundary(&mut cursor);
        let company_ordinal = cursor.ordinal / QUARTERS_PER_COMPANY + 1;
        let quarter_index = cursor.ordinal % QUARTERS_PER_COMPANY;
        let seq = &mut cursor.seq;

        let revenue_dollars = seq.double_incr_range(
            MIN_QUARTER_REVENUE_DOLLARS,
            MAX_QUARTER_REVENUE_DOLLARS,
            0.01,
        );
        let margin = seq.double_incr_range(MIN_MARGIN_PERCENT, MAX_MARGIN_PERCENT, 0.01);
        let inventory = Money::from_dollars(seq.double_incr_range(
            0.0,
            MAX_QUARTER_REVENUE_DOLLARS,
            0.01,
        ));
        let assets = Money::from_dollars(seq.double_incr_range(
            MIN_QUARTER_REVENUE_DOLLARS,
            10.0 * MAX_QUARTER_REVENUE_DOLLARS,
            0.01,
        ));
        let liabilities = Money::from_dollars(seq.double_incr_range(
            0.0,
            10.0 * MAX_QUARTER_REVENUE_DOLLARS,
            0.01,
        ));
        let shares_out_basic = seq.int64_range(MIN_BASIC_SHARES, MAX_BASIC_SHARES);
        let shares_out_diluted =
            shares_out_basic + seq.int64_range(0, MAX_DILUTION_SHARES);

        let net_earnings = Money::from_dollars(revenue_dollars * margin / 100.0);
        let basic_eps = Money::from_cents(net_earnings.cents() / shares_out_basic);
        let diluted_eps = Money::from_cents(net_earnings.cents() / shares_out_diluted);

        let year = FIRST_FINANCIAL_YEAR + (quarter_index / 4) as i32;
        let quarter = (quarter_index % 4) as u8 + 1;

        let row = FinancialRow {
            co_id: company_id(company_ordinal),
            year,
            quarter,
            quarter_start: Date::from_ymd(year as i64, 3 * (quarter as u32 - 1) + 1, 1),
            revenue: Money::from_dollars(revenue_dollars),
            net_earnings,
            basic_eps,
            diluted_eps,
            margin,
            inventory,
            assets,
            liabilities,
            shares_out_basic,
            shares_out_diluted,
        };

        cursor.ordinal += 1;
        (
            FinancialState {
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

    #[test]
    fn test_twenty_quarters_per_company() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 10);
        let rows: Vec<_> = FinancialGenerator::new(&params, &bundle)
            .unwrap()
            .rows()
            .collect();
        assert_eq!(rows.len(), 500 * 20);
        let first_company = company_id(1);
        for (index, row) in rows[..20].iter().enumerate() {
            assert_eq!(row.co_id, first_company);
            assert_eq!(row.year, 2000 + index as i32 / 4);
            assert_eq!(row.quarter, index as u8 % 4 + 1);
        }
        assert_eq!(rows[20].co_id, company_id(2));
    }

    #[test]
    fn test_quarter_starts_fall_on_quarter_months() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 10);
        for row in FinancialGenerator::new(&params, &bundle)
            .unwrap()
            .rows()
            .take(200)
        {
            let (year, month, day) = row.quarter_start.to_ymd();
            assert_eq!(year, row.year as i64);
            assert_eq!(month, 3 * (row.quarter as u32 - 1) + 1);
            assert_eq!(day, 1);
        }
    }

    #[test]
    fn test_derived_columns_are_consistent() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 10);
        for row in FinancialGenerator::new(&params, &bundle)
            .unwrap()
            .rows()
            .take(500)
        {
            assert_eq!(
                row.basic_eps.cents(),
                row.net_earnings.cents() / row.shares_out_basic
            );
            assert_eq!(
                row.diluted_eps.cents(),
                row.net_earnings.cents() / row.shares_out_diluted
            );
            assert!(row.shares_out_diluted >= row.shares_out_basic);
            // Earnings sign follows the drawn margin.
            if row.margin > 0.0 {
                assert!(row.net_earnings.cents() >= 0);
            }
        }
    }
}
