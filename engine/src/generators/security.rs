//! Security table generator
//!
//! 685 securities per load unit. The issuing company and the trading
//! symbol are pure functions of the security ordinal, so the daily-market
//! and watch-list generators reproduce them without replaying this table.
//! Draw order per row: issue class, exchange, shares outstanding, first
//! trade date, exchange-listing offset, P/E, dividend, two 52-week price
//! probes, 52-week high date offset, 52-week low date offset.

use serde::{Deserialize, Serialize};

use crate::core::{Date, Money};
use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::SecurityRow;
use crate::price;
use crate::reference::ReferenceBundle;
use crate::scaling::ids::company_id;
use crate::scaling::{
    scaled_count, start_offset, wraparound_suffix, ConfigError, GenerationParams,
    SECURITIES_PER_UNIT,
};

use super::company::company_name;

/// Base seed of the security table sequence.
pub const SECURITY_BASE_SEED: u64 = 16_225_870;

/// Per-row draw budget; rows consume 11.
pub const SECURITY_ROW_RNG_SKIP: u64 = 15;

const SECURITY_STATUS: &str = "ACTV";

const MIN_SHARES_OUTSTANDING: i64 = 1_000_000;
const MAX_SHARES_OUTSTANDING: i64 = 2_000_000_000;

/// Trading symbol for a 0-based security ordinal: the base list wraps with
/// a `-N` suffix once exhausted.
pub fn security_symbol(bundle: &ReferenceBundle, ordinal0: u64) -> String {
    let file_size = bundle.symbols.len() as u64;
    let base = &bundle.symbols[(ordinal0 % file_size) as usize];
    match wraparound_suffix(ordinal0, file_size) {
        0 => base.clone(),
        suffix => format!("{base}-{suffix}"),
    }
}

/// Issuing company (1-based ordinal) of a 0-based security ordinal.
/// Securities cycle over the companies so every company issues at least
/// one and the 685:500 per-unit ratio spreads the extras evenly.
pub fn issuing_company_ordinal(security_ordinal0: u64, company_total: u64) -> u64 {
    security_ordinal0 % company_total + 1
}

pub struct SecurityGenerator<'a> {
    bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    start_ordinal0: u64,
    row_count: u64,
    company_total: u64,
    start_min_day: i64,
    start_max_day: i64,
    week52_anchor: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityState {
    pub cursor: Cursor,
    pub emitted: u64,
}

impl<'a> SecurityGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            bundle,
            schedule: ReseedSchedule::new(
                SECURITY_BASE_SEED,
                SECURITIES_PER_UNIT,
                SECURITY_ROW_RNG_SKIP,
            ),
            start_ordinal0: start_offset(params.start_customer, SECURITIES_PER_UNIT),
            row_count: scaled_count(params.customer_count, SECURITIES_PER_UNIT),
            company_total: params.company_total(),
            start_min_day: Date::from_ymd(1970, 1, 2).day_number(),
            start_max_day: Date::from_ymd(1999, 12, 31).day_number(),
            week52_anchor: Date::from_ymd(2005, 1, 3),
        })
    }
}

impl TableGenerator for SecurityGenerator<'_> {
    type State = SecurityState;
    type Row = SecurityRow;

    fn start(&self) -> SecurityState {
        SecurityState {
            cursor: self.schedule.start_cursor(self.start_ordinal0),
            emitted: 0,
        }
    }

    fn has_more(&self, state: &SecurityState) -> bool {
        state.emitted < self.row_count
    }

    fn step(&self, state: SecurityState) -> (SecurityState, SecurityRow) {
        assert!(self.has_more(&state), "security generator exhausted");
        let mut cursor = state.cursor;
        self.schedule.reseed_at_boundary(&mut cursor);
        let ordinal0 = cursor.ordinal;
        let company_ordinal = issuing_company_ordinal(ordinal0, self.company_total);
        let seq = &mut cursor.seq;

        let issue = self.bundle.security_issues.random(seq).clone();
        let exchange = &self.bundle.exchanges
            [seq.int64_range(0, self.bundle.exchanges.len() as i64 - 1) as usize];
        let num_outstanding =
            seq.int64_range(MIN_SHARES_OUTSTANDING, MAX_SHARES_OUTSTANDING);
        let start_date = Date::from_day_number(
            seq.int64_range(self.start_min_day, self.start_max_day),
        );
        let exch_date = start_date.add_days(seq.int64_range(0, 730));
        let pe = seq.double_incr_range(1.0, 120.0, 0.01);
        let dividend = Money::from_dollars(seq.double_incr_range(0.0, 1.00, 0.01));

        // Two probes of the wave give the 52-week extremes; the larger is
        // the high by construction.
        let probe_a = price::price(
            ordinal0,
            seq.int64_range(0, price::PRICE_PERIOD_SECS as i64 - 1) as u64,
        );
        let probe_b = price::price(
            ordinal0,
            seq.int64_range(0, price::PRICE_PERIOD_SECS as i64 - 1) as u64,
        );
        let (week52_high, week52_low) = if probe_a >= probe_b {
            (probe_a, probe_b)
        } else {
            (probe_b, probe_a)
        };
        let week52_high_date = self.week52_anchor.add_days(-seq.int64_range(0, 364));
        let week52_low_date = self.week52_anchor.add_days(-seq.int64_range(0, 364));

        let current = price::price(ordinal0, 0);
        let yield_pct = dividend.dollars() / current.dollars() * 100.0;

        let row = SecurityRow {
            symbol: security_symbol(self.bundle, ordinal0),
            issue,
            st_id: SECURITY_STATUS.to_string(),
            name: company_name(self.bundle, company_ordinal - 1),
            ex_id: exchange.id.clone(),
            co_id: company_id(company_ordinal),
            num_outstanding,
            start_date,
            exch_date,
            pe,
            week52_high,
            week52_high_date,
            week52_low,
            week52_low_date,
            dividend,
            yield_pct,
        };

        cursor.ordinal += 1;
        (
            SecurityState {
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
    use crate::price::{MAX_PRICE_CENTS, MIN_PRICE_CENTS};

    #[test]
    fn test_scaled_row_count_and_unique_symbols() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(2000, 10);
        let rows: Vec<_> = SecurityGenerator::new(&params, &bundle)
            .unwrap()
            .rows()
            .collect();
        assert_eq!(rows.len(), 1370);
        let mut symbols: Vec<String> = rows.iter().map(|r| r.symbol.clone()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), 1370);
    }

    #[test]
    fn test_every_company_issues_at_least_one_security() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 10);
        let mut issuers: Vec<u64> = SecurityGenerator::new(&params, &bundle)
            .unwrap()
            .rows()
            .map(|r| r.co_id)
            .collect();
        issuers.sort_unstable();
        issuers.dedup();
        assert_eq!(issuers.len(), 500);
    }

    #[test]
    fn test_week52_extremes_ordered_and_in_band() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 10);
        for row in SecurityGenerator::new(&params, &bundle).unwrap().rows() {
            assert!(row.week52_high >= row.week52_low);
            assert!(row.week52_high.cents() <= MAX_PRICE_CENTS);
            assert!(row.week52_low.cents() >= MIN_PRICE_CENTS);
            assert!(row.exch_date >= row.start_date);
            assert!(row.yield_pct >= 0.0);
        }
    }

    #[test]
    fn test_name_matches_issuing_company() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 10);
        for (index, row) in SecurityGenerator::new(&params, &bundle)
            .unwrap()
            .rows()
            .enumerate()
        {
            let company_ordinal = issuing_company_ordinal(index as u64, 500);
            assert_eq!(row.co_id, company_id(company_ordinal));
            assert_eq!(row.name, company_name(&bundle, company_ordinal - 1));
            assert_eq!(row.symbol, security_symbol(&bundle, index as u64));
        }
    }
}
