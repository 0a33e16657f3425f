//! Daily market history generator
//!
//! One closing row per security per configured trading day. The row space
//! is security-major: all of one security's days, then the next security,
//! with a reseed at every security block so a partition can start at any
//! security unit boundary. Closing prices come from the wave model
//! sampled at a per-day stride coprime to the wave period; sampling at
//! calendar-day multiples would alias to a constant because 86400s is a
//! multiple of the 900s period. Draw order per row: volume, high spread,
//! low spread.

use serde::{Deserialize, Serialize};

use crate::core::{Date, Money};
use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::DailyMarketRow;
use crate::price;
use crate::reference::ReferenceBundle;
use crate::scaling::{
    scaled_count, start_offset, ConfigError, GenerationParams, SECURITIES_PER_UNIT,
};

use super::security::security_symbol;

/// Base seed of the daily-market table sequence.
pub const DAILY_MARKET_BASE_SEED: u64 = 12_900_310;

/// Per-row draw budget; rows consume 3.
pub const DAILY_MARKET_ROW_RNG_SKIP: u64 = 4;

/// Seconds between successive daily samples of the wave. Coprime to the
/// 900-second period, so consecutive days land on distinct wave positions.
pub const DAILY_SAMPLE_STRIDE_SECS: u64 = 86_737;

const MIN_DAILY_VOLUME: i64 = 1_000;
const MAX_DAILY_VOLUME: i64 = 10_000_000;
const MAX_INTRADAY_SPREAD_DOLLARS: f64 = 0.50;

/// Trading date of a 0-based trading-day index: five consecutive weekdays
/// per week starting Monday 2000-01-03, weekends skipped.
pub fn trading_date(day_index: u64) -> Date {
    Date::from_ymd(2000, 1, 3).add_days((day_index / 5 * 7 + day_index % 5) as i64)
}

pub struct DailyMarketGenerator<'a> {
    bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    security_start0: u64,
    security_rows: u64,
    trade_days: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMarketState {
    pub cursor: Cursor,
    pub emitted: u64,
}

impl<'a> DailyMarketGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            bundle,
            schedule: ReseedSchedule::new(
                DAILY_MARKET_BASE_SEED,
                params.initial_trade_days,
                DAILY_MARKET_ROW_RNG_SKIP,
            ),
            security_start0: start_offset(params.start_customer, SECURITIES_PER_UNIT),
            security_rows: scaled_count(params.customer_count, SECURITIES_PER_UNIT),
            trade_days: params.initial_trade_days,
        })
    }

    /// Total rows this partition emits.
    pub fn total_rows(&self) -> u64 {
        self.security_rows * self.trade_days
    }
}

impl TableGenerator for DailyMarketGenerator<'_> {
    type State = DailyMarketState;
    type Row = DailyMarketRow;

    fn start(&self) -> DailyMarketState {
        DailyMarketState {
            cursor: self
                .schedule
                .start_cursor(self.security_start0 * self.trade_days),
            emitted: 0,
        }
    }

    fn has_more(&self, state: &DailyMarketState) -> bool {
        state.emitted < self.total_rows()
    }

    fn step(&self, state: DailyMarketState) -> (DailyMarketState, DailyMarketRow) {
        assert!(self.has_more(&state), "daily market generator exhausted");
        let mut cursor = state.cursor;
        self.schedule.reseed_at_boundary(&mut cursor);
        let security_ordinal0 = cursor.ordinal / self.trade_days;
        let day_index = cursor.ordinal % self.trade_days;
        let seq = &mut cursor.seq;

        let close = price::price(security_ordinal0, day_index * DAILY_SAMPLE_STRIDE_SECS);
        let volume = seq.int64_range(MIN_DAILY_VOLUME, MAX_DAILY_VOLUME);
        let high_spread = seq.double_incr_range(0.0, MAX_INTRADAY_SPREAD_DOLLARS, 0.01);
        let low_spread = seq.double_incr_range(0.0, MAX_INTRADAY_SPREAD_DOLLARS, 0.01);

        let row = DailyMarketRow {
            date: trading_date(day_index),
            symbol: security_symbol(self.bundle, security_ordinal0),
            close,
            high: Money::from_dollars(close.dollars() + high_spread),
            low: Money::from_dollars(close.dollars() - low_spread),
            volume,
        };

        cursor.ordinal += 1;
        (
            DailyMarketState {
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
    fn test_one_row_per_security_per_day() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 5);
        let generator = DailyMarketGenerator::new(&params, &bundle).unwrap();
        let rows: Vec<_> = generator.rows().collect();
        assert_eq!(rows.len(), 685 * 5);
        // Security-major order: the first five rows share the first symbol.
        let first_symbol = security_symbol(&bundle, 0);
        for row in &rows[..5] {
            assert_eq!(row.symbol, first_symbol);
        }
        assert_eq!(rows[5].symbol, security_symbol(&bundle, 1));
    }

    #[test]
    fn test_trading_dates_skip_weekends() {
        for day_index in 0..60u64 {
            let date = trading_date(day_index);
            assert!(!date.is_weekend(), "day {day_index} landed on {date}");
        }
        assert_eq!(trading_date(0), Date::from_ymd(2000, 1, 3));
        assert_eq!(trading_date(5), Date::from_ymd(2000, 1, 10));
    }

    #[test]
    fn test_closes_vary_across_days() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 20);
        let generator = DailyMarketGenerator::new(&params, &bundle).unwrap();
        let closes: Vec<i64> = generator
            .rows()
            .take(20)
            .map(|r| r.close.cents())
            .collect();
        let mut distinct = closes.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(
            distinct.len() > 10,
            "daily closes collapsed to {} values",
            distinct.len()
        );
    }

    #[test]
    fn test_high_and_low_bracket_the_close() {
        let bundle = ReferenceBundle::builtin();
        let params = GenerationParams::whole_run(1000, 5);
        for row in DailyMarketGenerator::new(&params, &bundle).unwrap().rows() {
            assert!(row.high >= row.close);
            assert!(row.low <= row.close);
            assert!((MIN_DAILY_VOLUME..=MAX_DAILY_VOLUME).contains(&row.volume));
        }
    }
}
