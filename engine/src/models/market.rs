//! Market-side rows: securities and daily market history

use crate::core::{Date, Money};
use serde::{Deserialize, Serialize};

/// One row of the security table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRow {
    /// Trading symbol; wraps the base symbol file with a `-N` suffix
    pub symbol: String,

    /// Issue class (common or a preferred series)
    pub issue: String,

    /// Status code
    pub st_id: String,

    /// Security display name
    pub name: String,

    /// Listing exchange
    pub ex_id: String,

    /// Issuing company
    pub co_id: u64,

    /// Shares outstanding
    pub num_outstanding: i64,

    /// First trade date
    pub start_date: Date,

    /// Listing date on the current exchange
    pub exch_date: Date,

    /// Price/earnings ratio
    pub pe: f64,

    pub week52_high: Money,
    pub week52_high_date: Date,
    pub week52_low: Money,
    pub week52_low_date: Date,

    /// Annual dividend per share (i64 cents)
    pub dividend: Money,

    /// Dividend yield, percent
    pub yield_pct: f64,
}

/// One row of the daily-market history table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMarketRow {
    pub date: Date,
    pub symbol: String,
    pub close: Money,
    pub high: Money,
    pub low: Money,
    pub volume: i64,
}
