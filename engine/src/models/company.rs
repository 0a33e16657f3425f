//! Company-side rows: companies, competitor links, quarterly financials,
//! and news items with their cross-references

use crate::core::{Date, Money, Timestamp};
use serde::{Deserialize, Serialize};

/// One row of the company table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRow {
    /// Company identifier
    pub co_id: u64,

    /// Status code
    pub st_id: String,

    /// Company name; wraps the base name file with a `#N` suffix
    pub name: String,

    /// Industry code
    pub in_id: String,

    /// S&P credit rating
    pub sp_rate: String,

    /// Chief executive's name
    pub ceo: String,

    /// Headquarters address identifier
    pub ad_id: u64,

    /// Short description
    pub desc: String,

    /// Founding date
    pub open_date: Date,
}

/// One row of the company-competitor table (three per company)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCompetitorRow {
    pub co_id: u64,
    /// Competing company
    pub competitor_co_id: u64,
    /// Industry in which they compete
    pub in_id: String,
}

/// One row of the quarterly financial table (twenty per company)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRow {
    pub co_id: u64,
    pub year: i32,
    /// Quarter 1..=4
    pub quarter: u8,
    pub quarter_start: Date,
    pub revenue: Money,
    pub net_earnings: Money,
    pub basic_eps: Money,
    pub diluted_eps: Money,
    /// Net margin, percent
    pub margin: f64,
    pub inventory: Money,
    pub assets: Money,
    pub liabilities: Money,
    pub shares_out_basic: i64,
    pub shares_out_diluted: i64,
}

/// One row of the news-item table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItemRow {
    pub ni_id: u64,
    pub headline: String,
    pub summary: String,
    /// Full item body
    pub item: String,
    /// Publication timestamp
    pub dts: Timestamp,
    pub source: String,
    /// Wire author, when attributed
    pub author: Option<String>,
}

/// One row of the news cross-reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsXRefRow {
    pub ni_id: u64,
    /// Company the item covers
    pub co_id: u64,
}

/// Logical unit emitted per news item: the item plus its cross-reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsUnit {
    pub item: NewsItemRow,
    pub xref: NewsXRefRow,
}
