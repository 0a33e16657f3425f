//! Row models for every generated table
//!
//! Plain data holders with fixed field sets. A row is created by one
//! `step()` call, handed to the external writer, and never retained.
//! Generators that emit several dependent rows per logical unit (a
//! customer's accounts plus permissions, a news item plus its
//! cross-reference, a watch list plus its items) bundle them in a unit
//! struct so the writer can flatten them in order.
//!
//! CRITICAL: All money values are i64 (cents), carried as [`crate::core::Money`].

pub mod address;
pub mod broker;
pub mod company;
pub mod customer;
pub mod market;
pub mod tax_rate;

// Re-exports
pub use address::AddressRow;
pub use broker::BrokerRow;
pub use company::{
    CompanyCompetitorRow, CompanyRow, FinancialRow, NewsItemRow, NewsUnit, NewsXRefRow,
};
pub use customer::{
    AccountPermissionRow, AccountRow, CustomerAccountsUnit, CustomerRow, WatchItemRow,
    WatchListRow, WatchListUnit,
};
pub use market::{DailyMarketRow, SecurityRow};
pub use tax_rate::TaxRateRow;
