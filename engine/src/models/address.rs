//! Address row
//!
//! One address per company followed by one per customer; the owner is
//! recoverable from the identifier alone (see `scaling::ids`).

use serde::{Deserialize, Serialize};

/// One row of the address table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRow {
    /// Address identifier
    pub ad_id: u64,

    /// Street address
    pub line1: String,

    /// Secondary line (apartment/suite); empty for most addresses
    pub line2: Option<String>,

    /// Postal code
    pub zip: String,

    /// Town placed by the postal code
    pub town: String,

    /// State/province placed by the postal code
    pub division: String,

    /// Country code (keys the country tax buckets)
    pub country_code: u32,
}
