//! Tax rate row

use serde::{Deserialize, Serialize};

/// One row of the tax-rate table, emitted straight from the bucketed
/// reference data (country buckets first, then division buckets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRateRow {
    /// Rate code
    pub tx_id: String,

    /// Descriptive name
    pub name: String,

    /// Rate as a fraction
    pub rate: f64,
}
