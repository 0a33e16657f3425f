//! Broker row

use crate::core::Money;
use serde::{Deserialize, Serialize};

/// One row of the broker table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerRow {
    /// Broker identifier
    pub b_id: u64,

    /// Status code
    pub st_id: String,

    /// Broker name
    pub name: String,

    /// Lifetime trade count carried into the initial population
    pub num_trades: i64,

    /// Accumulated commission (i64 cents)
    pub commission: Money,
}
