//! Customer-side rows: customers, their accounts and permissions, and
//! their watch lists
//!
//! Each customer's attributes derive from its ordinal through the person
//! sub-sequences, so any generator can reproduce them without replaying
//! the customer table.

use crate::core::{Date, Money};
use serde::{Deserialize, Serialize};

/// One row of the customer table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRow {
    /// Externally visible customer identifier (permuted + shifted)
    pub c_id: u64,

    /// Tax identifier
    pub tax_id: String,

    /// Status code (always active in the initial population)
    pub st_id: String,

    /// Last name
    pub last_name: String,

    /// First name
    pub first_name: String,

    /// Middle initial, if any
    pub middle_initial: Option<char>,

    /// Gender marker: 'F' or 'M'
    pub gender: char,

    /// Customer tier, 1..=3
    pub tier: u8,

    /// Date of birth
    pub dob: Date,

    /// Home address identifier
    pub ad_id: u64,

    /// Primary phone, formatted
    pub phone_1: String,

    /// Secondary phone, formatted
    pub phone_2: String,

    /// Primary email address
    pub email_1: String,

    /// Secondary email address
    pub email_2: String,
}

/// One row of the customer-account table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRow {
    /// Account identifier
    pub ca_id: u64,

    /// Managing broker
    pub b_id: u64,

    /// Owning customer
    pub c_id: u64,

    /// Account display name
    pub name: String,

    /// Tax status: 0 none, 1 taxable, 2 deferred
    pub tax_status: u8,

    /// Opening balance (i64 cents)
    pub balance: Money,
}

/// One row of the account-permission table
///
/// Grants a customer other than the owner access to an account. The
/// grantee's name and tax id come from the person sub-sequences keyed by
/// the grantee's ordinal - a side lookup that must not disturb the
/// account generator's own sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPermissionRow {
    /// Account the permission applies to
    pub ca_id: u64,

    /// Access level granted
    pub acl: String,

    /// Grantee tax identifier
    pub tax_id: String,

    /// Grantee last name
    pub last_name: String,

    /// Grantee first name
    pub first_name: String,
}

/// Logical unit emitted per customer by the accounts generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAccountsUnit {
    pub accounts: Vec<AccountRow>,
    pub permissions: Vec<AccountPermissionRow>,
}

/// One row of the watch-list table (one list per customer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchListRow {
    /// Watch list identifier
    pub wl_id: u64,

    /// Owning customer
    pub c_id: u64,
}

/// One row of the watch-item table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchItemRow {
    /// Owning watch list
    pub wl_id: u64,

    /// Watched security symbol
    pub symbol: String,
}

/// Logical unit emitted per customer by the watch-list generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchListUnit {
    pub list: WatchListRow,
    pub items: Vec<WatchItemRow>,
}
