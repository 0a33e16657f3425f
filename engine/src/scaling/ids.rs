//! Identifier composition
//!
//! Every generated identifier is `ordinal + fixed shift`, where the shift
//! separates namespaces that share an identifier space. Customers, brokers
//! and accounts are cross-referenced by other tables, so each gets its own
//! region; table-scoped identifiers (addresses, companies, news items)
//! share the base shift because nothing joins them against each other.
//!
//! All functions here are pure: a partition computes any foreign key from
//! ordinals and configured totals alone.

use super::{higher_id, inverse_permute, lower_id, permute, MAX_ACCOUNTS_PER_CUSTOMER};

/// Base identifier shift shared by table-scoped namespaces.
pub const IDENT_SHIFT: u64 = 4_300_000_000;

/// Customer identifiers start here.
pub const CUSTOMER_ID_SHIFT: u64 = IDENT_SHIFT;

/// Broker identifiers sit in the 10M-wide region below the customers.
pub const BROKER_ID_SHIFT: u64 = 4_290_000_000;

/// Account identifiers; the region is `MAX_ACCOUNTS_PER_CUSTOMER` wide per
/// customer.
pub const ACCOUNT_ID_SHIFT: u64 = 43_000_000_000;

/// Address identifiers (table-scoped).
pub const ADDRESS_ID_SHIFT: u64 = IDENT_SHIFT;

/// Company identifiers (table-scoped).
pub const COMPANY_ID_SHIFT: u64 = IDENT_SHIFT;

/// News item identifiers (table-scoped).
pub const NEWS_ITEM_ID_SHIFT: u64 = IDENT_SHIFT;

/// Watch list identifiers (table-scoped, one per customer).
pub const WATCH_LIST_ID_SHIFT: u64 = IDENT_SHIFT;

/// Externally visible customer identifier for a 1-based ordinal.
///
/// The low three digits are permuted so sequential ordinals do not map to
/// sequential identifiers.
pub fn customer_id(ordinal: u64) -> u64 {
    let high = higher_id(ordinal);
    CUSTOMER_ID_SHIFT + high * 1000 + permute(lower_id(ordinal), high) + 1
}

/// Recover the 1-based customer ordinal from an identifier.
pub fn customer_ordinal(customer_id: u64) -> u64 {
    assert!(
        customer_id > CUSTOMER_ID_SHIFT,
        "customer id {customer_id} below identifier space"
    );
    let t = customer_id - CUSTOMER_ID_SHIFT - 1;
    let high = t / 1000;
    high * 1000 + inverse_permute(t % 1000, high) + 1
}

/// Account identifier for the `index`-th (0-based) account of a customer.
pub fn account_id(customer_ordinal: u64, index: u64) -> u64 {
    assert!(
        index < MAX_ACCOUNTS_PER_CUSTOMER,
        "account index {index} exceeds per-customer stride"
    );
    ACCOUNT_ID_SHIFT + (customer_ordinal - 1) * MAX_ACCOUNTS_PER_CUSTOMER + index + 1
}

/// Broker identifier for a 1-based broker ordinal.
pub fn broker_id(ordinal: u64) -> u64 {
    BROKER_ID_SHIFT + ordinal
}

/// Company identifier for a 1-based company ordinal.
pub fn company_id(ordinal: u64) -> u64 {
    COMPANY_ID_SHIFT + ordinal
}

/// Address identifier for a 1-based address ordinal.
pub fn address_id(ordinal: u64) -> u64 {
    ADDRESS_ID_SHIFT + ordinal
}

/// Address ordinal owned by a company. Company addresses fill the front of
/// the address table.
pub fn company_address_ordinal(company_ordinal: u64) -> u64 {
    company_ordinal
}

/// Address ordinal owned by a customer, after all company addresses.
pub fn customer_address_ordinal(customer_ordinal: u64, company_total: u64) -> u64 {
    company_total + customer_ordinal
}

/// News item identifier for a 1-based item ordinal.
pub fn news_item_id(ordinal: u64) -> u64 {
    NEWS_ITEM_ID_SHIFT + ordinal
}

/// Watch list identifier for the owning customer's ordinal.
pub fn watch_list_id(customer_ordinal: u64) -> u64 {
    WATCH_LIST_ID_SHIFT + customer_ordinal
}
