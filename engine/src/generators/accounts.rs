//! Customer account and permission generator
//!
//! Emits one logical unit per customer: the customer's accounts plus any
//! permission rows granting other customers access. Draw order per
//! customer: account count, then per account the broker, tax status,
//! opening balance, permission roll, and one grantee draw per granted
//! permission. Grantee names and tax ids come from the person
//! sub-sequences keyed by the grantee's ordinal, which keeps the
//! account sequence itself untouched by the lookup.

use serde::{Deserialize, Serialize};

use crate::core::Money;
use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::{AccountPermissionRow, AccountRow, CustomerAccountsUnit};
use crate::person::{self, PersonCache};
use crate::reference::ReferenceBundle;
use crate::scaling::ids::{account_id, broker_id, customer_id};
use crate::scaling::{
    ConfigError, GenerationParams, Tier, LOAD_UNIT_SIZE, MAX_ACCOUNTS_PER_CUSTOMER,
};

/// Base seed of the account table sequence.
pub const ACCOUNTS_BASE_SEED: u64 = 70_466_210;

/// Draw budget per account row. The benchmark text publishes 7 for this
/// stride, but deployed data sets were built with 10; changing it now
/// would silently shift every account past the first load unit, so 10 is
/// kept as the compatibility value.
pub const ACCOUNT_ROW_RNG_SKIP: u64 = 10;

/// Draw budget per customer: up to `MAX_ACCOUNTS_PER_CUSTOMER` account
/// rows at `ACCOUNT_ROW_RNG_SKIP` draws each.
pub const ACCOUNTS_CUSTOMER_RNG_SKIP: u64 = MAX_ACCOUNTS_PER_CUSTOMER * ACCOUNT_ROW_RNG_SKIP;

/// Permission roll bands out of 100: 60% of accounts grant none, 38% one,
/// 2% two.
const ONE_PERMISSION_THRESHOLD: i32 = 60;
const TWO_PERMISSION_THRESHOLD: i32 = 98;

/// Access levels assigned to the first and second grantee of an account.
const GRANTEE_ACLS: [&str; 2] = ["0001", "0010"];

const MIN_BALANCE_DOLLARS: f64 = -20_000.0;
const MAX_BALANCE_DOLLARS: f64 = 50_000.0;

pub struct CustomerAccountsGenerator<'a> {
    bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    start_ordinal: u64,
    unit_count: u64,
    total_customers: u64,
    broker_total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAccountsState {
    pub cursor: Cursor,
    pub emitted: u64,
    cache: PersonCache,
}

impl<'a> CustomerAccountsGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            bundle,
            schedule: ReseedSchedule::new(
                ACCOUNTS_BASE_SEED,
                LOAD_UNIT_SIZE,
                ACCOUNTS_CUSTOMER_RNG_SKIP,
            ),
            start_ordinal: params.start_customer,
            unit_count: params.customer_count,
            total_customers: params.total_customers,
            broker_total: params.broker_total(),
        })
    }
}

impl TableGenerator for CustomerAccountsGenerator<'_> {
    type State = CustomerAccountsState;
    type Row = CustomerAccountsUnit;

    fn start(&self) -> CustomerAccountsState {
        CustomerAccountsState {
            cursor: self.schedule.start_cursor(self.start_ordinal - 1),
            emitted: 0,
            cache: PersonCache::new(),
        }
    }

    fn has_more(&self, state: &CustomerAccountsState) -> bool {
        state.emitted < self.unit_count
    }

    fn step(&self, state: CustomerAccountsState) -> (CustomerAccountsState, CustomerAccountsUnit) {
        assert!(self.has_more(&state), "account generator exhausted");
        let mut cursor = state.cursor;
        let mut cache = state.cache;
        self.schedule.reseed_at_boundary(&mut cursor);
        let owner_ordinal = cursor.ordinal + 1;
        let owner_id = customer_id(owner_ordinal);
        let (_, owner_first, owner_last) = cache.name_of(self.bundle, owner_ordinal);
        let seq = &mut cursor.seq;

        let (min_accounts, max_accounts) =
            Tier::of_ordinal(owner_ordinal).account_count_range();
        let account_count = seq.int_range(min_accounts, max_accounts) as u64;

        let mut accounts = Vec::with_capacity(account_count as usize);
        let mut permissions = Vec::new();
        for index in 0..account_count {
            let ca_id = account_id(owner_ordinal, index);
            let broker_ordinal = seq.int64_range(1, self.broker_total as i64) as u64;
            let tax_status = seq.int_range(0, 2) as u8;
            let balance = Money::from_dollars(seq.double_incr_range(
                MIN_BALANCE_DOLLARS,
                MAX_BALANCE_DOLLARS,
                0.01,
            ));

            let roll = seq.int_range(1, 100);
            let permission_count = if roll <= ONE_PERMISSION_THRESHOLD {
                0
            } else if roll <= TWO_PERMISSION_THRESHOLD {
                1
            } else {
                2
            };
            for acl in GRANTEE_ACLS.iter().take(permission_count) {
                let grantee_ordinal = seq.int64_range_excluding(
                    1,
                    self.total_customers as i64,
                    owner_ordinal as i64,
                ) as u64;
                permissions.push(AccountPermissionRow {
                    ca_id,
                    acl: (*acl).to_string(),
                    tax_id: person::tax_id(grantee_ordinal),
                    last_name: person::last_name(self.bundle, grantee_ordinal),
                    first_name: person::first_name(self.bundle, grantee_ordinal),
                });
            }

            accounts.push(AccountRow {
                ca_id,
                b_id: broker_id(broker_ordinal),
                c_id: owner_id,
                name: format!("{owner_first} {owner_last} #{}", index + 1),
                tax_status,
                balance,
            });
        }

        cursor.ordinal += 1;
        (
            CustomerAccountsState {
                cursor,
                emitted: state.emitted + 1,
                cache,
            },
            CustomerAccountsUnit {
                accounts,
                permissions,
            },
        )
    }
}
