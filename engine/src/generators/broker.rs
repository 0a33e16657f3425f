//! Broker table generator
//!
//! One broker per hundred customers. Brokers are not customers, so their
//! names come straight off the weighted name lists through the broker
//! sequence rather than the person sub-sequences. Draw order per row:
//! gender gate, first name, last name, carried trade count, carried
//! commission.

use serde::{Deserialize, Serialize};

use crate::core::Money;
use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::BrokerRow;
use crate::reference::ReferenceBundle;
use crate::scaling::ids::broker_id;
use crate::scaling::{
    scaled_count, start_offset, ConfigError, GenerationParams, BROKERS_PER_UNIT,
};

/// Base seed of the broker table sequence.
pub const BROKER_BASE_SEED: u64 = 55_059_580;

/// Per-row draw budget; rows consume 5.
pub const BROKER_ROW_RNG_SKIP: u64 = 10;

const FEMALE_PERCENT: i32 = 49;
const BROKER_STATUS: &str = "ACTV";

const MIN_INITIAL_TRADES: i64 = 10_000;
const MAX_INITIAL_TRADES: i64 = 1_000_000;
const MIN_INITIAL_COMMISSION_DOLLARS: f64 = 10_000.0;
const MAX_INITIAL_COMMISSION_DOLLARS: f64 = 100_000.0;

pub struct BrokerGenerator<'a> {
    bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    start_ordinal0: u64,
    row_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerState {
    pub cursor: Cursor,
    pub emitted: u64,
}

impl<'a> BrokerGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            bundle,
            schedule: ReseedSchedule::new(
                BROKER_BASE_SEED,
                BROKERS_PER_UNIT,
                BROKER_ROW_RNG_SKIP,
            ),
            start_ordinal0: start_offset(params.start_customer, BROKERS_PER_UNIT),
            row_count: scaled_count(params.customer_count, BROKERS_PER_UNIT),
        })
    }
}

impl TableGenerator for BrokerGenerator<'_> {
    type State = BrokerState;
    type Row = BrokerRow;

    fn start(&self) -> BrokerState {
        BrokerState {
            cursor: self.schedule.start_cursor(self.start_ordinal0),
            emitted: 0,
        }
    }

    fn has_more(&self, state: &BrokerState) -> bool {
        state.emitted < self.row_count
    }

    fn step(&self, state: BrokerState) -> (BrokerState, BrokerRow) {
        assert!(self.has_more(&state), "broker generator exhausted");
        let mut cursor = state.cursor;
        self.schedule.reseed_at_boundary(&mut cursor);
        let seq = &mut cursor.seq;

        let first_list = if seq.percent(FEMALE_PERCENT) {
            &self.bundle.female_first_names
        } else {
            &self.bundle.male_first_names
        };
        let first = first_list.random(seq).clone();
        let last = self.bundle.last_names.random(seq).clone();
        let num_trades = seq.int64_range(MIN_INITIAL_TRADES, MAX_INITIAL_TRADES);
        let commission = Money::from_dollars(seq.double_incr_range(
            MIN_INITIAL_COMMISSION_DOLLARS,
            MAX_INITIAL_COMMISSION_DOLLARS,
            0.01,
        ));

        let row = BrokerRow {
            b_id: broker_id(cursor.ordinal + 1),
            st_id: BROKER_STATUS.to_string(),
            name: format!("{first} {last}"),
            num_trades,
            commission,
        };

        cursor.ordinal += 1;
        (
            BrokerState {
                cursor,
                emitted: state.emitted + 1,
            },
            row,
        )
    }
}
