//! Watch list generator
//!
//! One list per customer, sized by tier, emitted as a unit of the list row
//! plus its items. The draw count is fixed by the drawn size even when a
//! duplicate security comes up, so the sequence position never depends on
//! which securities were picked; duplicates are dropped from the emitted
//! items in draw order. Draw order per customer: item count, then one
//! security pick per item.

use serde::{Deserialize, Serialize};

use crate::generators::{Cursor, ReseedSchedule, TableGenerator};
use crate::models::{WatchItemRow, WatchListRow, WatchListUnit};
use crate::reference::ReferenceBundle;
use crate::scaling::ids::{customer_id, watch_list_id};
use crate::scaling::{ConfigError, GenerationParams, Tier, LOAD_UNIT_SIZE};

use super::security::security_symbol;

/// Base seed of the watch-list table sequence.
pub const WATCH_LIST_BASE_SEED: u64 = 60_760_390;

/// Per-customer draw budget; the widest tier consumes 31 draws.
pub const WATCH_LIST_CUSTOMER_RNG_SKIP: u64 = 64;

pub struct WatchListGenerator<'a> {
    bundle: &'a ReferenceBundle,
    schedule: ReseedSchedule,
    start_ordinal: u64,
    unit_count: u64,
    security_total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchListState {
    pub cursor: Cursor,
    pub emitted: u64,
}

impl<'a> WatchListGenerator<'a> {
    pub fn new(
        params: &GenerationParams,
        bundle: &'a ReferenceBundle,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            bundle,
            schedule: ReseedSchedule::new(
                WATCH_LIST_BASE_SEED,
                LOAD_UNIT_SIZE,
                WATCH_LIST_CUSTOMER_RNG_SKIP,
            ),
            start_ordinal: params.start_customer,
            unit_count: params.customer_count,
            security_total: params.security_total(),
        })
    }
}

impl TableGenerator for WatchListGenerator<'_> {
    type State = WatchListState;
    type Row = WatchListUnit;

    fn start(&self) -> WatchListState {
        WatchListState {
            cursor: self.schedule.start_cursor(self.start_ordinal - 1),
            emitted: 0,
        }
    }

    fn has_more(&self, state: &WatchListState) -> bool {
        state.emitted < self.unit_count
    }

    fn step(&self, state: WatchListState) -> (WatchListState, WatchListUnit) {
        assert!(self.has_more(&state), "watch list generator exhausted");
        let mut cursor = state.cursor;
        self.schedule.reseed_at_boundary(&mut cursor);
        let ordinal = cursor.ordinal + 1;
        let seq = &mut cursor.seq;

        let (min_items, max_items) = Tier::of_ordinal(ordinal).holding_count_range();
        let drawn = seq.int_range(min_items, max_items) as usize;

        let wl_id = watch_list_id(ordinal);
        let mut picked: Vec<u64> = Vec::with_capacity(drawn);
        for _ in 0..drawn {
            let security_ordinal0 =
                seq.int64_range(0, self.security_total as i64 - 1) as u64;
            if !picked.contains(&security_ordinal0) {
                picked.push(security_ordinal0);
            }
        }
        let items = picked
            .into_iter()
            .map(|security_ordinal0| WatchItemRow {
                wl_id,
                symbol: security_symbol(self.bundle, security_ordinal0),
            })
            .collect();

        cursor.ordinal += 1;
        (
            WatchListState {
                cursor,
                emitted: state.emitted + 1,
            },
            WatchListUnit {
                list: WatchListRow {
                    wl_id,
                    c_id: customer_id(ordinal),
                },
                items,
            },
        )
    }
}
