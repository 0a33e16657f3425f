//! Tax rate table generator
//!
//! Emits the bucketed tax reference data verbatim: every country bucket in
//! key order, then every division bucket. Consumes no randomness, so it
//! needs no reseed schedule; it exists as a generator so a writer can
//! drive every table through one contract.

use serde::{Deserialize, Serialize};

use crate::generators::TableGenerator;
use crate::models::TaxRateRow;
use crate::reference::ReferenceBundle;

pub struct TaxRateGenerator<'a> {
    bundle: &'a ReferenceBundle,
    total: u64,
}

/// Plain row index; tax rates are not partitioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRateState {
    pub emitted: u64,
}

impl<'a> TaxRateGenerator<'a> {
    pub fn new(bundle: &'a ReferenceBundle) -> Self {
        let total = (bundle.tax_rates_country.total_len()
            + bundle.tax_rates_division.total_len()) as u64;
        Self { bundle, total }
    }

    fn record_at(&self, index: u64) -> TaxRateRow {
        let country_total = self.bundle.tax_rates_country.total_len() as u64;
        let (list, mut offset) = if index < country_total {
            (&self.bundle.tax_rates_country, index)
        } else {
            (&self.bundle.tax_rates_division, index - country_total)
        };
        for key in 1..=list.bucket_count() {
            let bucket = list.bucket(key);
            if (offset as usize) < bucket.len() {
                let record = &bucket[offset as usize];
                return TaxRateRow {
                    tx_id: record.code.clone(),
                    name: record.name.clone(),
                    rate: record.rate,
                };
            }
            offset -= bucket.len() as u64;
        }
        panic!("tax rate index {index} past the reference data");
    }
}

impl TableGenerator for TaxRateGenerator<'_> {
    type State = TaxRateState;
    type Row = TaxRateRow;

    fn start(&self) -> TaxRateState {
        TaxRateState { emitted: 0 }
    }

    fn has_more(&self, state: &TaxRateState) -> bool {
        state.emitted < self.total
    }

    fn step(&self, state: TaxRateState) -> (TaxRateState, TaxRateRow) {
        assert!(self.has_more(&state), "tax rate generator exhausted");
        let row = self.record_at(state.emitted);
        (
            TaxRateState {
                emitted: state.emitted + 1,
            },
            row,
        )
    }
}
