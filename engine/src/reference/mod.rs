//! Reference data accessors
//!
//! Immutable lookup structures over the static reference lists (names,
//! streets, zip codes, tax tables, vocabulary). The whole bundle is fully
//! constructed before any generator runs and then only read, so generators
//! share it by plain reference with no synchronization and no lazy
//! initialization.
//!
//! Three access patterns:
//! - positional: `get(index)` / `len()` over a plain list
//! - weighted: one ranged draw into a precomputed expansion list
//!   reproduces the categorical distribution without per-draw weight walks
//! - bucketed: contiguous groups under a 1-based integer key
//!
//! Out-of-range access anywhere here is a defect in the caller's scaling
//! math, never a recoverable condition.

mod data;

use crate::rng::Sequence;
use serde::{Deserialize, Serialize};

/// Zip code record: postal code plus the town/division it places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRecord {
    pub code: String,
    pub town: String,
    pub division: String,
    /// 1-based division code; keys the division tax-rate buckets.
    pub division_code: u32,
    /// 1-based country code; keys the country tax-rate buckets.
    pub country_code: u32,
}

/// Industry record with its sector name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryRecord {
    pub id: String,
    pub name: String,
    pub sector: String,
}

/// Exchange record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub id: String,
    pub name: String,
}

/// One tax rate: code, description, and the rate itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRateRecord {
    pub code: String,
    pub name: String,
    pub rate: f64,
}

/// Weighted accessor
///
/// Stores the unique records plus an expansion list mapping each expanded
/// index back to a record, so a weighted draw costs exactly one ranged
/// draw.
///
/// # Example
/// ```
/// use market_datagen_core_rs::reference::WeightedList;
/// use market_datagen_core_rs::Sequence;
///
/// let list = WeightedList::new(vec![("common", 9), ("rare", 1)]);
/// let mut seq = Sequence::new(42);
/// let pick = list.random(&mut seq);
/// assert!(*pick == "common" || *pick == "rare");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedList<T> {
    records: Vec<T>,
    expansion: Vec<u32>,
}

impl<T> WeightedList<T> {
    /// Build from `(record, weight)` pairs.
    ///
    /// # Panics
    /// Panics if the total weight is zero.
    pub fn new(weighted: Vec<(T, u32)>) -> Self {
        let mut records = Vec::with_capacity(weighted.len());
        let mut expansion = Vec::new();
        for (index, (record, weight)) in weighted.into_iter().enumerate() {
            records.push(record);
            for _ in 0..weight {
                expansion.push(index as u32);
            }
        }
        assert!(!expansion.is_empty(), "weighted list has zero total weight");
        Self { records, expansion }
    }

    /// Number of unique records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total expanded length (sum of weights).
    pub fn weighted_len(&self) -> usize {
        self.expansion.len()
    }

    /// Record by unique index.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &T {
        &self.records[index]
    }

    /// Unique-record index of a weighted draw. Exactly one ranged draw.
    pub fn random_index(&self, seq: &mut Sequence) -> usize {
        let expanded = seq.int64_range(0, self.expansion.len() as i64 - 1) as usize;
        self.expansion[expanded] as usize
    }

    /// Weighted random record. Exactly one ranged draw.
    pub fn random(&self, seq: &mut Sequence) -> &T {
        let index = self.random_index(seq);
        &self.records[index]
    }
}

/// Bucketed accessor: contiguous record groups under a 1-based key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketedList<T> {
    buckets: Vec<Vec<T>>,
}

impl<T> BucketedList<T> {
    pub fn new(buckets: Vec<Vec<T>>) -> Self {
        Self { buckets }
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total records across all buckets.
    pub fn total_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Records under the 1-based `key`, in load order.
    ///
    /// # Panics
    /// Panics if `key` is zero or past the last bucket.
    pub fn bucket(&self, key: usize) -> &[T] {
        assert!(
            key >= 1 && key <= self.buckets.len(),
            "bucket key {key} out of range 1..={}",
            self.buckets.len()
        );
        &self.buckets[key - 1]
    }

    /// Uniform random record from the 1-based `key` bucket. One draw.
    pub fn random_from_bucket(&self, seq: &mut Sequence, key: usize) -> &T {
        let bucket = self.bucket(key);
        assert!(!bucket.is_empty(), "bucket {key} is empty");
        &bucket[seq.int64_range(0, bucket.len() as i64 - 1) as usize]
    }
}

/// The full reference data set the generators consume
///
/// Built once before generation starts; read-only afterwards. Loading the
/// benchmark's flat files into this shape is an external concern;
/// [`ReferenceBundle::builtin`] ships a compact embedded data set whose
/// deliberately small lists exercise the wraparound suffix rules.
#[derive(Debug, Clone)]
pub struct ReferenceBundle {
    pub female_first_names: WeightedList<String>,
    pub male_first_names: WeightedList<String>,
    pub last_names: WeightedList<String>,
    pub streets: Vec<String>,
    pub street_suffixes: Vec<String>,
    pub zips: Vec<ZipRecord>,
    pub company_names: Vec<String>,
    pub symbols: Vec<String>,
    pub sp_ratings: WeightedList<String>,
    pub security_issues: WeightedList<String>,
    pub industries: Vec<IndustryRecord>,
    pub exchanges: Vec<ExchangeRecord>,
    pub status_types: Vec<String>,
    pub email_domains: Vec<String>,
    pub area_codes: Vec<String>,
    pub news_words: WeightedList<String>,
    pub tax_rates_country: BucketedList<TaxRateRecord>,
    pub tax_rates_division: BucketedList<TaxRateRecord>,
}

impl ReferenceBundle {
    /// The embedded reference data set.
    pub fn builtin() -> Self {
        data::builtin()
    }
}
