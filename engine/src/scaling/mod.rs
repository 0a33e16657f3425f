//! Identity and scaling math
//!
//! Pure functions mapping a customer ordinal to its permuted identifier,
//! tier, and load-unit coordinates, and mapping customer counts to the
//! scaled counts of every other entity. Nothing in this module consumes
//! randomness; everything is an exact integer computation so partitioned
//! runs agree on every derived quantity.
//!
//! # Key Principles
//!
//! 1. **Load unit**: customers come in fixed blocks of 1000; scaling
//!    constants apply per block, so scaled counts never need rounding
//! 2. **Permutation**: externally visible customer identifiers scramble the
//!    low three digits of the ordinal; the permutation is exactly
//!    invertible
//! 3. **Tiers**: the 20/60/20% tier split drives account and holding count
//!    ranges and weighted customer sampling

pub mod customer;
pub mod ids;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Customers per load unit; the unit of reseeding and scaling.
pub const LOAD_UNIT_SIZE: u64 = 1000;

/// Companies per load unit.
pub const COMPANIES_PER_UNIT: u64 = 500;

/// Securities per load unit.
pub const SECURITIES_PER_UNIT: u64 = 685;

/// Company-competitor links per load unit (3 per company).
pub const COMPETITORS_PER_UNIT: u64 = 1500;

/// Brokers per load unit (one per 100 customers).
pub const BROKERS_PER_UNIT: u64 = 10;

/// News items per company.
pub const NEWS_ITEMS_PER_COMPANY: u64 = 2;

/// Upper bound on accounts per customer; also the per-customer stride in
/// the account identifier space.
pub const MAX_ACCOUNTS_PER_CUSTOMER: u64 = 10;

/// Multiplier of the low-digit permutation. Coprime to 1000 so the map is
/// a bijection on [0, 999].
pub const PERMUTE_C1: u64 = 653;

/// Additive constant of the low-digit permutation.
pub const PERMUTE_C2: u64 = 4327;

/// Modular inverse of `PERMUTE_C1` mod 1000 (653 * 317 = 207001).
pub const PERMUTE_C1_INV: u64 = 317;

/// Load-unit index of a 1-based customer ordinal (0-based).
pub fn higher_id(ordinal: u64) -> u64 {
    assert!(ordinal >= 1, "customer ordinal is 1-based");
    (ordinal - 1) / LOAD_UNIT_SIZE
}

/// Position of a 1-based customer ordinal within its load unit, in
/// [0, 999].
pub fn lower_id(ordinal: u64) -> u64 {
    assert!(ordinal >= 1, "customer ordinal is 1-based");
    (ordinal - 1) % LOAD_UNIT_SIZE
}

/// Scramble a within-unit position into the externally visible low three
/// digits.
///
/// `(C1*low + C2*(high+1)) mod 1000`. Mixing in the load-unit index keeps
/// the scramble different from unit to unit.
pub fn permute(low: u64, high: u64) -> u64 {
    debug_assert!(low < LOAD_UNIT_SIZE);
    (PERMUTE_C1 * low + PERMUTE_C2 * (high + 1)) % 1000
}

/// Exact inverse of [`permute`] for the same `high`.
pub fn inverse_permute(low: u64, high: u64) -> u64 {
    debug_assert!(low < LOAD_UNIT_SIZE);
    // Normalize the subtraction into [0, 999] before multiplying by the
    // inverse; u64 arithmetic must not wrap below zero.
    let offset = (PERMUTE_C2 * (high + 1)) % 1000;
    (PERMUTE_C1_INV * ((low + 1000 - offset) % 1000)) % 1000
}

/// Customer tier
///
/// Fixed 20/60/20% population split by within-unit position. The tier
/// drives account count ranges, holding count ranges, and the weighting of
/// random customer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    /// Tier for an inverse-permuted within-unit position in [0, 999].
    pub fn for_position(position: u64) -> Tier {
        assert!(position < LOAD_UNIT_SIZE, "position {position} out of unit");
        if position < 200 {
            Tier::One
        } else if position < 800 {
            Tier::Two
        } else {
            Tier::Three
        }
    }

    /// Tier of a 1-based customer ordinal.
    pub fn of_ordinal(ordinal: u64) -> Tier {
        Tier::for_position(lower_id(ordinal))
    }

    /// Tier of an externally visible customer identifier.
    pub fn of_customer_id(customer_id: u64) -> Tier {
        Tier::of_ordinal(ids::customer_ordinal(customer_id))
    }

    /// Tier number, 1..=3.
    pub fn number(&self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
        }
    }

    /// Inclusive account count range for customers of this tier.
    pub fn account_count_range(&self) -> (i32, i32) {
        match self {
            Tier::One => (1, 4),
            Tier::Two => (2, 8),
            Tier::Three => (5, 10),
        }
    }

    /// Inclusive security-holding count range for customers of this tier;
    /// also sizes watch lists.
    pub fn holding_count_range(&self) -> (i32, i32) {
        match self {
            Tier::One => (5, 10),
            Tier::Two => (10, 20),
            Tier::Three => (15, 30),
        }
    }
}

/// Scaled entity count for a unit-aligned customer count.
///
/// Exact by construction: the customer count is validated to be a multiple
/// of the load unit, so the division never truncates information.
///
/// # Example
/// ```
/// use market_datagen_core_rs::scaling::{scaled_count, COMPANIES_PER_UNIT, SECURITIES_PER_UNIT};
///
/// assert_eq!(scaled_count(5000, COMPANIES_PER_UNIT), 2500);
/// assert_eq!(scaled_count(5000, SECURITIES_PER_UNIT), 3425);
/// ```
pub fn scaled_count(customer_count: u64, per_unit: u64) -> u64 {
    customer_count / LOAD_UNIT_SIZE * per_unit
}

/// Number of rows of an entity that precede a partition starting at the
/// given 1-based customer ordinal.
pub fn start_offset(start_from_customer: u64, per_unit: u64) -> u64 {
    assert!(start_from_customer >= 1, "customer ordinal is 1-based");
    (start_from_customer - 1) / LOAD_UNIT_SIZE * per_unit
}

/// Index suffix for reference-file wraparound: entity `index` (0-based)
/// drawn from a file of `file_size` records reuses record
/// `index % file_size` and carries suffix number `index / file_size`
/// (0 = no suffix).
pub fn wraparound_suffix(index: u64, file_size: u64) -> u64 {
    assert!(file_size > 0, "reference file is empty");
    index / file_size
}

/// Configuration errors
///
/// Detected before any row is generated; always fatal. The caller (an
/// external CLI layer) reports the message and stops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("customer count {value} must be a positive multiple of {LOAD_UNIT_SIZE}")]
    CustomerCountNotUnitAligned { value: u64 },

    #[error("total customer count {value} must be a positive multiple of {LOAD_UNIT_SIZE}")]
    TotalCustomersNotUnitAligned { value: u64 },

    #[error("starting customer {value} must satisfy start mod {LOAD_UNIT_SIZE} == 1")]
    StartNotUnitAligned { value: u64 },

    #[error(
        "partition [{start}..{end}] does not fit in total customer count {total}"
    )]
    PartitionOutOfRange { start: u64, end: u64, total: u64 },

    #[error("scale factor {value} must be strictly positive")]
    NonPositiveScaleFactor { value: u64 },

    #[error("initial trade day count {value} must be strictly positive")]
    NonPositiveTradeDays { value: u64 },
}

/// Generation parameters for one partition
///
/// Validated before any generator is constructed. `customer_count` and
/// `start_customer` bound this partition; `total_customers` is the size of
/// the whole data set and fixes every cross-entity count and identifier
/// range, so partitions agree on foreign keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Customers generated by this partition.
    pub customer_count: u64,
    /// First 1-based customer ordinal of this partition.
    pub start_customer: u64,
    /// Customers in the complete data set across all partitions.
    pub total_customers: u64,
    /// Benchmark scale factor (customers per configured tpsE).
    pub scale_factor: u64,
    /// Trading days of daily-market history to pre-compute.
    pub initial_trade_days: u64,
}

impl GenerationParams {
    /// Parameters for a whole single-partition run.
    pub fn whole_run(customer_count: u64, initial_trade_days: u64) -> Self {
        Self {
            customer_count,
            start_customer: 1,
            total_customers: customer_count,
            scale_factor: 500,
            initial_trade_days,
        }
    }

    /// Validate every parameter rule; any violation is fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.customer_count == 0 || self.customer_count % LOAD_UNIT_SIZE != 0 {
            return Err(ConfigError::CustomerCountNotUnitAligned {
                value: self.customer_count,
            });
        }
        if self.total_customers == 0 || self.total_customers % LOAD_UNIT_SIZE != 0 {
            return Err(ConfigError::TotalCustomersNotUnitAligned {
                value: self.total_customers,
            });
        }
        if self.start_customer % LOAD_UNIT_SIZE != 1 {
            return Err(ConfigError::StartNotUnitAligned {
                value: self.start_customer,
            });
        }
        let end = self.start_customer - 1 + self.customer_count;
        if end > self.total_customers {
            return Err(ConfigError::PartitionOutOfRange {
                start: self.start_customer,
                end,
                total: self.total_customers,
            });
        }
        if self.scale_factor == 0 {
            return Err(ConfigError::NonPositiveScaleFactor {
                value: self.scale_factor,
            });
        }
        if self.initial_trade_days == 0 {
            return Err(ConfigError::NonPositiveTradeDays {
                value: self.initial_trade_days,
            });
        }
        Ok(())
    }

    /// Last 1-based customer ordinal of this partition.
    pub fn end_customer(&self) -> u64 {
        self.start_customer - 1 + self.customer_count
    }

    /// Companies in the complete data set.
    pub fn company_total(&self) -> u64 {
        scaled_count(self.total_customers, COMPANIES_PER_UNIT)
    }

    /// Securities in the complete data set.
    pub fn security_total(&self) -> u64 {
        scaled_count(self.total_customers, SECURITIES_PER_UNIT)
    }

    /// Brokers in the complete data set.
    pub fn broker_total(&self) -> u64 {
        scaled_count(self.total_customers, BROKERS_PER_UNIT)
    }
}
