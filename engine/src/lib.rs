//! Market Datagen Core - Rust Engine
//!
//! Deterministic synthetic-data generator for a brokerage transaction
//! benchmark: the same parameters always produce the same rows, and any
//! load-unit-aligned partition of the customer range produces exactly the
//! rows the full run would, with zero coordination between partitions.
//!
//! # Architecture
//!
//! - **rng**: The 64-bit linear-congruential sequence and its draw operators
//! - **core**: Dates, timestamps, and money (i64 cents)
//! - **scaling**: Ordinal/identifier math, tiers, per-unit scaling constants
//! - **reference**: Immutable reference-data accessors (weighted, bucketed)
//! - **person**: Per-ordinal name/gender/tax-id sub-sequences
//! - **price**: The triangular-wave security price model
//! - **models**: Generated row types
//! - **generators**: One state-machine generator per output table
//! - **digest**: Row-stream digests for output comparison
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. All randomness goes through `Sequence`; side lookups use forks
//! 3. Generators reseed analytically at every load-unit boundary
//! 4. `step` is a pure transition; generators themselves never mutate

// Module declarations
pub mod core;
pub mod digest;
pub mod generators;
pub mod models;
pub mod person;
pub mod price;
pub mod reference;
pub mod rng;
pub mod scaling;

// Re-exports for convenience
pub use crate::core::{Date, Money, Timestamp};
pub use digest::RowDigest;
pub use generators::{
    AddressGenerator, BrokerGenerator, CompanyCompetitorGenerator, CompanyGenerator,
    CustomerAccountsGenerator, CustomerGenerator, DailyMarketGenerator, FinancialGenerator,
    NewsGenerator, SecurityGenerator, TableGenerator, TaxRateGenerator, WatchListGenerator,
};
pub use person::{Person, PersonCache};
pub use reference::ReferenceBundle;
pub use rng::Sequence;
pub use scaling::{ConfigError, GenerationParams, Tier};
