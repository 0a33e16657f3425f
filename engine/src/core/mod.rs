//! Core value types shared by every generator
//!
//! - `dates`: the benchmark's day-number / millisecond-of-day time
//!   representation
//! - `money`: money as i64 cents with HALF_UP dollar conversion

pub mod dates;
pub mod money;

pub use dates::{Date, Timestamp, MSECS_PER_DAY};
pub use money::Money;
