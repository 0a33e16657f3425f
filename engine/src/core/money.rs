//! Money values
//!
//! CRITICAL: All money values are i64 (cents). Draws produce decimal
//! dollars; conversion to cents rounds HALF_UP (half away from zero), and
//! display always carries two decimals and never renders `-0.00`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Money amount in cents
///
/// # Example
/// ```
/// use market_datagen_core_rs::Money;
///
/// assert_eq!(Money::from_dollars(9.995).to_string(), "10.00");
/// assert_eq!(Money::from_dollars(-0.001).to_string(), "0.00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(0);

    /// Create from a raw cent count.
    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Create from decimal dollars, rounding HALF_UP to cents.
    ///
    /// HALF_UP rounds half away from zero, matching the benchmark's row
    /// formatting rules. The small epsilon absorbs binary representation
    /// error in values like 9.995 that sit just under the half-cent line.
    pub fn from_dollars(dollars: f64) -> Self {
        let cents = (dollars.abs() * 100.0 + 0.5 + 1e-9).floor() as i64;
        Money(if dollars < 0.0 { -cents } else { cents })
    }

    /// The raw cent count.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// The amount as decimal dollars.
    pub fn dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_up_rounding() {
        assert_eq!(Money::from_dollars(9.995).cents(), 1000);
        assert_eq!(Money::from_dollars(9.994).cents(), 999);
        assert_eq!(Money::from_dollars(2.675).cents(), 268);
        assert_eq!(Money::from_dollars(-9.995).cents(), -1000);
    }

    #[test]
    fn test_never_negative_zero() {
        assert_eq!(Money::from_dollars(-0.001).to_string(), "0.00");
        assert_eq!(Money::from_dollars(-0.004).cents(), 0);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Money::from_cents(1).to_string(), "0.01");
        assert_eq!(Money::from_cents(2550).to_string(), "25.50");
        assert_eq!(Money::from_cents(-125).to_string(), "-1.25");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }
}
