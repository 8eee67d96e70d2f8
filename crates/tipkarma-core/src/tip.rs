//! Tip and total computation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A computed tip amount and bill total, in the bill's currency.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TipResult {
    /// Gratuity: bill × percentage / 100.
    pub tip_amount: f64,
    /// Bill plus gratuity.
    pub total_amount: f64,
}

impl TipResult {
    /// The all-zero result (nothing computed yet).
    pub const ZERO: Self = Self {
        tip_amount: 0.0,
        total_amount: 0.0,
    };

    /// Whether both amounts are zero.
    pub fn is_zero(&self) -> bool {
        self.tip_amount == 0.0 && self.total_amount == 0.0
    }
}

impl fmt::Display for TipResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tip {:.2}, total {:.2}", self.tip_amount, self.total_amount)
    }
}

/// Compute the tip and total for a bill amount and integer tip percentage.
///
/// Pure and total: any finite bill amount and any percentage (the stepper
/// keeps real input in 0..=100, but nothing here depends on that) produce
/// a deterministic result with no error path.
pub fn compute(bill_amount: f64, tip_percentage: i32) -> TipResult {
    let tip_amount = bill_amount * f64::from(tip_percentage) / 100.0;
    TipResult {
        tip_amount,
        total_amount: bill_amount + tip_amount,
    }
}

// ── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bill_any_percentage() {
        for pct in [0, 15, 30, 100] {
            let result = compute(0.0, pct);
            assert_eq!(result, TipResult::ZERO);
        }
    }

    #[test]
    fn test_zero_percentage_returns_bill() {
        let result = compute(42.50, 0);
        assert_eq!(result.tip_amount, 0.0);
        assert_eq!(result.total_amount, 42.50);
    }

    #[test]
    fn test_fifteen_percent_of_hundred() {
        let result = compute(100.0, 15);
        assert_eq!(result.tip_amount, 15.0);
        assert_eq!(result.total_amount, 115.0);
    }

    #[test]
    fn test_thirty_percent_of_two_hundred() {
        let result = compute(200.0, 30);
        assert_eq!(result.tip_amount, 60.0);
        assert_eq!(result.total_amount, 260.0);
    }

    #[test]
    fn test_fractional_cents_are_not_rounded() {
        // Rounding is a display concern; the result keeps full precision.
        let result = compute(10.01, 15);
        assert!((result.tip_amount - 1.5015).abs() < 1e-12);
        assert!((result.total_amount - 11.5115).abs() < 1e-12);
    }

    #[test]
    fn test_is_zero() {
        assert!(TipResult::ZERO.is_zero());
        assert!(compute(0.0, 20).is_zero());
        assert!(!compute(10.0, 0).is_zero());
    }
}
