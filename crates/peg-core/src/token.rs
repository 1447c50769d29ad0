// crates/peg-core/src/token.rs
//
// Token amount and fixed-point price units for the Peg Protocol.
//
// The smallest unit of every core token (stable, bond, share) is the base
// unit: 1 whole token = 10^8 base units. All internal accounting uses base
// units to avoid floating-point precision issues in economic calculations.
//
// Prices use the same 10^8 fixed-point scale; the peg is `Price::ONE`.
// A price of 1.06x peg is `Price::from_ratio(106, 100)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of base units in one whole token. 1 token = 10^8 base units.
pub const UNIT: u64 = 100_000_000;

/// Fixed-point scale for prices. A price equal to `PRICE_SCALE` is exactly
/// the peg.
pub const PRICE_SCALE: u64 = 100_000_000;

/// Type alias for a token amount in base units.
pub type Amount = u64;

/// A fixed-point price observation, scaled by `PRICE_SCALE`.
///
/// All price arithmetic is integer; comparisons against the peg and the
/// redemption band are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(pub u64);

impl Price {
    /// The peg price: exactly 1.0 in peg units.
    pub const ONE: Price = Price(PRICE_SCALE);

    /// Build a price from an integer ratio, e.g. `from_ratio(99, 100)` for
    /// 0.99x peg. Truncates toward zero.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Self {
        let scaled = (numerator as u128) * (PRICE_SCALE as u128) / (denominator as u128);
        Price(scaled as u64)
    }

    /// Whether this price is strictly below the peg.
    pub fn below_peg(&self) -> bool {
        self.0 < PRICE_SCALE
    }

    /// Whether this price is strictly above the peg.
    pub fn above_peg(&self) -> bool {
        self.0 > PRICE_SCALE
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / PRICE_SCALE;
        let frac = self.0 % PRICE_SCALE;
        if frac == 0 {
            write!(f, "{}.0", whole)
        } else {
            let frac_str = format!("{:08}", frac);
            write!(f, "{}.{}", whole, frac_str.trim_end_matches('0'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_scale() {
        assert_eq!(UNIT, 100_000_000);
        assert_eq!(PRICE_SCALE, UNIT);
    }

    #[test]
    fn test_from_ratio() {
        assert_eq!(Price::from_ratio(1, 1), Price::ONE);
        assert_eq!(Price::from_ratio(99, 100), Price(99_000_000));
        assert_eq!(Price::from_ratio(210, 100), Price(210_000_000));
    }

    #[test]
    fn test_peg_comparisons() {
        assert!(Price::from_ratio(99, 100).below_peg());
        assert!(!Price::ONE.below_peg());
        assert!(!Price::ONE.above_peg());
        assert!(Price::from_ratio(106, 100).above_peg());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Price::ONE), "1.0");
        assert_eq!(format!("{}", Price::from_ratio(99, 100)), "0.99");
        assert_eq!(format!("{}", Price::from_ratio(106, 100)), "1.06");
    }
}
