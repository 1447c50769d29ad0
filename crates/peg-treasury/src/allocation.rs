// crates/peg-treasury/src/allocation.rs
//
// Pure seigniorage waterfall computation.
//
// When the stable token trades above peg, new supply is minted and carved
// up in fixed priority order:
//   1. Dev fund: dev_rate% of the seigniorage.
//   2. Treasury bond-redemption reserve: the remainder, capped at the
//      outstanding bond capacity (the treasury never reserves more stable
//      token than it could owe against redeemable bonds).
//   3. Stable fund: stable_rate% of what is left after the cap.
//   4. Boardroom: everything else.
//
// All arithmetic is integer, truncating toward zero, widened to u128 for
// intermediates. The four parts always sum exactly to the seigniorage.

use serde::{Deserialize, Serialize};

use peg_core::error::PegError;
use peg_core::token::{Amount, Price};

/// The result of one waterfall computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeigniorageSplit {
    /// Minted to the dev fund sink.
    pub dev_reserve: Amount,
    /// Minted to the treasury's own balance, backing bond redemption.
    pub treasury_reserve: Amount,
    /// Minted to the stable fund sink.
    pub stable_reserve: Amount,
    /// Minted to the boardroom.
    pub boardroom_reserve: Amount,
}

impl SeigniorageSplit {
    /// A split with every component zero (price at or below peg).
    pub fn zero() -> Self {
        Self {
            dev_reserve: 0,
            treasury_reserve: 0,
            stable_reserve: 0,
            boardroom_reserve: 0,
        }
    }

    /// Total seigniorage across all four destinations.
    pub fn total(&self) -> Amount {
        self.dev_reserve + self.treasury_reserve + self.stable_reserve + self.boardroom_reserve
    }

    /// Whether nothing is minted at all.
    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

/// Compute the seigniorage waterfall for one allocation.
///
/// # Arguments
/// - `price` — Current stable-token price observation.
/// - `peg` — The peg price (normally `Price::ONE`).
/// - `circulating_supply` — Stable-token supply excluding the treasury's
///   own balance, in base units.
/// - `bond_capacity` — Outstanding bond supply not held by the treasury,
///   in base units; caps the treasury reserve.
/// - `dev_rate` / `stable_rate` — Percentages in [0, 100].
///
/// # Errors
/// Returns `PegError::Overflow` if the seigniorage exceeds the amount
/// range (implies an absurd price/supply combination).
pub fn compute_waterfall(
    price: Price,
    peg: Price,
    circulating_supply: Amount,
    bond_capacity: Amount,
    dev_rate: u8,
    stable_rate: u8,
) -> Result<SeigniorageSplit, PegError> {
    if price.0 <= peg.0 {
        return Ok(SeigniorageSplit::zero());
    }

    let premium = (price.0 - peg.0) as u128;
    let seigniorage_wide = (circulating_supply as u128) * premium / (peg.0 as u128);
    let seigniorage: Amount = seigniorage_wide.try_into().map_err(|_| PegError::Overflow)?;

    let dev_reserve = (seigniorage as u128 * dev_rate as u128 / 100) as Amount;
    let remaining = seigniorage - dev_reserve;

    let treasury_reserve = remaining.min(bond_capacity);
    let leftover = remaining - treasury_reserve;

    let stable_reserve = (leftover as u128 * stable_rate as u128 / 100) as Amount;
    let boardroom_reserve = leftover - stable_reserve;

    Ok(SeigniorageSplit {
        dev_reserve,
        treasury_reserve,
        stable_reserve,
        boardroom_reserve,
    })
}
