// crates/peg-treasury/src/events.rs
//
// Append-only event records emitted by the treasury.
//
// One record per successful mutating operation or funded sub-step. A zero
// reserve in the allocation waterfall emits no record at all; tests assert
// on absence as well as presence.

use serde::{Deserialize, Serialize};

use peg_core::identity::AccountId;
use peg_core::token::Amount;

/// A record of a successful treasury mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreasuryEvent {
    /// One-time initialization of a (successor) instance.
    Initialized { timestamp: u64 },
    /// One-way migration of roles and balances to `successor`.
    Migration { successor: AccountId },
    /// Seigniorage minted to the dev fund sink.
    DevFundFunded { timestamp: u64, amount: Amount },
    /// Seigniorage reserved on the treasury's own balance for bond
    /// redemption.
    TreasuryFunded { timestamp: u64, amount: Amount },
    /// Seigniorage minted to the stable fund sink.
    StableFundFunded { timestamp: u64, amount: Amount },
    /// Seigniorage minted to the boardroom.
    BoardroomFunded { timestamp: u64, amount: Amount },
    /// A bond purchase: `amount` is the stable token spent.
    BondsBought { buyer: AccountId, amount: Amount },
    /// A bond redemption: `amount` is the bond token redeemed 1:1.
    BondsRedeemed { redeemer: AccountId, amount: Amount },
}
