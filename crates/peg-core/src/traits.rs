// crates/peg-core/src/traits.rs
//
// Capability traits for the external collaborators the treasury drives.
//
// The treasury never assumes a global registry: it holds handles to these
// capabilities, granted at construction, and forwards them to a successor
// during migration. Callers are explicit on every privileged call (the
// execution environment has no ambient caller identity).

use crate::error::PegError;
use crate::identity::AccountId;
use crate::token::{Amount, Price};

/// Capability over a fungible token ledger.
///
/// Privilege model: the `operator` may mint and burn; the `owner` may
/// reassign both roles. The treasury is granted both roles over the core
/// token ledgers and hands them to its successor on migration.
pub trait TokenLedger: Send {
    /// Total supply in base units.
    fn total_supply(&self) -> Amount;

    /// Balance of an account in base units.
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Mint `amount` to `to`. Requires `caller` to be the operator.
    fn mint(&mut self, caller: &AccountId, to: &AccountId, amount: Amount)
        -> Result<(), PegError>;

    /// Burn `amount` from `from`. Requires `caller` to be the operator.
    fn burn(&mut self, caller: &AccountId, from: &AccountId, amount: Amount)
        -> Result<(), PegError>;

    /// Move `amount` from the caller's own balance to `to`.
    fn transfer(&mut self, caller: &AccountId, to: &AccountId, amount: Amount)
        -> Result<(), PegError>;

    /// Current operator (mint/burn privilege).
    fn operator(&self) -> AccountId;

    /// Current owner (role-transfer privilege).
    fn owner(&self) -> AccountId;

    /// Reassign the operator role. Requires `caller` to be the owner.
    fn transfer_operator(&mut self, caller: &AccountId, new_operator: &AccountId)
        -> Result<(), PegError>;

    /// Reassign ownership. Requires `caller` to be the owner.
    fn transfer_ownership(&mut self, caller: &AccountId, new_owner: &AccountId)
        -> Result<(), PegError>;
}

/// Capability over an external price oracle.
pub trait PriceOracle: Send {
    /// Ask the oracle to recompute its observation.
    ///
    /// Callers that tolerate staleness catch and discard this error; the
    /// treasury's price-feed adapter makes that policy explicit.
    fn refresh(&mut self) -> Result<(), PegError>;

    /// Read the current observed price. A failure here is fatal to the
    /// caller: a price read is correctness-critical and is never
    /// substituted.
    fn price(&self) -> Result<Price, PegError>;
}

/// Capability over the boardroom (stakeholder distribution).
///
/// The boardroom's internal distribution logic is out of scope; the
/// treasury only funds its ledger account and notifies it of the amount.
pub trait Boardroom: Send {
    /// The boardroom's account on the stable-token ledger.
    fn address(&self) -> AccountId;

    /// Current operator of the boardroom.
    fn operator(&self) -> AccountId;

    /// Reassign the boardroom operator. Requires `caller` to be the owner.
    fn transfer_operator(&mut self, caller: &AccountId, new_operator: &AccountId)
        -> Result<(), PegError>;

    /// Notify the boardroom that `amount` of stable token was credited to
    /// its account. Requires `caller` to be the operator.
    fn notify_funded(&mut self, caller: &AccountId, amount: Amount) -> Result<(), PegError>;
}
