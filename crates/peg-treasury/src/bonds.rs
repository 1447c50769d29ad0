// crates/peg-treasury/src/bonds.rs
//
// Bond market: peg-arbitrage purchase and redemption of bond tokens
// against the stable token.
//
// Bonds are sold at a discount while the stable token trades below peg
// (the buyer helps contract supply) and redeem 1:1 for stable token once
// the price clears a premium band above peg, capped by the treasury's
// held stable balance.

use tracing::info;

use peg_core::error::PegError;
use peg_core::identity::AccountId;
use peg_core::token::{Amount, Price};

use crate::events::TreasuryEvent;
use crate::treasury::{lock, Treasury};

/// Bond tokens minted for spending `amount` of stable token at `price`:
/// `amount * peg / price`, floored.
pub(crate) fn bond_payout(amount: Amount, price: Price) -> Result<Amount, PegError> {
    if price.0 == 0 {
        return Err(PegError::Oracle("zero price observation".to_string()));
    }
    let payout = (amount as u128) * (Price::ONE.0 as u128) / (price.0 as u128);
    payout.try_into().map_err(|_| PegError::Overflow)
}

impl Treasury {
    /// Buy bonds with `amount` of stable token.
    ///
    /// The caller states the price they observed as `price_limit`; any
    /// divergence from the oracle's current observation aborts with
    /// `PriceMoved` (slippage protection). Purchases are eligible only
    /// strictly below peg.
    pub fn buy_bonds(
        &mut self,
        buyer: &AccountId,
        amount: Amount,
        price_limit: Price,
        now: u64,
    ) -> Result<Amount, PegError> {
        self.ensure_active()?;
        self.epoch.assert_started(now)?;
        if amount == 0 {
            return Err(PegError::ZeroAmount);
        }

        self.bond_feed.refresh_best_effort();
        let price = self.bond_feed.read_price()?;
        if price != price_limit {
            return Err(PegError::PriceMoved);
        }
        if !price.below_peg() {
            return Err(PegError::PriceNotEligible);
        }

        // Establish that both ledger calls below can succeed before the
        // first mutation, so a failure cannot leave a half-applied trade.
        let payout = bond_payout(amount, price)?;
        if lock(&self.stable)?.operator() != self.address
            || lock(&self.bond)?.operator() != self.address
        {
            return Err(PegError::InsufficientPermission);
        }

        lock(&self.stable)?.burn(&self.address, buyer, amount)?;
        lock(&self.bond)?.mint(&self.address, buyer, payout)?;

        self.events.push(TreasuryEvent::BondsBought {
            buyer: *buyer,
            amount,
        });
        info!(buyer = %buyer, amount, payout, price = %price, "bonds bought");
        Ok(payout)
    }

    /// Redeem `amount` of bond token 1:1 for stable token from the
    /// treasury's balance.
    ///
    /// Eligible only while the price strictly exceeds peg plus the
    /// configured redemption premium; capped by the treasury's current
    /// stable-token budget.
    pub fn redeem_bonds(
        &mut self,
        redeemer: &AccountId,
        amount: Amount,
        price_limit: Price,
        now: u64,
    ) -> Result<(), PegError> {
        self.ensure_active()?;
        self.epoch.assert_started(now)?;
        if amount == 0 {
            return Err(PegError::ZeroAmount);
        }

        self.bond_feed.refresh_best_effort();
        let price = self.bond_feed.read_price()?;
        if price != price_limit {
            return Err(PegError::PriceMoved);
        }
        if price.0 <= Price::ONE.0 + self.redemption_premium {
            return Err(PegError::PriceNotEligible);
        }

        let budget = lock(&self.stable)?.balance_of(&self.address);
        if amount > budget {
            return Err(PegError::InsufficientBudget);
        }
        if lock(&self.bond)?.operator() != self.address {
            return Err(PegError::InsufficientPermission);
        }

        lock(&self.bond)?.burn(&self.address, redeemer, amount)?;
        // The budget check above makes this transfer infallible.
        lock(&self.stable)?.transfer(&self.address, redeemer, amount)?;

        self.events.push(TreasuryEvent::BondsRedeemed {
            redeemer: *redeemer,
            amount,
        });
        info!(redeemer = %redeemer, amount, price = %price, "bonds redeemed");
        Ok(())
    }
}
