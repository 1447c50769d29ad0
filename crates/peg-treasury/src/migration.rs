// crates/peg-treasury/src/migration.rs
//
// One-shot initialization and one-way migration.
//
// Migration is a terminal state transition: the instance hands its
// operator/owner roles and held balances over to a successor and never
// performs a privileged operation again. The successor independently runs
// its own `initialize()` once roles have been delegated, burning any
// balances a predecessor pushed in before the handover completed.

use serde::{Deserialize, Serialize};
use tracing::info;

use peg_core::error::PegError;
use peg_core::identity::AccountId;

use crate::events::TreasuryEvent;
use crate::treasury::{lock, Treasury};

/// Lifecycle status of a treasury instance.
///
/// Once `Migrated`, every privileged operation short-circuits with
/// `PegError::Migrated`; there is no way back to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreasuryStatus {
    /// Operating normally.
    Active,
    /// Control handed over; this instance is permanently frozen.
    Migrated { successor: AccountId },
}

impl Treasury {
    /// One-time clean-slate initialization of a (successor) instance.
    ///
    /// Burns any pre-existing balances of the core tokens held by this
    /// instance — a predecessor may have pushed balances in during
    /// migration before roles were fully transferred.
    pub fn initialize(&mut self, now: u64) -> Result<(), PegError> {
        if self.initialized {
            return Err(PegError::AlreadyInitialized);
        }
        self.ensure_operator_roles()?;

        self.initialized = true;
        for ledger in [&self.stable, &self.bond, &self.share] {
            let mut ledger = lock(ledger)?;
            let held = ledger.balance_of(&self.address);
            if held > 0 {
                ledger.burn(&self.address, &self.address, held)?;
            }
        }

        self.events.push(TreasuryEvent::Initialized { timestamp: now });
        info!(treasury = %self.address, "treasury initialized");
        Ok(())
    }

    /// Hand all privileged roles and held balances over to `successor`,
    /// permanently freezing this instance.
    ///
    /// Requires the administrative operator as caller, the operator role
    /// over the three core ledgers and the boardroom, and ownership of the
    /// three ledgers. Ownership is verified up front so the transfer loop
    /// below cannot fail after the terminal state is set.
    pub fn migrate(&mut self, caller: &AccountId, successor: &AccountId) -> Result<(), PegError> {
        self.ensure_active()?;
        if *caller != self.operator {
            return Err(PegError::InsufficientPermission);
        }
        self.ensure_operator_roles()?;
        for ledger in [&self.stable, &self.bond, &self.share] {
            if lock(ledger)?.owner() != self.address {
                return Err(PegError::InsufficientPermission);
            }
        }

        // Terminal state first: a reentrant call observes the instance as
        // already migrated.
        self.status = TreasuryStatus::Migrated {
            successor: *successor,
        };

        for ledger in [&self.stable, &self.bond, &self.share] {
            let mut ledger = lock(ledger)?;
            ledger.transfer_operator(&self.address, successor)?;
            ledger.transfer_ownership(&self.address, successor)?;
            let held = ledger.balance_of(&self.address);
            if held > 0 {
                ledger.transfer(&self.address, successor, held)?;
            }
        }

        self.events.push(TreasuryEvent::Migration {
            successor: *successor,
        });
        info!(from = %self.address, to = %successor, "treasury migrated");
        Ok(())
    }
}
