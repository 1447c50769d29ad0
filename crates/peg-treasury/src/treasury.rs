// crates/peg-treasury/src/treasury.rs
//
// The Treasury orchestrator: owns configuration, collaborator handles,
// the epoch gate, and the event log. Sole externally callable surface of
// the settlement core.
//
// Every operation performs its precondition checks (lifecycle status,
// epoch gate, privileged roles) before any mutation, so a failure aborts
// with zero observable side effects. Local bookkeeping is finalized before
// balance-moving collaborator calls.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use peg_core::error::PegError;
use peg_core::identity::AccountId;
use peg_core::token::{Amount, Price};
use peg_core::traits::{Boardroom, PriceOracle, TokenLedger};

use crate::allocation::{compute_waterfall, SeigniorageSplit};
use crate::config::TreasuryConfig;
use crate::epoch::EpochGate;
use crate::events::TreasuryEvent;
use crate::feed::PriceFeed;
use crate::migration::TreasuryStatus;

/// Shared handle to a token ledger capability.
pub type SharedLedger = Arc<Mutex<dyn TokenLedger>>;
/// Shared handle to a price oracle capability.
pub type SharedOracle = Arc<Mutex<dyn PriceOracle>>;
/// Shared handle to the boardroom capability.
pub type SharedBoardroom = Arc<Mutex<dyn Boardroom>>;

/// Lock a collaborator handle, surfacing poisoning as an external error
/// rather than a panic.
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, PegError> {
    mutex
        .lock()
        .map_err(|_| PegError::Ledger("collaborator lock poisoned".to_string()))
}

/// Collaborator handles granted to a treasury at construction.
///
/// The treasury never assumes a global registry: these capabilities are
/// everything it may touch, and it forwards the ledger roles to a
/// successor during migration.
pub struct TreasuryHandles {
    /// Stable-token ledger.
    pub stable: SharedLedger,
    /// Bond-token ledger.
    pub bond: SharedLedger,
    /// Share-token ledger.
    pub share: SharedLedger,
    /// Oracle observed for seigniorage allocation.
    pub stable_oracle: SharedOracle,
    /// Oracle observed for bond purchase/redemption (may be the same
    /// object as `stable_oracle`).
    pub bond_oracle: SharedOracle,
    /// Boardroom capability.
    pub boardroom: SharedBoardroom,
    /// Dev fund sink account on the stable ledger.
    pub dev_fund: AccountId,
    /// Stable fund sink account on the stable ledger.
    pub stable_fund: AccountId,
}

/// The treasury state machine.
pub struct Treasury {
    /// This instance's own account on the ledgers.
    pub(crate) address: AccountId,
    /// Administrative identity, set at construction.
    pub(crate) operator: AccountId,
    /// Active or terminally migrated.
    pub(crate) status: TreasuryStatus,
    /// Set once by `initialize()`; never cleared.
    pub(crate) initialized: bool,
    pub(crate) epoch: EpochGate,
    dev_fund_rate: u8,
    stable_fund_rate: u8,
    pub(crate) redemption_premium: u64,
    pub(crate) stable: SharedLedger,
    pub(crate) bond: SharedLedger,
    pub(crate) share: SharedLedger,
    stable_feed: PriceFeed,
    pub(crate) bond_feed: PriceFeed,
    pub(crate) boardroom: SharedBoardroom,
    dev_fund: AccountId,
    stable_fund: AccountId,
    pub(crate) events: Vec<TreasuryEvent>,
}

impl Treasury {
    /// Create a treasury at epoch 0, active and uninitialized.
    ///
    /// # Errors
    /// Returns `PegError::Config` if the configuration fails validation.
    pub fn new(
        config: TreasuryConfig,
        address: AccountId,
        operator: AccountId,
        handles: TreasuryHandles,
    ) -> Result<Self, PegError> {
        config.validate()?;
        Ok(Self {
            address,
            operator,
            status: TreasuryStatus::Active,
            initialized: false,
            epoch: EpochGate::new(config.start_time, config.period),
            dev_fund_rate: config.dev_fund_rate,
            stable_fund_rate: config.stable_fund_rate,
            redemption_premium: config.redemption_premium,
            stable: handles.stable,
            bond: handles.bond,
            share: handles.share,
            stable_feed: PriceFeed::new(handles.stable_oracle),
            bond_feed: PriceFeed::new(handles.bond_oracle),
            boardroom: handles.boardroom,
            dev_fund: handles.dev_fund,
            stable_fund: handles.stable_fund,
            events: Vec::new(),
        })
    }

    // ---- read-only queries -------------------------------------------

    /// This instance's account on the ledgers.
    pub fn address(&self) -> AccountId {
        self.address
    }

    /// The administrative identity.
    pub fn operator(&self) -> AccountId {
        self.operator
    }

    /// Current epoch index (number of completed allocations).
    pub fn current_epoch(&self) -> u64 {
        self.epoch.current_epoch()
    }

    /// Timestamp at which the next allocation becomes permitted.
    pub fn next_epoch_point(&self) -> u64 {
        self.epoch.next_epoch_point()
    }

    /// The treasury's own stable-token balance, backing bond redemption.
    pub fn get_reserve(&self) -> Result<Amount, PegError> {
        Ok(lock(&self.stable)?.balance_of(&self.address))
    }

    /// Whether this instance has migrated (terminal).
    pub fn is_migrated(&self) -> bool {
        matches!(self.status, TreasuryStatus::Migrated { .. })
    }

    /// The successor, once migrated.
    pub fn migrated_to(&self) -> Option<AccountId> {
        match self.status {
            TreasuryStatus::Active => None,
            TreasuryStatus::Migrated { successor } => Some(successor),
        }
    }

    /// Whether one-time initialization has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Dev fund allocation rate in percent.
    pub fn dev_fund_rate(&self) -> u8 {
        self.dev_fund_rate
    }

    /// Stable fund allocation rate in percent.
    pub fn stable_fund_rate(&self) -> u8 {
        self.stable_fund_rate
    }

    /// The append-only record log, oldest first.
    pub fn events(&self) -> &[TreasuryEvent] {
        &self.events
    }

    // ---- shared preconditions ----------------------------------------

    /// Fail with `Migrated` once the instance has handed over control.
    /// Checked first in every privileged operation.
    pub(crate) fn ensure_active(&self) -> Result<(), PegError> {
        match self.status {
            TreasuryStatus::Active => Ok(()),
            TreasuryStatus::Migrated { .. } => Err(PegError::Migrated),
        }
    }

    /// Fail unless this instance holds the operator role over all three
    /// core ledgers and the boardroom.
    pub(crate) fn ensure_operator_roles(&self) -> Result<(), PegError> {
        for ledger in [&self.stable, &self.bond, &self.share] {
            if lock(ledger)?.operator() != self.address {
                return Err(PegError::InsufficientPermission);
            }
        }
        if lock(&self.boardroom)?.operator() != self.address {
            return Err(PegError::InsufficientPermission);
        }
        Ok(())
    }

    // ---- seigniorage -------------------------------------------------

    /// Run one epoch's seigniorage allocation.
    ///
    /// Preconditions, first failure wins: not migrated, epoch schedule
    /// started, not already allocated this period, operator role over the
    /// core ledgers and boardroom. Then the oracle is refreshed
    /// best-effort, the price read (failure propagates), the waterfall
    /// computed, each nonzero reserve minted with its funded record, the
    /// boardroom notified, and the epoch advanced.
    pub fn allocate_seigniorage(&mut self, now: u64) -> Result<SeigniorageSplit, PegError> {
        self.ensure_active()?;
        self.epoch.assert_started(now)?;
        self.epoch.assert_allocatable(now)?;
        self.ensure_operator_roles()?;

        self.stable_feed.refresh_best_effort();
        let price = self.stable_feed.read_price()?;

        let circulating = {
            let stable = lock(&self.stable)?;
            stable
                .total_supply()
                .saturating_sub(stable.balance_of(&self.address))
        };
        let bond_capacity = {
            let bond = lock(&self.bond)?;
            bond.total_supply().saturating_sub(bond.balance_of(&self.address))
        };

        let split = compute_waterfall(
            price,
            Price::ONE,
            circulating,
            bond_capacity,
            self.dev_fund_rate,
            self.stable_fund_rate,
        )?;

        if split.dev_reserve > 0 {
            lock(&self.stable)?.mint(&self.address, &self.dev_fund, split.dev_reserve)?;
            self.events.push(TreasuryEvent::DevFundFunded {
                timestamp: now,
                amount: split.dev_reserve,
            });
        }
        if split.treasury_reserve > 0 {
            lock(&self.stable)?.mint(&self.address, &self.address, split.treasury_reserve)?;
            self.events.push(TreasuryEvent::TreasuryFunded {
                timestamp: now,
                amount: split.treasury_reserve,
            });
        }
        if split.stable_reserve > 0 {
            lock(&self.stable)?.mint(&self.address, &self.stable_fund, split.stable_reserve)?;
            self.events.push(TreasuryEvent::StableFundFunded {
                timestamp: now,
                amount: split.stable_reserve,
            });
        }
        if split.boardroom_reserve > 0 {
            let boardroom_address = lock(&self.boardroom)?.address();
            lock(&self.stable)?.mint(&self.address, &boardroom_address, split.boardroom_reserve)?;
            lock(&self.boardroom)?.notify_funded(&self.address, split.boardroom_reserve)?;
            self.events.push(TreasuryEvent::BoardroomFunded {
                timestamp: now,
                amount: split.boardroom_reserve,
            });
        }

        self.epoch.advance();

        if split.is_zero() {
            debug!(
                epoch = self.epoch.current_epoch(),
                price = %price,
                "no seigniorage at or below peg"
            );
        } else {
            info!(
                epoch = self.epoch.current_epoch(),
                price = %price,
                seigniorage = split.total(),
                "seigniorage allocated"
            );
        }
        Ok(split)
    }
}
