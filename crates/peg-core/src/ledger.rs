// crates/peg-core/src/ledger.rs
//
// In-memory fungible token ledger with operator/owner roles.
//
// The concrete `TokenLedger` used by tests and local simulation. Mint and
// burn are gated on the operator role; role reassignment on the owner
// role. Balance arithmetic is checked: overflow and overdraft are errors,
// never panics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PegError;
use crate::identity::AccountId;
use crate::token::Amount;
use crate::traits::TokenLedger;

/// An in-memory token ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InMemoryLedger {
    /// Human-readable token name, used in log and error context.
    name: String,
    /// Account with mint/burn privilege.
    operator: AccountId,
    /// Account with role-transfer privilege.
    owner: AccountId,
    /// Per-account balances in base units.
    balances: HashMap<AccountId, Amount>,
    /// Sum of all balances.
    total_supply: Amount,
}

impl InMemoryLedger {
    /// Create a new empty ledger with `deployer` holding both roles.
    pub fn new(name: impl Into<String>, deployer: AccountId) -> Self {
        Self {
            name: name.into(),
            operator: deployer,
            owner: deployer,
            balances: HashMap::new(),
            total_supply: 0,
        }
    }

    /// Token name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn credit(&mut self, account: &AccountId, amount: Amount) -> Result<(), PegError> {
        // Both checked computations run before either write lands, so a
        // failure leaves the ledger untouched and total_supply always
        // equals the sum of balances.
        let new_balance = self
            .balance_of(account)
            .checked_add(amount)
            .ok_or(PegError::Overflow)?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(PegError::Overflow)?;
        self.balances.insert(*account, new_balance);
        self.total_supply = new_supply;
        Ok(())
    }

    fn debit(&mut self, account: &AccountId, amount: Amount) -> Result<(), PegError> {
        let balance = self.balances.entry(*account).or_insert(0);
        if *balance < amount {
            return Err(PegError::InsufficientBalance);
        }
        *balance -= amount;
        self.total_supply -= amount;
        Ok(())
    }
}

impl TokenLedger for InMemoryLedger {
    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn mint(
        &mut self,
        caller: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), PegError> {
        if *caller != self.operator {
            return Err(PegError::InsufficientPermission);
        }
        self.credit(to, amount)
    }

    fn burn(
        &mut self,
        caller: &AccountId,
        from: &AccountId,
        amount: Amount,
    ) -> Result<(), PegError> {
        if *caller != self.operator {
            return Err(PegError::InsufficientPermission);
        }
        self.debit(from, amount)
    }

    fn transfer(
        &mut self,
        caller: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), PegError> {
        // Transfers move the caller's own funds; no role required.
        let from_balance = self.balance_of(caller);
        if from_balance < amount {
            return Err(PegError::InsufficientBalance);
        }
        if caller == to {
            return Ok(());
        }
        // Validate the recipient side before debiting, so a failed
        // transfer cannot make the payer's funds vanish.
        let new_to_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(PegError::Overflow)?;
        self.balances.insert(*caller, from_balance - amount);
        self.balances.insert(*to, new_to_balance);
        Ok(())
    }

    fn operator(&self) -> AccountId {
        self.operator
    }

    fn owner(&self) -> AccountId {
        self.owner
    }

    fn transfer_operator(
        &mut self,
        caller: &AccountId,
        new_operator: &AccountId,
    ) -> Result<(), PegError> {
        if *caller != self.owner {
            return Err(PegError::InsufficientPermission);
        }
        self.operator = *new_operator;
        Ok(())
    }

    fn transfer_ownership(
        &mut self,
        caller: &AccountId,
        new_owner: &AccountId,
    ) -> Result<(), PegError> {
        if *caller != self.owner {
            return Err(PegError::InsufficientPermission);
        }
        self.owner = *new_owner;
        Ok(())
    }
}
