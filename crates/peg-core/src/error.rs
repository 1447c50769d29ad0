// crates/peg-core/src/error.rs
//
// Protocol-wide error type for the Peg Protocol settlement core.
//
// Every precondition failure surfaces as a named variant with a stable
// message. Variants group into four kinds (see `ErrorKind`): permission,
// lifecycle state, input validation, and external collaborator failures.

use thiserror::Error;

/// Coarse classification of a `PegError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller or instance lacks a required privileged role.
    Permission,
    /// Wrong lifecycle state (not started, already allocated, migrated,
    /// already initialized).
    State,
    /// Rejected input (zero amount, stale price, ineligible price band,
    /// exceeded budget or balance).
    Validation,
    /// An external collaborator (oracle, ledger) failed.
    External,
}

/// Protocol-wide error type for the Peg Protocol.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PegError {
    /// The caller or this instance is missing a required operator/owner role.
    #[error("treasury: need more permission")]
    InsufficientPermission,

    /// The treasury has migrated; privileged operations are permanently closed.
    #[error("treasury: migrated")]
    Migrated,

    /// One-time initialization was attempted a second time.
    #[error("treasury: already initialized")]
    AlreadyInitialized,

    /// The epoch schedule has not started yet.
    #[error("epoch: not started yet")]
    EpochNotStarted,

    /// Seigniorage was already allocated for the current period.
    #[error("epoch: already allocated for this period")]
    EpochAlreadyAllocated,

    /// A bond trade was attempted with a zero amount.
    #[error("treasury: cannot trade bonds with zero amount")]
    ZeroAmount,

    /// The observed price no longer matches the caller's price limit.
    #[error("treasury: price moved")]
    PriceMoved,

    /// The observed price is outside the band eligible for this trade.
    #[error("treasury: price not eligible for bond trade")]
    PriceNotEligible,

    /// A redemption would exceed the treasury's stable-token budget.
    #[error("treasury: treasury has no more budget")]
    InsufficientBudget,

    /// A ledger account holds less than the requested amount.
    #[error("ledger: insufficient balance")]
    InsufficientBalance,

    /// Integer arithmetic overflowed.
    #[error("arithmetic overflow")]
    Overflow,

    /// Price oracle failure (refresh or read).
    #[error("oracle error: {0}")]
    Oracle(String),

    /// Token ledger or boardroom collaborator failure.
    #[error("ledger error: {0}")]
    Ledger(String),

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PegError {
    /// Classify this error per the Permission/State/Validation/External
    /// taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PegError::InsufficientPermission => ErrorKind::Permission,
            PegError::Migrated
            | PegError::AlreadyInitialized
            | PegError::EpochNotStarted
            | PegError::EpochAlreadyAllocated => ErrorKind::State,
            PegError::ZeroAmount
            | PegError::PriceMoved
            | PegError::PriceNotEligible
            | PegError::InsufficientBudget
            | PegError::InsufficientBalance
            | PegError::Overflow => ErrorKind::Validation,
            PegError::Oracle(_)
            | PegError::Ledger(_)
            | PegError::Config(_)
            | PegError::Serialization(_) => ErrorKind::External,
        }
    }
}

impl From<serde_json::Error> for PegError {
    fn from(e: serde_json::Error) -> Self {
        PegError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(PegError::InsufficientPermission.kind(), ErrorKind::Permission);
        assert_eq!(PegError::Migrated.kind(), ErrorKind::State);
        assert_eq!(PegError::EpochNotStarted.kind(), ErrorKind::State);
        assert_eq!(PegError::ZeroAmount.kind(), ErrorKind::Validation);
        assert_eq!(PegError::PriceMoved.kind(), ErrorKind::Validation);
        assert_eq!(PegError::Oracle("down".into()).kind(), ErrorKind::External);
    }

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(PegError::Migrated.to_string(), "treasury: migrated");
        assert_eq!(PegError::EpochNotStarted.to_string(), "epoch: not started yet");
        assert_eq!(
            PegError::InsufficientPermission.to_string(),
            "treasury: need more permission"
        );
    }
}
