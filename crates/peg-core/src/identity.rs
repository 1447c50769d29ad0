// crates/peg-core/src/identity.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an account on the protocol's ledgers.
///
/// 32-byte opaque key. Treasury instances, fund sinks, the boardroom, and
/// ordinary holders are all addressed this way; the ledger does not
/// distinguish between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// Create an account id from raw key bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create an account id with every byte set to `tag`.
    ///
    /// Handy for deterministic test and simulation identities.
    pub fn from_tag(tag: u8) -> Self {
        Self([tag; 32])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short hex prefix, enough to tell accounts apart in logs.
        write!(
            f,
            "0x{:02x}{:02x}{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
