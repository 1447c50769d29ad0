// crates/peg-core/src/lib.rs
//
// peg-core: Core types, capability traits, and ledger primitives for the
// Peg Protocol settlement core.
//
// This is the leaf crate the treasury crate depends on. It defines account
// identity, fixed-point token/price units, the protocol-wide error type,
// the capability traits the treasury consumes (token ledger, price oracle,
// boardroom), and an in-memory ledger implementation with operator/owner
// roles used by tests and local simulation.

pub mod error;
pub mod identity;
pub mod ledger;
pub mod token;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.

pub use error::{ErrorKind, PegError};
pub use identity::AccountId;
pub use ledger::InMemoryLedger;
pub use token::{Amount, Price, PRICE_SCALE, UNIT};
pub use traits::{Boardroom, PriceOracle, TokenLedger};
