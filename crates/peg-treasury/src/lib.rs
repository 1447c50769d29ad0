// crates/peg-treasury/src/lib.rs
//
// peg-treasury: the settlement core of the Peg Protocol.
//
// The Treasury gates economic operations to fixed time epochs, mints and
// redistributes seigniorage across beneficiaries in a fixed waterfall
// order, runs the bond market that arbitrages the stable token back to
// its peg, and performs one-way migration of privileged control to a
// successor instance.
//
// All monetary values are integer base units (1 token = 10^8 base units);
// no floating point enters any economic calculation.

pub mod allocation;
pub mod bonds;
pub mod config;
pub mod epoch;
pub mod events;
pub mod feed;
pub mod migration;
pub mod treasury;

// Re-export key types for ergonomic access from downstream crates.
pub use allocation::{compute_waterfall, SeigniorageSplit};
pub use config::TreasuryConfig;
pub use epoch::EpochGate;
pub use events::TreasuryEvent;
pub use feed::PriceFeed;
pub use migration::TreasuryStatus;
pub use treasury::{SharedBoardroom, SharedLedger, SharedOracle, Treasury, TreasuryHandles};
