// crates/peg-treasury/src/epoch.rs
//
// Epoch gating for time-sensitive treasury operations.
//
// The epoch counter tracks completed seigniorage allocations: before the
// first allocation `next_epoch_point() == start_time`, and each successful
// allocation moves the boundary forward by one period. Exactly one
// allocation can succeed per period; periods cannot be skipped and
// double-claimed because the boundary is derived from the counter, not
// from wall-clock arithmetic.

use serde::{Deserialize, Serialize};

use peg_core::error::PegError;

/// Gates operations to the epoch schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochGate {
    /// Unix timestamp at which the first epoch opens.
    start_time: u64,
    /// Epoch length in seconds.
    period: u64,
    /// Number of completed allocations.
    epoch: u64,
}

impl EpochGate {
    /// Create a gate with the given schedule, starting at epoch 0.
    pub fn new(start_time: u64, period: u64) -> Self {
        Self {
            start_time,
            period,
            epoch: 0,
        }
    }

    /// The current epoch index.
    pub fn current_epoch(&self) -> u64 {
        self.epoch
    }

    /// Timestamp at which the next allocation becomes permitted.
    pub fn next_epoch_point(&self) -> u64 {
        self.start_time.saturating_add(self.epoch.saturating_mul(self.period))
    }

    /// Fail with `EpochNotStarted` if the schedule has not opened yet.
    pub fn assert_started(&self, now: u64) -> Result<(), PegError> {
        if now < self.start_time {
            return Err(PegError::EpochNotStarted);
        }
        Ok(())
    }

    /// Fail with `EpochAlreadyAllocated` if the current period's
    /// allocation has already happened.
    ///
    /// Callers must check `assert_started` first; this only looks at the
    /// period boundary.
    pub fn assert_allocatable(&self, now: u64) -> Result<(), PegError> {
        if now < self.next_epoch_point() {
            return Err(PegError::EpochAlreadyAllocated);
        }
        Ok(())
    }

    /// Record a completed allocation, moving the boundary one period out.
    pub fn advance(&mut self) {
        self.epoch += 1;
    }
}
