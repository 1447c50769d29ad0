// crates/peg-treasury/src/feed.rs
//
// Price-feed adapter over an external oracle capability.
//
// Two operations with deliberately different failure policy:
//   - `refresh_best_effort` asks the oracle to recompute; any failure is
//     logged and discarded. Staleness is tolerated on update.
//   - `read_price` returns the current observation; failure propagates.
//     A price read is correctness-critical data and is never substituted.

use std::sync::{Arc, Mutex};

use tracing::warn;

use peg_core::error::PegError;
use peg_core::token::Price;
use peg_core::traits::PriceOracle;

/// Adapter wrapping a shared price oracle handle.
#[derive(Clone)]
pub struct PriceFeed {
    oracle: Arc<Mutex<dyn PriceOracle>>,
}

impl PriceFeed {
    /// Wrap an oracle capability handle.
    pub fn new(oracle: Arc<Mutex<dyn PriceOracle>>) -> Self {
        Self { oracle }
    }

    /// Ask the oracle to recompute its observation, discarding any failure.
    pub fn refresh_best_effort(&self) {
        match self.oracle.lock() {
            Ok(mut oracle) => {
                if let Err(e) = oracle.refresh() {
                    warn!(error = %e, "oracle refresh failed; proceeding with last observation");
                }
            }
            Err(_) => warn!("oracle lock poisoned during refresh"),
        }
    }

    /// Read the current observed price. Failure propagates to the caller.
    pub fn read_price(&self) -> Result<Price, PegError> {
        self.oracle
            .lock()
            .map_err(|_| PegError::Oracle("oracle lock poisoned".to_string()))?
            .price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlakyOracle {
        price: Price,
        refresh_fails: bool,
        read_fails: bool,
        refresh_calls: u32,
    }

    impl PriceOracle for FlakyOracle {
        fn refresh(&mut self) -> Result<(), PegError> {
            self.refresh_calls += 1;
            if self.refresh_fails {
                return Err(PegError::Oracle("refresh unavailable".to_string()));
            }
            Ok(())
        }

        fn price(&self) -> Result<Price, PegError> {
            if self.read_fails {
                return Err(PegError::Oracle("no observation".to_string()));
            }
            Ok(self.price)
        }
    }

    fn feed(oracle: FlakyOracle) -> (PriceFeed, Arc<Mutex<FlakyOracle>>) {
        let shared = Arc::new(Mutex::new(oracle));
        (PriceFeed::new(shared.clone()), shared)
    }

    #[test]
    fn test_refresh_failure_is_swallowed() {
        let (feed, oracle) = feed(FlakyOracle {
            price: Price::ONE,
            refresh_fails: true,
            read_fails: false,
            refresh_calls: 0,
        });
        // Does not panic, does not propagate.
        feed.refresh_best_effort();
        assert_eq!(oracle.lock().unwrap().refresh_calls, 1);
        // The last observation is still readable.
        assert_eq!(feed.read_price(), Ok(Price::ONE));
    }

    #[test]
    fn test_read_failure_propagates() {
        let (feed, _) = feed(FlakyOracle {
            price: Price::ONE,
            refresh_fails: false,
            read_fails: true,
            refresh_calls: 0,
        });
        assert!(feed.read_price().is_err());
    }

    #[test]
    fn test_read_returns_observation() {
        let (feed, _) = feed(FlakyOracle {
            price: Price::from_ratio(106, 100),
            refresh_fails: false,
            read_fails: false,
            refresh_calls: 0,
        });
        assert_eq!(feed.read_price(), Ok(Price::from_ratio(106, 100)));
    }
}
