// crates/peg-treasury/src/config.rs
//
// Treasury configuration: epoch schedule, allocation rates, and the bond
// redemption band. Loaded from a TOML table or populated with defaults.

use serde::{Deserialize, Serialize};

use peg_core::error::PegError;
use peg_core::token::PRICE_SCALE;

/// Configuration for a treasury instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasuryConfig {
    /// Unix timestamp at which the first epoch opens. Required.
    pub start_time: u64,

    /// Epoch length in seconds.
    #[serde(default = "default_period")]
    pub period: u64,

    /// Percentage of seigniorage carved out for the dev fund, in [0, 100].
    #[serde(default = "default_dev_fund_rate")]
    pub dev_fund_rate: u8,

    /// Percentage of the post-carve-out leftover routed to the stable
    /// fund, in [0, 100]. The rest goes to the boardroom.
    #[serde(default = "default_stable_fund_rate")]
    pub stable_fund_rate: u8,

    /// Premium above peg (in price units) the stable token must strictly
    /// exceed before bonds become redeemable. Default 5% of peg, so a
    /// 1.06x price is eligible and 1.04x is not.
    #[serde(default = "default_redemption_premium")]
    pub redemption_premium: u64,
}

fn default_period() -> u64 {
    86_400
}

fn default_dev_fund_rate() -> u8 {
    2
}

fn default_stable_fund_rate() -> u8 {
    50
}

fn default_redemption_premium() -> u64 {
    PRICE_SCALE * 5 / 100
}

impl TreasuryConfig {
    /// Create a configuration with defaults for everything but the epoch
    /// start time.
    pub fn new(start_time: u64) -> Self {
        Self {
            start_time,
            period: default_period(),
            dev_fund_rate: default_dev_fund_rate(),
            stable_fund_rate: default_stable_fund_rate(),
            redemption_premium: default_redemption_premium(),
        }
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, PegError> {
        let config: TreasuryConfig =
            toml::from_str(raw).map_err(|e| PegError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate rate bounds and the epoch schedule.
    pub fn validate(&self) -> Result<(), PegError> {
        if self.period == 0 {
            return Err(PegError::Config("epoch period must be nonzero".to_string()));
        }
        if self.dev_fund_rate > 100 {
            return Err(PegError::Config(format!(
                "dev fund rate {} exceeds 100",
                self.dev_fund_rate
            )));
        }
        if self.stable_fund_rate > 100 {
            return Err(PegError::Config(format!(
                "stable fund rate {} exceeds 100",
                self.stable_fund_rate
            )));
        }
        Ok(())
    }
}
