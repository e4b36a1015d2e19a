//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum ferries tracked at once
pub const MAX_FERRIES: usize = 8;

/// Default minimum interval between status fetches (ms)
pub const DEFAULT_REFRESH_RATE_MS: u64 = 5000;

/// Ferries one status line normally carries (one per clock hand)
pub const DEFAULT_EXPECTED_FERRIES: u8 = 2;

/// Default render tick interval (ms)
pub const DEFAULT_RENDER_INTERVAL_MS: u32 = 20;

/// Share of the refresh interval added to the receipt time when the server
/// reports stale data
pub const STALE_BACKOFF_PERCENT: u64 = 80;

/// Data ingestion settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DataConfig {
    /// Minimum interval between update attempts (ms)
    pub refresh_rate_ms: u64,
    /// Composite records expected per status line
    pub expected_ferries: u8,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: DEFAULT_REFRESH_RATE_MS,
            expected_ferries: DEFAULT_EXPECTED_FERRIES,
        }
    }
}

impl DataConfig {
    /// Back-off added past the receipt time on a stale response (ms)
    pub fn stale_backoff_ms(&self) -> u64 {
        self.refresh_rate_ms.saturating_mul(STALE_BACKOFF_PERCENT) / 100
    }
}

/// Output refresh settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Interval between render ticks (ms)
    pub interval_ms: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_RENDER_INTERVAL_MS,
        }
    }
}

/// Complete clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FerryConfig {
    /// Ingestion settings
    pub data: DataConfig,
    /// Render settings
    pub render: RenderConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Input is not valid TOML or has mistyped values
    Parse,
    /// Refresh rate of zero would poll continuously
    ZeroRefreshRate,
    /// More ferries than the data manager can hold
    TooManyFerries,
}

impl FerryConfig {
    /// Check values the rest of the core relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.refresh_rate_ms == 0 {
            return Err(ConfigError::ZeroRefreshRate);
        }
        if self.data.expected_ferries as usize > MAX_FERRIES {
            return Err(ConfigError::TooManyFerries);
        }
        Ok(())
    }
}
