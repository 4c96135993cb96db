//! Analytics query defaults and bounds

use serde::Deserialize;

use super::error::ValidationError;

/// Defaults applied to omitted query parameters, and the caps on page sizes.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Coalition window length in calendar months
    #[serde(default = "default_months_back")]
    pub default_months_back: u32,

    /// Minimum bills a party pair must share to be reported
    #[serde(default = "default_min_shared_bills")]
    pub default_min_shared_bills: u32,

    #[serde(default = "default_coalition_limit")]
    pub default_coalition_limit: usize,

    #[serde(default = "default_max_coalition_limit")]
    pub max_coalition_limit: usize,

    /// Activity feed page size
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl AnalyticsConfig {
    /// Validate analytics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_coalition_limit == 0 {
            return Err(ValidationError::InvalidAnalyticsSetting {
                field: "max_coalition_limit",
                reason: "must be at least 1",
            });
        }
        if !(1..=self.max_coalition_limit).contains(&self.default_coalition_limit) {
            return Err(ValidationError::InvalidAnalyticsSetting {
                field: "default_coalition_limit",
                reason: "must be between 1 and max_coalition_limit",
            });
        }
        if self.max_page_size == 0 {
            return Err(ValidationError::InvalidAnalyticsSetting {
                field: "max_page_size",
                reason: "must be at least 1",
            });
        }
        if !(1..=self.max_page_size).contains(&self.default_page_size) {
            return Err(ValidationError::InvalidAnalyticsSetting {
                field: "default_page_size",
                reason: "must be between 1 and max_page_size",
            });
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_months_back: default_months_back(),
            default_min_shared_bills: default_min_shared_bills(),
            default_coalition_limit: default_coalition_limit(),
            max_coalition_limit: default_max_coalition_limit(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_months_back() -> u32 {
    12
}

fn default_min_shared_bills() -> u32 {
    5
}

fn default_coalition_limit() -> usize {
    20
}

fn default_max_coalition_limit() -> usize {
    100
}

fn default_page_size() -> usize {
    20
}

fn default_max_page_size() -> usize {
    100
}
