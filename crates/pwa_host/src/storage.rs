//! Storage quota and cache usage models.

use serde::{Deserialize, Serialize};

/// Raw storage quota/usage snapshot reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StorageEstimate {
    /// Quota in bytes.
    pub quota: u64,
    /// Usage in bytes.
    pub usage: u64,
}

/// Cache storage usage returned by [`crate::PwaFacade::get_cache_storage_usage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStorageUsage {
    /// Quota in bytes.
    pub quota: u64,
    /// Usage in bytes.
    pub usage: u64,
    /// Percentage of quota in use, with two decimals (`"25.00"`).
    pub percent_used: String,
}

impl CacheStorageUsage {
    /// Derives the usage summary from a raw estimate.
    pub fn from_estimate(estimate: StorageEstimate) -> Self {
        Self {
            quota: estimate.quota,
            usage: estimate.usage,
            percent_used: percent_used_text(estimate.usage, estimate.quota),
        }
    }
}

/// Formats `usage / quota * 100` with two decimals, rounding halves up.
///
/// A zero quota reports `"0.00"`.
pub fn percent_used_text(usage: u64, quota: u64) -> String {
    if quota == 0 {
        return "0.00".to_string();
    }
    let quota = u128::from(quota);
    let hundredths = (u128::from(usage) * 20_000 + quota) / (2 * quota);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
