//! Facade configuration.

use serde::{Deserialize, Serialize};

/// Default icon asset shown with local notifications.
pub const DEFAULT_NOTIFICATION_ICON: &str = "/icons/icon-192x192.png";
/// Default badge asset shown with local notifications.
pub const DEFAULT_NOTIFICATION_BADGE: &str = "/icons/badge-72x72.png";

/// Tunable asset paths used by [`crate::PwaFacade`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PwaConfig {
    /// Icon path merged into local notification options.
    pub notification_icon: String,
    /// Badge path merged into local notification options.
    pub notification_badge: String,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            notification_icon: DEFAULT_NOTIFICATION_ICON.to_string(),
            notification_badge: DEFAULT_NOTIFICATION_BADGE.to_string(),
        }
    }
}

impl PwaConfig {
    /// Parses a config from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = PwaConfig::from_json(r#"{"notification_icon":"/brand.png"}"#).expect("parse");
        assert_eq!(config.notification_icon, "/brand.png");
        assert_eq!(config.notification_badge, DEFAULT_NOTIFICATION_BADGE);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(PwaConfig::from_json("[1, 2]").is_err());
    }
}
