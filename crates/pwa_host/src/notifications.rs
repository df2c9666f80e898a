//! Local notification option helpers.

use serde_json::{Map, Value};

use crate::PwaConfig;

/// Notification display options forwarded to the worker registration.
pub type NotificationOptions = Map<String, Value>;

/// Builds the `{icon, badge}` defaults for local notifications.
pub fn default_notification_options(config: &PwaConfig) -> NotificationOptions {
    let mut options = NotificationOptions::new();
    options.insert(
        "icon".to_string(),
        Value::String(config.notification_icon.clone()),
    );
    options.insert(
        "badge".to_string(),
        Value::String(config.notification_badge.clone()),
    );
    options
}

/// Merges caller options over defaults. Caller keys win on conflict.
pub fn merge_notification_options(
    defaults: &NotificationOptions,
    overrides: &NotificationOptions,
) -> NotificationOptions {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
