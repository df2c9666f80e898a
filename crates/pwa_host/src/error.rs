//! Error type for facade operations that surface failures to callers.

use thiserror::Error;

/// Failures raised by [`crate::PwaFacade`] operations.
///
/// Only precondition violations and hard platform failures in the push/notification paths are
/// reported this way; every other failure degrades to `false`/`None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PwaError {
    /// The host has no service worker or push manager.
    #[error("push notifications are not supported on this platform")]
    PushUnsupported,
    /// The user did not grant notification permission.
    #[error("notification permission was not granted")]
    PermissionNotGranted,
    /// The application server key is not valid URL-safe base64.
    #[error("invalid VAPID public key: {0}")]
    InvalidVapidKey(String),
    /// A platform call failed.
    #[error("platform call failed: {0}")]
    Platform(String),
}
