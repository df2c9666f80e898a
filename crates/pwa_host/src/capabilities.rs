//! Capability probing contracts.

use serde::{Deserialize, Serialize};

/// Explicit capability provider used instead of probing a global object.
///
/// Every query is evaluated on each call. Absence of a feature is reported as `false`.
pub trait CapabilityProvider {
    /// Returns whether service workers are available.
    fn has_service_worker(&self) -> bool;

    /// Returns whether the push manager is available.
    fn has_push_manager(&self) -> bool;

    /// Returns whether the notifications API is available.
    fn has_notifications(&self) -> bool;

    /// Returns whether storage quota/usage estimates are available.
    fn has_storage_estimate(&self) -> bool;

    /// Returns whether background sync registration is available.
    fn has_background_sync(&self) -> bool;

    /// Returns whether named cache storage is available.
    fn has_cache_storage(&self) -> bool;

    /// Returns whether the app runs as an installed standalone application.
    fn is_standalone(&self) -> bool;

    /// Returns whether the host currently reports network connectivity.
    fn is_online(&self) -> bool;

    /// Returns a snapshot of every capability flag.
    fn capabilities(&self) -> PwaCapabilities {
        PwaCapabilities {
            service_worker: self.has_service_worker(),
            push_manager: self.has_push_manager(),
            notifications: self.has_notifications(),
            storage_estimate: self.has_storage_estimate(),
            background_sync: self.has_background_sync(),
            cache_storage: self.has_cache_storage(),
            standalone: self.is_standalone(),
            online: self.is_online(),
        }
    }
}

/// Point-in-time capability flags.
///
/// Field names serialize in camelCase to match the browser bridge payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PwaCapabilities {
    /// Service worker support.
    pub service_worker: bool,
    /// Push manager support.
    pub push_manager: bool,
    /// Notifications API support.
    pub notifications: bool,
    /// Storage estimate support.
    pub storage_estimate: bool,
    /// Background sync support.
    pub background_sync: bool,
    /// Cache storage support.
    pub cache_storage: bool,
    /// Standalone (installed) display mode.
    pub standalone: bool,
    /// Network connectivity.
    pub online: bool,
}

impl PwaCapabilities {
    /// Host with no PWA capability at all.
    pub const fn none() -> Self {
        Self {
            service_worker: false,
            push_manager: false,
            notifications: false,
            storage_estimate: false,
            background_sync: false,
            cache_storage: false,
            standalone: false,
            online: false,
        }
    }

    /// Online browser tab with every capability present, not yet installed.
    pub const fn full() -> Self {
        Self {
            service_worker: true,
            push_manager: true,
            notifications: true,
            storage_estimate: true,
            background_sync: true,
            cache_storage: true,
            standalone: false,
            online: true,
        }
    }
}

impl CapabilityProvider for PwaCapabilities {
    fn has_service_worker(&self) -> bool {
        self.service_worker
    }

    fn has_push_manager(&self) -> bool {
        self.push_manager
    }

    fn has_notifications(&self) -> bool {
        self.notifications
    }

    fn has_storage_estimate(&self) -> bool {
        self.storage_estimate
    }

    fn has_background_sync(&self) -> bool {
        self.background_sync
    }

    fn has_cache_storage(&self) -> bool {
        self.cache_storage
    }

    fn is_standalone(&self) -> bool {
        self.standalone
    }

    fn is_online(&self) -> bool {
        self.online
    }

    fn capabilities(&self) -> PwaCapabilities {
        *self
    }
}
