//! PWA host-service contract and no-op adapter.

use std::{future::Future, pin::Pin};

use serde_json::Value;

use crate::{
    CapabilityProvider, ListenerCallback, ListenerCleanup, NotificationOptions,
    NotificationPermission, PushSubscription, StorageEstimate,
};

/// Object-safe boxed future used by [`PwaHost`] async methods.
pub type PwaHostFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service exposing one method per platform PWA call.
///
/// Implementations report failures as `Err(String)`; the facade decides whether a failure is
/// surfaced or degraded. Methods that act through the service worker registration may assume
/// [`PwaHost::service_worker_ready`] resolved first.
pub trait PwaHost: CapabilityProvider {
    /// Reads the current notification permission without prompting.
    fn notification_permission(&self) -> NotificationPermission;

    /// Asks the user for notification permission, resolving with the decision.
    fn request_notification_permission<'a>(
        &'a self,
    ) -> PwaHostFuture<'a, Result<NotificationPermission, String>>;

    /// Waits until the service worker registration is active.
    fn service_worker_ready<'a>(&'a self) -> PwaHostFuture<'a, Result<(), String>>;

    /// Creates a user-visible-only push subscription for `application_server_key`.
    fn push_subscribe<'a>(
        &'a self,
        application_server_key: &'a [u8],
    ) -> PwaHostFuture<'a, Result<PushSubscription, String>>;

    /// Looks up the current push subscription.
    fn push_subscription<'a>(&'a self)
        -> PwaHostFuture<'a, Result<Option<PushSubscription>, String>>;

    /// Cancels the current push subscription, resolving `false` when none exists.
    fn push_unsubscribe<'a>(&'a self) -> PwaHostFuture<'a, Result<bool, String>>;

    /// Shows a notification through the worker registration.
    fn show_notification<'a>(
        &'a self,
        title: &'a str,
        options: &'a NotificationOptions,
    ) -> PwaHostFuture<'a, Result<(), String>>;

    /// Posts `message` to the active worker, resolving `false` when no worker is active.
    fn post_message<'a>(&'a self, message: &'a Value) -> PwaHostFuture<'a, Result<bool, String>>;

    /// Lists every named cache store.
    fn cache_names<'a>(&'a self) -> PwaHostFuture<'a, Result<Vec<String>, String>>;

    /// Deletes one named cache store, resolving whether it existed.
    fn delete_cache<'a>(&'a self, cache_name: &'a str) -> PwaHostFuture<'a, Result<bool, String>>;

    /// Reads the storage quota/usage estimate.
    fn storage_estimate<'a>(&'a self) -> PwaHostFuture<'a, Result<StorageEstimate, String>>;

    /// Registers a background sync tag.
    fn register_sync<'a>(&'a self, tag: &'a str) -> PwaHostFuture<'a, Result<(), String>>;

    /// Attaches online/offline transition callbacks.
    fn add_network_listeners(
        &self,
        on_online: ListenerCallback,
        on_offline: ListenerCallback,
    ) -> ListenerCleanup;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op host for targets without any PWA capability.
pub struct NoopPwaHost;

fn unavailable() -> String {
    "PWA host APIs are unavailable on this target".to_string()
}

impl CapabilityProvider for NoopPwaHost {
    fn has_service_worker(&self) -> bool {
        false
    }

    fn has_push_manager(&self) -> bool {
        false
    }

    fn has_notifications(&self) -> bool {
        false
    }

    fn has_storage_estimate(&self) -> bool {
        false
    }

    fn has_background_sync(&self) -> bool {
        false
    }

    fn has_cache_storage(&self) -> bool {
        false
    }

    fn is_standalone(&self) -> bool {
        false
    }

    fn is_online(&self) -> bool {
        false
    }
}

impl PwaHost for NoopPwaHost {
    fn notification_permission(&self) -> NotificationPermission {
        NotificationPermission::Unsupported
    }

    fn request_notification_permission<'a>(
        &'a self,
    ) -> PwaHostFuture<'a, Result<NotificationPermission, String>> {
        Box::pin(async { Ok(NotificationPermission::Unsupported) })
    }

    fn service_worker_ready<'a>(&'a self) -> PwaHostFuture<'a, Result<(), String>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn push_subscribe<'a>(
        &'a self,
        _application_server_key: &'a [u8],
    ) -> PwaHostFuture<'a, Result<PushSubscription, String>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn push_subscription<'a>(
        &'a self,
    ) -> PwaHostFuture<'a, Result<Option<PushSubscription>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn push_unsubscribe<'a>(&'a self) -> PwaHostFuture<'a, Result<bool, String>> {
        Box::pin(async { Ok(false) })
    }

    fn show_notification<'a>(
        &'a self,
        _title: &'a str,
        _options: &'a NotificationOptions,
    ) -> PwaHostFuture<'a, Result<(), String>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn post_message<'a>(&'a self, _message: &'a Value) -> PwaHostFuture<'a, Result<bool, String>> {
        Box::pin(async { Ok(false) })
    }

    fn cache_names<'a>(&'a self) -> PwaHostFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn delete_cache<'a>(&'a self, _cache_name: &'a str) -> PwaHostFuture<'a, Result<bool, String>> {
        Box::pin(async { Ok(false) })
    }

    fn storage_estimate<'a>(&'a self) -> PwaHostFuture<'a, Result<StorageEstimate, String>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn register_sync<'a>(&'a self, _tag: &'a str) -> PwaHostFuture<'a, Result<(), String>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn add_network_listeners(
        &self,
        _on_online: ListenerCallback,
        _on_offline: ListenerCallback,
    ) -> ListenerCleanup {
        ListenerCleanup::noop()
    }
}
