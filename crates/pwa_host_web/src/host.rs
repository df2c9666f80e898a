//! Browser [`PwaHost`] adapter backed by the bridge interop layer.

use pwa_host::{
    CapabilityProvider, ListenerCallback, ListenerCleanup, NotificationOptions,
    NotificationPermission, PushSubscription, PwaCapabilities, PwaHost, PwaHostFuture,
    StorageEstimate,
};
use serde_json::Value;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser PWA host backed by service worker, push, notification and cache storage APIs.
///
/// Capability flags are probed on every call.
pub struct WebPwaHost;

impl CapabilityProvider for WebPwaHost {
    fn has_service_worker(&self) -> bool {
        bridge::capabilities().service_worker
    }

    fn has_push_manager(&self) -> bool {
        bridge::capabilities().push_manager
    }

    fn has_notifications(&self) -> bool {
        bridge::capabilities().notifications
    }

    fn has_storage_estimate(&self) -> bool {
        bridge::capabilities().storage_estimate
    }

    fn has_background_sync(&self) -> bool {
        bridge::capabilities().background_sync
    }

    fn has_cache_storage(&self) -> bool {
        bridge::capabilities().cache_storage
    }

    fn is_standalone(&self) -> bool {
        bridge::capabilities().standalone
    }

    fn is_online(&self) -> bool {
        bridge::capabilities().online
    }

    fn capabilities(&self) -> PwaCapabilities {
        bridge::capabilities()
    }
}

impl PwaHost for WebPwaHost {
    fn notification_permission(&self) -> NotificationPermission {
        bridge::notification_permission()
    }

    fn request_notification_permission<'a>(
        &'a self,
    ) -> PwaHostFuture<'a, Result<NotificationPermission, String>> {
        Box::pin(async move { bridge::request_notification_permission().await })
    }

    fn service_worker_ready<'a>(&'a self) -> PwaHostFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::service_worker_ready().await })
    }

    fn push_subscribe<'a>(
        &'a self,
        application_server_key: &'a [u8],
    ) -> PwaHostFuture<'a, Result<PushSubscription, String>> {
        Box::pin(async move { bridge::push_subscribe(application_server_key).await })
    }

    fn push_subscription<'a>(
        &'a self,
    ) -> PwaHostFuture<'a, Result<Option<PushSubscription>, String>> {
        Box::pin(async move { bridge::push_subscription().await })
    }

    fn push_unsubscribe<'a>(&'a self) -> PwaHostFuture<'a, Result<bool, String>> {
        Box::pin(async move { bridge::push_unsubscribe().await })
    }

    fn show_notification<'a>(
        &'a self,
        title: &'a str,
        options: &'a NotificationOptions,
    ) -> PwaHostFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::show_notification(title, options).await })
    }

    fn post_message<'a>(&'a self, message: &'a Value) -> PwaHostFuture<'a, Result<bool, String>> {
        Box::pin(async move { bridge::post_message(message).await })
    }

    fn cache_names<'a>(&'a self) -> PwaHostFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async move { bridge::cache_names().await })
    }

    fn delete_cache<'a>(&'a self, cache_name: &'a str) -> PwaHostFuture<'a, Result<bool, String>> {
        Box::pin(async move { bridge::delete_cache(cache_name).await })
    }

    fn storage_estimate<'a>(&'a self) -> PwaHostFuture<'a, Result<StorageEstimate, String>> {
        Box::pin(async move { bridge::storage_estimate().await })
    }

    fn register_sync<'a>(&'a self, tag: &'a str) -> PwaHostFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::register_sync(tag).await })
    }

    fn add_network_listeners(
        &self,
        on_online: ListenerCallback,
        on_offline: ListenerCallback,
    ) -> ListenerCleanup {
        bridge::add_network_listeners(on_online, on_offline)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn web_host_reports_no_capabilities_off_wasm() {
        let host = WebPwaHost;
        let host_obj: &dyn PwaHost = &host;
        assert_eq!(host_obj.capabilities(), PwaCapabilities::none());
        assert!(!host_obj.has_service_worker());
        assert!(!host_obj.is_online());
        assert_eq!(block_on(host_obj.cache_names()).expect("names"), Vec::<String>::new());
    }
}
