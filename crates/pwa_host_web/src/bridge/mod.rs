//! Browser PWA bridge for `pwa_host_web` adapters.
//!
//! Calls route to the `wasm32` interop layer or to a non-wasm shim that reports every
//! capability absent, keeping one API for the host adapter above.

use std::rc::Rc;

use pwa_host::{
    ListenerCallback, ListenerCleanup, NotificationOptions, NotificationPermission,
    PushSubscription, PwaCapabilities, PwaFacade, StorageEstimate,
};
use serde_json::Value;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub(crate) fn capabilities() -> PwaCapabilities {
    imp::capabilities()
}

pub(crate) fn notification_permission() -> NotificationPermission {
    imp::notification_permission()
}

pub(crate) async fn request_notification_permission() -> Result<NotificationPermission, String> {
    imp::request_notification_permission().await
}

pub(crate) async fn service_worker_ready() -> Result<(), String> {
    imp::service_worker_ready().await
}

pub(crate) async fn push_subscribe(
    application_server_key: &[u8],
) -> Result<PushSubscription, String> {
    imp::push_subscribe(application_server_key).await
}

pub(crate) async fn push_subscription() -> Result<Option<PushSubscription>, String> {
    imp::push_subscription().await
}

pub(crate) async fn push_unsubscribe() -> Result<bool, String> {
    imp::push_unsubscribe().await
}

pub(crate) async fn show_notification(
    title: &str,
    options: &NotificationOptions,
) -> Result<(), String> {
    imp::show_notification(title, options).await
}

pub(crate) async fn post_message(message: &Value) -> Result<bool, String> {
    imp::post_message(message).await
}

pub(crate) async fn cache_names() -> Result<Vec<String>, String> {
    imp::cache_names().await
}

pub(crate) async fn delete_cache(cache_name: &str) -> Result<bool, String> {
    imp::delete_cache(cache_name).await
}

pub(crate) async fn storage_estimate() -> Result<StorageEstimate, String> {
    imp::storage_estimate().await
}

pub(crate) async fn register_sync(tag: &str) -> Result<(), String> {
    imp::register_sync(tag).await
}

pub(crate) fn add_network_listeners(
    on_online: ListenerCallback,
    on_offline: ListenerCallback,
) -> ListenerCleanup {
    imp::add_network_listeners(on_online, on_offline)
}

pub(crate) fn install_prompt_listeners(facade: Rc<PwaFacade>) -> ListenerCleanup {
    imp::install_prompt_listeners(facade)
}
