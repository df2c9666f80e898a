//! PWA capability facade composed over an injected [`PwaHost`].

use std::rc::Rc;

use futures::future::join_all;
use serde_json::Value;

use crate::{
    default_notification_options, merge_notification_options, url_base64_to_bytes,
    CacheStorageUsage, DeferredInstallPrompt, InstallOutcome, InstallPromptSlot, ListenerCleanup,
    NotificationOptions, NotificationPermission, PwaCapabilities, PwaConfig, PwaError, PwaHost,
    PushSubscription,
};

/// Capability facade over a [`PwaHost`].
///
/// Apart from the install prompt slot the facade is stateless: every query goes to the host.
/// Failures degrade to `false`/`None` except for the precondition and platform errors
/// documented on each method.
pub struct PwaFacade {
    host: Rc<dyn PwaHost>,
    config: PwaConfig,
    install_prompt: InstallPromptSlot,
}

impl std::fmt::Debug for PwaFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PwaFacade")
            .field("capabilities", &self.host.capabilities())
            .field("config", &self.config)
            .field("install_prompt", &self.install_prompt)
            .finish()
    }
}

impl PwaFacade {
    /// Creates a facade with the default config.
    pub fn new(host: Rc<dyn PwaHost>) -> Self {
        Self::with_config(host, PwaConfig::default())
    }

    /// Creates a facade with an explicit config.
    pub fn with_config(host: Rc<dyn PwaHost>, config: PwaConfig) -> Self {
        Self {
            host,
            config,
            install_prompt: InstallPromptSlot::default(),
        }
    }

    /// Returns the active config.
    pub fn config(&self) -> &PwaConfig {
        &self.config
    }

    /// Returns a fresh capability snapshot.
    pub fn capabilities(&self) -> PwaCapabilities {
        self.host.capabilities()
    }

    /// Returns whether the app runs installed (standalone display mode).
    pub fn is_pwa_installed(&self) -> bool {
        self.host.is_standalone()
    }

    /// Returns whether service workers are available.
    pub fn is_service_worker_supported(&self) -> bool {
        self.host.has_service_worker()
    }

    /// Returns whether push needs are met: service workers plus a push manager.
    pub fn is_push_notification_supported(&self) -> bool {
        self.host.has_service_worker() && self.host.has_push_manager()
    }

    /// Returns whether the host reports connectivity.
    pub fn is_online(&self) -> bool {
        self.host.is_online()
    }

    /// Reads the notification permission; `Unsupported` without a notifications API.
    pub fn get_notification_permission(&self) -> NotificationPermission {
        if !self.host.has_notifications() {
            return NotificationPermission::Unsupported;
        }
        self.host.notification_permission()
    }

    /// Asks for notification permission and returns whether it was granted.
    ///
    /// Resolves immediately when the user already decided. Platform failures are logged and
    /// reported as `false`.
    pub async fn request_notification_permission(&self) -> bool {
        if !self.host.has_notifications() {
            return false;
        }
        match self.host.request_notification_permission().await {
            Ok(permission) => permission.is_granted(),
            Err(err) => {
                log::warn!("notification permission request failed: {err}");
                false
            }
        }
    }

    /// Subscribes to push messages with the server's URL-safe base64 VAPID key.
    ///
    /// Registers a new endpoint with the push service as a side effect.
    ///
    /// # Errors
    ///
    /// - [`PwaError::PushUnsupported`] without service workers or a push manager.
    /// - [`PwaError::PermissionNotGranted`] when the permission request is not granted.
    /// - [`PwaError::InvalidVapidKey`] when the key does not decode.
    /// - [`PwaError::Platform`] when readiness or the subscribe call fails.
    pub async fn subscribe_to_push_notifications(
        &self,
        server_public_key: &str,
    ) -> Result<PushSubscription, PwaError> {
        if !self.is_push_notification_supported() {
            return Err(PwaError::PushUnsupported);
        }
        if !self.request_notification_permission().await {
            return Err(PwaError::PermissionNotGranted);
        }
        self.host
            .service_worker_ready()
            .await
            .map_err(PwaError::Platform)?;
        let application_server_key = url_base64_to_bytes(server_public_key)?;
        self.host
            .push_subscribe(&application_server_key)
            .await
            .map_err(PwaError::Platform)
    }

    /// Cancels the current push subscription. Returns `false` when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`PwaError::Platform`] when readiness, lookup or cancellation fails.
    pub async fn unsubscribe_from_push_notifications(&self) -> Result<bool, PwaError> {
        if !self.is_push_notification_supported() {
            return Ok(false);
        }
        self.host
            .service_worker_ready()
            .await
            .map_err(PwaError::Platform)?;
        let current = self
            .host
            .push_subscription()
            .await
            .map_err(PwaError::Platform)?;
        if current.is_none() {
            return Ok(false);
        }
        self.host
            .push_unsubscribe()
            .await
            .map_err(PwaError::Platform)
    }

    /// Returns the current push subscription, or `None` when unavailable.
    pub async fn get_push_subscription(&self) -> Option<PushSubscription> {
        if !self.is_push_notification_supported() {
            return None;
        }
        if let Err(err) = self.host.service_worker_ready().await {
            log::warn!("push subscription lookup skipped, service worker not ready: {err}");
            return None;
        }
        self.host
            .push_subscription()
            .await
            .map_err(|err| log::warn!("push subscription lookup failed: {err}"))
            .ok()
            .flatten()
    }

    /// Shows a notification through the worker registration.
    ///
    /// `options` are merged over the configured icon and badge; caller keys win. Returns
    /// `Ok(false)` without showing anything when permission is not granted.
    ///
    /// # Errors
    ///
    /// Returns [`PwaError::Platform`] when readiness or the display call fails.
    pub async fn show_local_notification(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<bool, PwaError> {
        if !self.request_notification_permission().await {
            return Ok(false);
        }
        self.host
            .service_worker_ready()
            .await
            .map_err(PwaError::Platform)?;
        let merged =
            merge_notification_options(&default_notification_options(&self.config), options);
        self.host
            .show_notification(title, &merged)
            .await
            .map_err(PwaError::Platform)?;
        Ok(true)
    }

    /// Attaches online/offline callbacks. Both stay attached until the returned handle is
    /// cleaned up or dropped.
    pub fn add_network_listeners(
        &self,
        on_online: impl Fn() + 'static,
        on_offline: impl Fn() + 'static,
    ) -> ListenerCleanup {
        self.host
            .add_network_listeners(Box::new(on_online), Box::new(on_offline))
    }

    /// Posts `message` to the active worker. Fire-and-forget; `false` when no worker is active.
    pub async fn send_message_to_service_worker(&self, message: &Value) -> bool {
        if !self.host.has_service_worker() {
            return false;
        }
        if let Err(err) = self.host.service_worker_ready().await {
            log::warn!("service worker message dropped, worker not ready: {err}");
            return false;
        }
        match self.host.post_message(message).await {
            Ok(delivered) => delivered,
            Err(err) => {
                log::warn!("service worker message failed: {err}");
                false
            }
        }
    }

    /// Deletes every named cache store.
    ///
    /// Best-effort: every deletion is attempted even when some fail. Returns `true` once all
    /// deletions were attempted and `false` when cache storage is absent or cannot be listed.
    pub async fn clear_all_caches(&self) -> bool {
        if !self.host.has_cache_storage() {
            return false;
        }
        let names = match self.host.cache_names().await {
            Ok(names) => names,
            Err(err) => {
                log::warn!("cache listing failed: {err}");
                return false;
            }
        };

        let results = join_all(names.iter().map(|name| self.host.delete_cache(name))).await;
        for (name, result) in names.iter().zip(results) {
            match result {
                Ok(true) => {}
                Ok(false) => log::debug!("cache `{name}` was already gone"),
                Err(err) => log::warn!("cache `{name}` could not be deleted: {err}"),
            }
        }
        true
    }

    /// Returns quota, usage and percentage used, or `None` without an estimate API.
    pub async fn get_cache_storage_usage(&self) -> Option<CacheStorageUsage> {
        if !self.host.has_storage_estimate() {
            return None;
        }
        self.host
            .storage_estimate()
            .await
            .map(CacheStorageUsage::from_estimate)
            .map_err(|err| log::warn!("storage estimate failed: {err}"))
            .ok()
    }

    /// Registers a background sync `tag`. Returns whether registration succeeded.
    pub async fn register_background_sync(&self, tag: &str) -> bool {
        if !self.host.has_background_sync() {
            return false;
        }
        if let Err(err) = self.host.service_worker_ready().await {
            log::warn!("background sync `{tag}` not registered, worker not ready: {err}");
            return false;
        }
        match self.host.register_sync(tag).await {
            Ok(()) => true,
            Err(err) => {
                log::warn!("background sync `{tag}` registration failed: {err}");
                false
            }
        }
    }

    /// Stores the platform's deferred install prompt, replacing any pending one.
    ///
    /// Callers suppress the platform default prompt before handing the event over.
    pub fn capture_install_prompt(&self, prompt: Box<dyn DeferredInstallPrompt>) {
        if self.install_prompt.capture(prompt) {
            log::debug!("replaced pending install prompt");
        } else {
            log::debug!("install prompt captured");
        }
    }

    /// Returns whether an install prompt is pending.
    pub fn can_install_pwa(&self) -> bool {
        self.install_prompt.is_pending()
    }

    /// Shows the pending install prompt and returns whether the user accepted.
    ///
    /// The prompt is consumed before the platform is awaited, whatever the outcome. Returns
    /// `false` without touching the platform when nothing is pending.
    pub async fn prompt_pwa_install(&self) -> bool {
        let Some(prompt) = self.install_prompt.take() else {
            return false;
        };
        match prompt.prompt().await {
            Ok(outcome) => {
                log::debug!("install prompt resolved: {outcome:?}");
                outcome == InstallOutcome::Accepted
            }
            Err(err) => {
                log::warn!("install prompt failed: {err}");
                false
            }
        }
    }

    /// Drops the pending install prompt once the app has been installed.
    pub fn handle_app_installed(&self) {
        if self.install_prompt.clear() {
            log::debug!("app installed, pending install prompt dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{MemoryInstallPrompt, MemoryPwaHost, NoopPwaHost, StorageEstimate};

    fn facade_with(host: &MemoryPwaHost) -> PwaFacade {
        PwaFacade::new(Rc::new(host.clone()))
    }

    #[test]
    fn capability_queries_follow_the_host() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        assert!(facade.is_service_worker_supported());
        assert!(facade.is_push_notification_supported());
        assert!(facade.is_online());
        assert!(!facade.is_pwa_installed());

        host.set_capabilities(PwaCapabilities {
            push_manager: false,
            standalone: true,
            ..PwaCapabilities::full()
        });
        assert!(!facade.is_push_notification_supported());
        assert!(facade.is_pwa_installed());
    }

    #[test]
    fn permission_is_unsupported_without_notifications() {
        let host = MemoryPwaHost::new(PwaCapabilities {
            notifications: false,
            ..PwaCapabilities::full()
        });
        host.set_permission(NotificationPermission::Granted);
        let facade = facade_with(&host);
        assert_eq!(
            facade.get_notification_permission(),
            NotificationPermission::Unsupported
        );
        assert!(!block_on(facade.request_notification_permission()));
        assert_eq!(host.permission_requests(), 0);
    }

    #[test]
    fn permission_request_failure_resolves_false() {
        let host = MemoryPwaHost::default();
        host.fail_permission_request("prompt blew up");
        let facade = facade_with(&host);
        assert!(!block_on(facade.request_notification_permission()));
    }

    #[test]
    fn permission_request_reports_user_choice() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        assert_eq!(
            facade.get_notification_permission(),
            NotificationPermission::Default
        );
        assert!(block_on(facade.request_notification_permission()));
        assert_eq!(
            facade.get_notification_permission(),
            NotificationPermission::Granted
        );

        host.set_permission(NotificationPermission::Denied);
        assert!(!block_on(facade.request_notification_permission()));
    }

    #[test]
    fn subscribe_decodes_key_and_records_subscription() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);

        let subscription =
            block_on(facade.subscribe_to_push_notifications("-_8")).expect("subscribe");
        assert_eq!(host.subscribed_keys(), vec![vec![0xfb, 0xff]]);
        assert_eq!(block_on(facade.get_push_subscription()), Some(subscription));
    }

    #[test]
    fn subscribe_fails_without_push_support() {
        let host = MemoryPwaHost::new(PwaCapabilities {
            push_manager: false,
            ..PwaCapabilities::full()
        });
        let facade = facade_with(&host);
        assert_eq!(
            block_on(facade.subscribe_to_push_notifications("SGk")),
            Err(PwaError::PushUnsupported)
        );
        assert_eq!(host.permission_requests(), 0);
    }

    #[test]
    fn subscribe_fails_when_permission_denied() {
        let host = MemoryPwaHost::default();
        host.set_permission_response(NotificationPermission::Denied);
        let facade = facade_with(&host);
        assert_eq!(
            block_on(facade.subscribe_to_push_notifications("SGk")),
            Err(PwaError::PermissionNotGranted)
        );
        assert!(host.subscribed_keys().is_empty());
    }

    #[test]
    fn subscribe_rejects_malformed_key() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        assert!(matches!(
            block_on(facade.subscribe_to_push_notifications("a")),
            Err(PwaError::InvalidVapidKey(_))
        ));
    }

    #[test]
    fn subscribe_surfaces_readiness_failure() {
        let host = MemoryPwaHost::default();
        host.fail_service_worker_ready("registration failed");
        let facade = facade_with(&host);
        assert_eq!(
            block_on(facade.subscribe_to_push_notifications("SGk")),
            Err(PwaError::Platform("registration failed".to_string()))
        );
    }

    #[test]
    fn unsubscribe_without_subscription_is_a_no_op() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        assert_eq!(block_on(facade.unsubscribe_from_push_notifications()), Ok(false));

        block_on(facade.subscribe_to_push_notifications("SGk")).expect("subscribe");
        assert_eq!(block_on(facade.unsubscribe_from_push_notifications()), Ok(true));
        assert_eq!(host.subscription(), None);
        assert_eq!(block_on(facade.get_push_subscription()), None);
    }

    #[test]
    fn unsubscribe_cancels_an_existing_subscription() {
        let host = MemoryPwaHost::default();
        host.set_subscription(Some(PushSubscription {
            endpoint: "https://push.example/existing".to_string(),
            expiration_time: Some(1_700_000_000_000.0),
            keys: Default::default(),
        }));
        let facade = facade_with(&host);

        assert_eq!(block_on(facade.unsubscribe_from_push_notifications()), Ok(true));
        assert_eq!(host.subscription(), None);
    }

    #[test]
    fn unsubscribe_surfaces_readiness_failure() {
        let host = MemoryPwaHost::default();
        host.set_subscription(Some(PushSubscription {
            endpoint: "https://push.example/existing".to_string(),
            expiration_time: None,
            keys: Default::default(),
        }));
        host.fail_service_worker_ready("registration failed");
        let facade = facade_with(&host);

        assert_eq!(
            block_on(facade.unsubscribe_from_push_notifications()),
            Err(PwaError::Platform("registration failed".to_string()))
        );
        assert!(host.subscription().is_some());
    }

    #[test]
    fn push_subscription_is_none_when_worker_not_ready() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        block_on(facade.subscribe_to_push_notifications("SGk")).expect("subscribe");

        host.fail_service_worker_ready("registration failed");
        assert_eq!(block_on(facade.get_push_subscription()), None);
    }

    #[test]
    fn push_subscription_is_none_when_lookup_fails() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        block_on(facade.subscribe_to_push_notifications("SGk")).expect("subscribe");

        host.fail_subscription_lookup("getSubscription() rejected");
        assert_eq!(block_on(facade.get_push_subscription()), None);
        assert!(host.subscription().is_some());
    }

    #[test]
    fn push_subscription_is_none_without_service_worker() {
        let host = MemoryPwaHost::new(PwaCapabilities {
            service_worker: false,
            ..PwaCapabilities::full()
        });
        let facade = facade_with(&host);
        assert_eq!(block_on(facade.get_push_subscription()), None);
    }

    #[test]
    fn local_notification_merges_defaults_under_caller_options() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        let options = json!({"body": "Scenario saved", "badge": "/custom-badge.png"})
            .as_object()
            .cloned()
            .expect("object");

        assert_eq!(
            block_on(facade.show_local_notification("Saved", &options)),
            Ok(true)
        );
        let shown = host.shown_notifications();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, "Saved");
        assert_eq!(
            Value::Object(shown[0].1.clone()),
            json!({
                "icon": "/icons/icon-192x192.png",
                "badge": "/custom-badge.png",
                "body": "Scenario saved",
            })
        );
    }

    #[test]
    fn local_notification_uses_configured_assets() {
        let host = MemoryPwaHost::default();
        let config = PwaConfig {
            notification_icon: "/brand/icon.png".to_string(),
            notification_badge: "/brand/badge.png".to_string(),
        };
        let facade = PwaFacade::with_config(Rc::new(host.clone()), config);
        assert_eq!(facade.config().notification_icon, "/brand/icon.png");

        assert_eq!(
            block_on(facade.show_local_notification("Hi", &NotificationOptions::new())),
            Ok(true)
        );
        let (_, options) = host.shown_notifications().remove(0);
        assert_eq!(options["icon"], "/brand/icon.png");
        assert_eq!(options["badge"], "/brand/badge.png");
    }

    #[test]
    fn local_notification_is_skipped_when_denied() {
        let host = MemoryPwaHost::default();
        host.set_permission(NotificationPermission::Denied);
        let facade = facade_with(&host);
        assert_eq!(
            block_on(facade.show_local_notification("Hi", &NotificationOptions::new())),
            Ok(false)
        );
        assert!(host.shown_notifications().is_empty());
    }

    #[test]
    fn local_notification_surfaces_readiness_failure() {
        let host = MemoryPwaHost::default();
        host.fail_service_worker_ready("registration failed");
        let facade = facade_with(&host);
        assert_eq!(
            block_on(facade.show_local_notification("Hi", &NotificationOptions::new())),
            Err(PwaError::Platform("registration failed".to_string()))
        );
        assert!(host.shown_notifications().is_empty());
    }

    #[test]
    fn dropping_network_cleanup_detaches_both_callbacks() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        let fired = Rc::new(Cell::new(0));

        {
            let online = Rc::clone(&fired);
            let offline = Rc::clone(&fired);
            let _cleanup = facade.add_network_listeners(
                move || online.set(online.get() + 1),
                move || offline.set(offline.get() + 1),
            );
            assert_eq!(host.network_listener_counts(), (1, 1));
        }

        assert_eq!(host.network_listener_counts(), (0, 0));
        host.go_offline();
        host.go_online();
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn network_cleanup_stops_both_callbacks() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        let online = Rc::new(Cell::new(0));
        let offline = Rc::new(Cell::new(0));

        let cleanup = {
            let online = Rc::clone(&online);
            let offline = Rc::clone(&offline);
            facade.add_network_listeners(
                move || online.set(online.get() + 1),
                move || offline.set(offline.get() + 1),
            )
        };

        host.go_offline();
        host.go_online();
        assert_eq!((online.get(), offline.get()), (1, 1));
        assert!(facade.is_online());

        cleanup.cleanup();
        assert_eq!(host.network_listener_counts(), (0, 0));
        host.go_offline();
        host.go_online();
        assert_eq!((online.get(), offline.get()), (1, 1));
    }

    #[test]
    fn messages_reach_only_an_active_worker() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        let message = json!({"type": "SKIP_WAITING"});

        assert!(block_on(facade.send_message_to_service_worker(&message)));
        host.set_active_worker(false);
        assert!(!block_on(facade.send_message_to_service_worker(&message)));
        assert_eq!(host.posted_messages(), vec![message]);
    }

    #[test]
    fn messages_need_service_worker_support() {
        let host = MemoryPwaHost::new(PwaCapabilities::none());
        let facade = facade_with(&host);
        assert!(!block_on(facade.send_message_to_service_worker(&json!(1))));
        assert!(host.posted_messages().is_empty());
    }

    #[test]
    fn messages_are_dropped_when_worker_not_ready() {
        let host = MemoryPwaHost::default();
        host.fail_service_worker_ready("registration failed");
        let facade = facade_with(&host);
        assert!(!block_on(facade.send_message_to_service_worker(&json!("ping"))));
        assert!(host.posted_messages().is_empty());
    }

    #[test]
    fn messages_are_dropped_when_posting_fails() {
        let host = MemoryPwaHost::default();
        host.fail_post_message("DataCloneError");
        let facade = facade_with(&host);
        assert!(!block_on(facade.send_message_to_service_worker(&json!("ping"))));
        assert!(host.posted_messages().is_empty());
    }

    #[test]
    fn clearing_zero_caches_succeeds() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        assert!(block_on(facade.clear_all_caches()));
        assert!(host.cache_delete_attempts().is_empty());
    }

    #[test]
    fn clearing_caches_is_best_effort() {
        let host = MemoryPwaHost::default();
        for name in ["api-v1", "pages-v1", "static-v1"] {
            host.add_cache(name);
        }
        host.fail_cache_delete("pages-v1");
        let facade = facade_with(&host);

        assert!(block_on(facade.clear_all_caches()));
        assert_eq!(
            host.cache_delete_attempts(),
            vec![
                "api-v1".to_string(),
                "pages-v1".to_string(),
                "static-v1".to_string()
            ]
        );
        assert_eq!(host.cache_store_names(), vec!["pages-v1".to_string()]);
    }

    #[test]
    fn clearing_caches_without_cache_storage_returns_false() {
        let host = MemoryPwaHost::new(PwaCapabilities {
            cache_storage: false,
            ..PwaCapabilities::full()
        });
        assert!(!block_on(facade_with(&host).clear_all_caches()));
    }

    #[test]
    fn clearing_caches_returns_false_when_listing_fails() {
        let host = MemoryPwaHost::default();
        host.fail_cache_listing("keys() rejected");
        assert!(!block_on(facade_with(&host).clear_all_caches()));
    }

    #[test]
    fn cache_usage_reports_percentage() {
        let host = MemoryPwaHost::default();
        host.set_storage_estimate(StorageEstimate {
            quota: 200,
            usage: 50,
        });
        let usage = block_on(facade_with(&host).get_cache_storage_usage()).expect("usage");
        assert_eq!(
            usage,
            CacheStorageUsage {
                quota: 200,
                usage: 50,
                percent_used: "25.00".to_string(),
            }
        );
    }

    #[test]
    fn cache_usage_is_none_without_estimate_api() {
        let host = MemoryPwaHost::new(PwaCapabilities {
            storage_estimate: false,
            ..PwaCapabilities::full()
        });
        assert_eq!(block_on(facade_with(&host).get_cache_storage_usage()), None);
    }

    #[test]
    fn cache_usage_is_none_when_estimate_fails() {
        let host = MemoryPwaHost::default();
        host.fail_storage_estimate("estimate() rejected");
        assert_eq!(block_on(facade_with(&host).get_cache_storage_usage()), None);
    }

    #[test]
    fn background_sync_registers_tags() {
        let host = MemoryPwaHost::default();
        let facade = facade_with(&host);
        assert!(block_on(facade.register_background_sync("sync-scenarios")));
        assert_eq!(host.sync_tags(), vec!["sync-scenarios".to_string()]);

        host.fail_sync("quota exceeded");
        assert!(!block_on(facade.register_background_sync("sync-again")));
    }

    #[test]
    fn background_sync_unavailable_returns_false() {
        let host = MemoryPwaHost::new(PwaCapabilities {
            background_sync: false,
            ..PwaCapabilities::full()
        });
        let facade = facade_with(&host);
        assert!(!block_on(facade.register_background_sync("sync-scenarios")));
        assert!(host.sync_tags().is_empty());
    }

    #[test]
    fn background_sync_needs_a_ready_worker() {
        let host = MemoryPwaHost::default();
        host.fail_service_worker_ready("registration failed");
        let facade = facade_with(&host);
        assert!(!block_on(facade.register_background_sync("sync-scenarios")));
        assert!(host.sync_tags().is_empty());
    }

    #[test]
    fn install_prompt_is_single_use() {
        let facade = facade_with(&MemoryPwaHost::default());
        let prompt = MemoryInstallPrompt::accepting();

        assert!(!facade.can_install_pwa());
        facade.capture_install_prompt(Box::new(prompt.clone()));
        assert!(facade.can_install_pwa());

        assert!(block_on(facade.prompt_pwa_install()));
        assert!(!facade.can_install_pwa());
        assert!(!block_on(facade.prompt_pwa_install()));
        assert_eq!(prompt.prompt_count(), 1);
    }

    #[test]
    fn dismissed_or_failed_prompts_are_still_consumed() {
        let facade = facade_with(&MemoryPwaHost::default());

        facade.capture_install_prompt(Box::new(MemoryInstallPrompt::dismissing()));
        assert!(!block_on(facade.prompt_pwa_install()));
        assert!(!facade.can_install_pwa());

        facade.capture_install_prompt(Box::new(MemoryInstallPrompt::with_outcome(Err(
            "prompt() already called".to_string(),
        ))));
        assert!(!block_on(facade.prompt_pwa_install()));
        assert!(!facade.can_install_pwa());
    }

    #[test]
    fn app_installed_drops_pending_prompt() {
        let facade = facade_with(&MemoryPwaHost::default());
        let prompt = MemoryInstallPrompt::accepting();
        facade.capture_install_prompt(Box::new(prompt.clone()));

        facade.handle_app_installed();
        assert!(!facade.can_install_pwa());
        assert!(!block_on(facade.prompt_pwa_install()));
        assert_eq!(prompt.prompt_count(), 0);
    }

    #[test]
    fn noop_host_degrades_everything() {
        let facade = PwaFacade::new(Rc::new(NoopPwaHost));
        assert_eq!(
            facade.get_notification_permission(),
            NotificationPermission::Unsupported
        );
        assert!(!block_on(facade.request_notification_permission()));
        assert_eq!(
            block_on(facade.subscribe_to_push_notifications("SGk")),
            Err(PwaError::PushUnsupported)
        );
        assert_eq!(block_on(facade.unsubscribe_from_push_notifications()), Ok(false));
        assert!(!block_on(facade.clear_all_caches()));
        assert_eq!(block_on(facade.get_cache_storage_usage()), None);
        assert!(!block_on(facade.register_background_sync("x")));
        facade.add_network_listeners(|| {}, || {}).cleanup();
    }
}
