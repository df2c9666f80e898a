//! In-memory PWA host used by tests and headless compositions.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeSet,
    rc::Rc,
};

use serde_json::Value;

use crate::{
    CapabilityProvider, DeferredInstallPrompt, InstallOutcome, InstallPromptFuture,
    ListenerCallback, ListenerCleanup, NotificationOptions, NotificationPermission, PwaCapabilities,
    PwaHost, PwaHostFuture, PushSubscription, PushSubscriptionKeys, StorageEstimate,
};

type SharedCallback = Rc<dyn Fn()>;

fn require(present: bool, what: &str) -> Result<(), String> {
    if present {
        Ok(())
    } else {
        Err(format!("{what} unavailable"))
    }
}

struct MemoryPwaState {
    capabilities: PwaCapabilities,
    permission: NotificationPermission,
    permission_response: NotificationPermission,
    permission_failure: Option<String>,
    permission_requests: usize,
    ready_failure: Option<String>,
    subscription: Option<PushSubscription>,
    lookup_failure: Option<String>,
    subscribed_keys: Vec<Vec<u8>>,
    shown_notifications: Vec<(String, NotificationOptions)>,
    active_worker: bool,
    posted_messages: Vec<Value>,
    post_failure: Option<String>,
    caches: BTreeSet<String>,
    cache_list_failure: Option<String>,
    failing_cache_deletes: BTreeSet<String>,
    delete_attempts: Vec<String>,
    estimate: StorageEstimate,
    estimate_failure: Option<String>,
    sync_tags: Vec<String>,
    sync_failure: Option<String>,
    next_listener_id: u64,
    online_listeners: Vec<(u64, SharedCallback)>,
    offline_listeners: Vec<(u64, SharedCallback)>,
}

impl MemoryPwaState {
    fn new(capabilities: PwaCapabilities) -> Self {
        Self {
            capabilities,
            permission: NotificationPermission::Default,
            permission_response: NotificationPermission::Granted,
            permission_failure: None,
            permission_requests: 0,
            ready_failure: None,
            subscription: None,
            lookup_failure: None,
            subscribed_keys: Vec::new(),
            shown_notifications: Vec::new(),
            active_worker: true,
            posted_messages: Vec::new(),
            post_failure: None,
            caches: BTreeSet::new(),
            cache_list_failure: None,
            failing_cache_deletes: BTreeSet::new(),
            delete_attempts: Vec::new(),
            estimate: StorageEstimate::default(),
            estimate_failure: None,
            sync_tags: Vec::new(),
            sync_failure: None,
            next_listener_id: 0,
            online_listeners: Vec::new(),
            offline_listeners: Vec::new(),
        }
    }
}

/// Scriptable in-memory [`PwaHost`].
///
/// Clones share state, so a test can keep one handle for inspection while the facade owns
/// another.
#[derive(Clone)]
pub struct MemoryPwaHost {
    inner: Rc<RefCell<MemoryPwaState>>,
}

impl Default for MemoryPwaHost {
    fn default() -> Self {
        Self::new(PwaCapabilities::full())
    }
}

impl std::fmt::Debug for MemoryPwaHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("MemoryPwaHost")
            .field("capabilities", &state.capabilities)
            .field("permission", &state.permission)
            .field("caches", &state.caches)
            .finish_non_exhaustive()
    }
}

impl MemoryPwaHost {
    /// Creates a host with the given capabilities and an undecided permission.
    pub fn new(capabilities: PwaCapabilities) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryPwaState::new(capabilities))),
        }
    }

    /// Replaces the capability flags.
    pub fn set_capabilities(&self, capabilities: PwaCapabilities) {
        self.inner.borrow_mut().capabilities = capabilities;
    }

    /// Sets the current permission state.
    pub fn set_permission(&self, permission: NotificationPermission) {
        self.inner.borrow_mut().permission = permission;
    }

    /// Sets what the user answers when prompted for an undecided permission.
    pub fn set_permission_response(&self, response: NotificationPermission) {
        self.inner.borrow_mut().permission_response = response;
    }

    /// Makes every permission request fail with `message`.
    pub fn fail_permission_request(&self, message: impl Into<String>) {
        self.inner.borrow_mut().permission_failure = Some(message.into());
    }

    /// Number of permission prompts requested so far.
    pub fn permission_requests(&self) -> usize {
        self.inner.borrow().permission_requests
    }

    /// Makes worker readiness fail with `message`.
    pub fn fail_service_worker_ready(&self, message: impl Into<String>) {
        self.inner.borrow_mut().ready_failure = Some(message.into());
    }

    /// Installs an existing push subscription.
    pub fn set_subscription(&self, subscription: Option<PushSubscription>) {
        self.inner.borrow_mut().subscription = subscription;
    }

    /// Makes looking up the current push subscription fail with `message`.
    pub fn fail_subscription_lookup(&self, message: impl Into<String>) {
        self.inner.borrow_mut().lookup_failure = Some(message.into());
    }

    /// Returns the current push subscription.
    pub fn subscription(&self) -> Option<PushSubscription> {
        self.inner.borrow().subscription.clone()
    }

    /// Application server keys passed to every subscribe call.
    pub fn subscribed_keys(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().subscribed_keys.clone()
    }

    /// Notifications shown so far as `(title, options)` pairs.
    pub fn shown_notifications(&self) -> Vec<(String, NotificationOptions)> {
        self.inner.borrow().shown_notifications.clone()
    }

    /// Sets whether an active worker receives messages.
    pub fn set_active_worker(&self, active: bool) {
        self.inner.borrow_mut().active_worker = active;
    }

    /// Makes posting to the active worker fail with `message`.
    pub fn fail_post_message(&self, message: impl Into<String>) {
        self.inner.borrow_mut().post_failure = Some(message.into());
    }

    /// Messages delivered to the active worker.
    pub fn posted_messages(&self) -> Vec<Value> {
        self.inner.borrow().posted_messages.clone()
    }

    /// Adds a named cache store.
    pub fn add_cache(&self, cache_name: impl Into<String>) {
        self.inner.borrow_mut().caches.insert(cache_name.into());
    }

    /// Current cache names in sorted order.
    pub fn cache_store_names(&self) -> Vec<String> {
        self.inner.borrow().caches.iter().cloned().collect()
    }

    /// Makes listing cache names fail with `message`.
    pub fn fail_cache_listing(&self, message: impl Into<String>) {
        self.inner.borrow_mut().cache_list_failure = Some(message.into());
    }

    /// Makes deleting `cache_name` fail.
    pub fn fail_cache_delete(&self, cache_name: impl Into<String>) {
        self.inner
            .borrow_mut()
            .failing_cache_deletes
            .insert(cache_name.into());
    }

    /// Every cache deletion attempted, in call order.
    pub fn cache_delete_attempts(&self) -> Vec<String> {
        self.inner.borrow().delete_attempts.clone()
    }

    /// Sets the storage estimate.
    pub fn set_storage_estimate(&self, estimate: StorageEstimate) {
        self.inner.borrow_mut().estimate = estimate;
    }

    /// Makes the storage estimate fail with `message`.
    pub fn fail_storage_estimate(&self, message: impl Into<String>) {
        self.inner.borrow_mut().estimate_failure = Some(message.into());
    }

    /// Background sync tags registered so far.
    pub fn sync_tags(&self) -> Vec<String> {
        self.inner.borrow().sync_tags.clone()
    }

    /// Makes sync registration fail with `message`.
    pub fn fail_sync(&self, message: impl Into<String>) {
        self.inner.borrow_mut().sync_failure = Some(message.into());
    }

    /// Number of attached `(online, offline)` listeners.
    pub fn network_listener_counts(&self) -> (usize, usize) {
        let state = self.inner.borrow();
        (state.online_listeners.len(), state.offline_listeners.len())
    }

    /// Simulates a transition to online and fires the online listeners.
    pub fn go_online(&self) {
        let callbacks = {
            let mut state = self.inner.borrow_mut();
            state.capabilities.online = true;
            state
                .online_listeners
                .iter()
                .map(|(_, cb)| Rc::clone(cb))
                .collect::<Vec<_>>()
        };
        callbacks.iter().for_each(|cb| cb());
    }

    /// Simulates a transition to offline and fires the offline listeners.
    pub fn go_offline(&self) {
        let callbacks = {
            let mut state = self.inner.borrow_mut();
            state.capabilities.online = false;
            state
                .offline_listeners
                .iter()
                .map(|(_, cb)| Rc::clone(cb))
                .collect::<Vec<_>>()
        };
        callbacks.iter().for_each(|cb| cb());
    }
}

impl CapabilityProvider for MemoryPwaHost {
    fn has_service_worker(&self) -> bool {
        self.inner.borrow().capabilities.service_worker
    }

    fn has_push_manager(&self) -> bool {
        self.inner.borrow().capabilities.push_manager
    }

    fn has_notifications(&self) -> bool {
        self.inner.borrow().capabilities.notifications
    }

    fn has_storage_estimate(&self) -> bool {
        self.inner.borrow().capabilities.storage_estimate
    }

    fn has_background_sync(&self) -> bool {
        self.inner.borrow().capabilities.background_sync
    }

    fn has_cache_storage(&self) -> bool {
        self.inner.borrow().capabilities.cache_storage
    }

    fn is_standalone(&self) -> bool {
        self.inner.borrow().capabilities.standalone
    }

    fn is_online(&self) -> bool {
        self.inner.borrow().capabilities.online
    }
}

impl PwaHost for MemoryPwaHost {
    fn notification_permission(&self) -> NotificationPermission {
        let state = self.inner.borrow();
        if state.capabilities.notifications {
            state.permission
        } else {
            NotificationPermission::Unsupported
        }
    }

    fn request_notification_permission<'a>(
        &'a self,
    ) -> PwaHostFuture<'a, Result<NotificationPermission, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.permission_requests += 1;
            if let Some(message) = state.permission_failure.clone() {
                return Err(message);
            }
            if !state.capabilities.notifications {
                return Ok(NotificationPermission::Unsupported);
            }
            if state.permission == NotificationPermission::Default {
                state.permission = state.permission_response;
            }
            Ok(state.permission)
        })
    }

    fn service_worker_ready<'a>(&'a self) -> PwaHostFuture<'a, Result<(), String>> {
        Box::pin(async move {
            require(self.has_service_worker(), "service worker")?;
            match self.inner.borrow().ready_failure.clone() {
                Some(message) => Err(message),
                None => Ok(()),
            }
        })
    }

    fn push_subscribe<'a>(
        &'a self,
        application_server_key: &'a [u8],
    ) -> PwaHostFuture<'a, Result<PushSubscription, String>> {
        Box::pin(async move {
            require(self.has_push_manager(), "push manager")?;
            let mut state = self.inner.borrow_mut();
            state.subscribed_keys.push(application_server_key.to_vec());
            let subscription = PushSubscription {
                endpoint: format!("https://push.invalid/{}", state.subscribed_keys.len()),
                expiration_time: None,
                keys: PushSubscriptionKeys {
                    p256dh: "memory-p256dh".to_string(),
                    auth: "memory-auth".to_string(),
                },
            };
            state.subscription = Some(subscription.clone());
            Ok(subscription)
        })
    }

    fn push_subscription<'a>(
        &'a self,
    ) -> PwaHostFuture<'a, Result<Option<PushSubscription>, String>> {
        Box::pin(async move {
            require(self.has_push_manager(), "push manager")?;
            let state = self.inner.borrow();
            match state.lookup_failure.clone() {
                Some(message) => Err(message),
                None => Ok(state.subscription.clone()),
            }
        })
    }

    fn push_unsubscribe<'a>(&'a self) -> PwaHostFuture<'a, Result<bool, String>> {
        Box::pin(async move {
            require(self.has_push_manager(), "push manager")?;
            Ok(self.inner.borrow_mut().subscription.take().is_some())
        })
    }

    fn show_notification<'a>(
        &'a self,
        title: &'a str,
        options: &'a NotificationOptions,
    ) -> PwaHostFuture<'a, Result<(), String>> {
        Box::pin(async move {
            require(self.has_notifications(), "notifications")?;
            self.inner
                .borrow_mut()
                .shown_notifications
                .push((title.to_string(), options.clone()));
            Ok(())
        })
    }

    fn post_message<'a>(&'a self, message: &'a Value) -> PwaHostFuture<'a, Result<bool, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            if let Some(message) = state.post_failure.clone() {
                return Err(message);
            }
            if !state.active_worker {
                return Ok(false);
            }
            state.posted_messages.push(message.clone());
            Ok(true)
        })
    }

    fn cache_names<'a>(&'a self) -> PwaHostFuture<'a, Result<Vec<String>, String>> {
        Box::pin(async move {
            require(self.has_cache_storage(), "cache storage")?;
            let state = self.inner.borrow();
            match state.cache_list_failure.clone() {
                Some(message) => Err(message),
                None => Ok(state.caches.iter().cloned().collect()),
            }
        })
    }

    fn delete_cache<'a>(&'a self, cache_name: &'a str) -> PwaHostFuture<'a, Result<bool, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.delete_attempts.push(cache_name.to_string());
            if state.failing_cache_deletes.contains(cache_name) {
                return Err(format!("failed to delete cache `{cache_name}`"));
            }
            Ok(state.caches.remove(cache_name))
        })
    }

    fn storage_estimate<'a>(&'a self) -> PwaHostFuture<'a, Result<StorageEstimate, String>> {
        Box::pin(async move {
            require(self.has_storage_estimate(), "storage estimate")?;
            let state = self.inner.borrow();
            match state.estimate_failure.clone() {
                Some(message) => Err(message),
                None => Ok(state.estimate),
            }
        })
    }

    fn register_sync<'a>(&'a self, tag: &'a str) -> PwaHostFuture<'a, Result<(), String>> {
        Box::pin(async move {
            require(self.has_background_sync(), "background sync")?;
            let mut state = self.inner.borrow_mut();
            if let Some(message) = state.sync_failure.clone() {
                return Err(message);
            }
            state.sync_tags.push(tag.to_string());
            Ok(())
        })
    }

    fn add_network_listeners(
        &self,
        on_online: ListenerCallback,
        on_offline: ListenerCallback,
    ) -> ListenerCleanup {
        let id = {
            let mut state = self.inner.borrow_mut();
            let id = state.next_listener_id;
            state.next_listener_id += 1;
            state.online_listeners.push((id, Rc::from(on_online)));
            state.offline_listeners.push((id, Rc::from(on_offline)));
            id
        };

        let inner = Rc::clone(&self.inner);
        ListenerCleanup::new(move || {
            let mut state = inner.borrow_mut();
            state.online_listeners.retain(|(listener_id, _)| *listener_id != id);
            state.offline_listeners.retain(|(listener_id, _)| *listener_id != id);
        })
    }
}

/// Scripted install prompt that records how often it was shown.
#[derive(Debug, Clone)]
pub struct MemoryInstallPrompt {
    outcome: Result<InstallOutcome, String>,
    prompts: Rc<Cell<usize>>,
}

impl MemoryInstallPrompt {
    /// Prompt the user accepts.
    pub fn accepting() -> Self {
        Self::with_outcome(Ok(InstallOutcome::Accepted))
    }

    /// Prompt the user dismisses.
    pub fn dismissing() -> Self {
        Self::with_outcome(Ok(InstallOutcome::Dismissed))
    }

    /// Prompt resolving with `outcome`.
    pub fn with_outcome(outcome: Result<InstallOutcome, String>) -> Self {
        Self {
            outcome,
            prompts: Rc::new(Cell::new(0)),
        }
    }

    /// Number of times any clone of this prompt was shown.
    pub fn prompt_count(&self) -> usize {
        self.prompts.get()
    }
}

impl DeferredInstallPrompt for MemoryInstallPrompt {
    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>> {
        Box::pin(async move {
            self.prompts.set(self.prompts.get() + 1);
            self.outcome.clone()
        })
    }
}
