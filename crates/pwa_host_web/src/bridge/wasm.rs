use super::*;
use js_sys::Promise;
use pwa_host::{DeferredInstallPrompt, InstallOutcome, InstallPromptFuture};
use serde::{de::DeserializeOwned, Serialize};
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, EventTarget};

#[wasm_bindgen(inline_js = r#"
function fail(message) {
  throw new Error(message);
}

function hasServiceWorker() {
  return typeof navigator !== 'undefined' && 'serviceWorker' in navigator;
}

function hasPushManager() {
  return typeof window !== 'undefined' && 'PushManager' in window;
}

function hasNotifications() {
  return typeof window !== 'undefined' && 'Notification' in window;
}

function hasStorageEstimate() {
  return typeof navigator !== 'undefined'
    && !!navigator.storage
    && typeof navigator.storage.estimate === 'function';
}

function hasBackgroundSync() {
  return hasServiceWorker() && typeof window !== 'undefined' && 'SyncManager' in window;
}

function hasCacheStorage() {
  return typeof caches !== 'undefined';
}

function isStandalone() {
  if (typeof window === 'undefined') return false;
  const standaloneMedia = typeof window.matchMedia === 'function'
    && window.matchMedia('(display-mode: standalone)').matches;
  return standaloneMedia || window.navigator.standalone === true;
}

function isOnline() {
  return typeof navigator !== 'undefined' && navigator.onLine === true;
}

async function readyRegistration() {
  if (!hasServiceWorker()) {
    fail('Service workers are unavailable in this browser context');
  }
  return await navigator.serviceWorker.ready;
}

async function pushManager() {
  const registration = await readyRegistration();
  if (!registration.pushManager) {
    fail('Push manager unavailable on the service worker registration');
  }
  return registration.pushManager;
}

export function jsCapabilities() {
  return {
    serviceWorker: hasServiceWorker(),
    pushManager: hasPushManager(),
    notifications: hasNotifications(),
    storageEstimate: hasStorageEstimate(),
    backgroundSync: hasBackgroundSync(),
    cacheStorage: hasCacheStorage(),
    standalone: isStandalone(),
    online: isOnline(),
  };
}

export function jsNotificationPermission() {
  return hasNotifications() ? Notification.permission : 'unsupported';
}

export async function jsRequestNotificationPermission() {
  if (!hasNotifications()) return 'unsupported';
  return await new Promise((resolve, reject) => {
    const pending = Notification.requestPermission(resolve);
    if (pending && typeof pending.then === 'function') {
      pending.then(resolve, reject);
    }
  });
}

export async function jsServiceWorkerReady() {
  await readyRegistration();
  return null;
}

export async function jsPushSubscribe(applicationServerKey) {
  const manager = await pushManager();
  const subscription = await manager.subscribe({
    userVisibleOnly: true,
    applicationServerKey: new Uint8Array(applicationServerKey),
  });
  return subscription.toJSON();
}

export async function jsPushSubscription() {
  const manager = await pushManager();
  const subscription = await manager.getSubscription();
  return subscription ? subscription.toJSON() : null;
}

export async function jsPushUnsubscribe() {
  const manager = await pushManager();
  const subscription = await manager.getSubscription();
  if (!subscription) return false;
  return await subscription.unsubscribe();
}

export async function jsShowNotification(title, options) {
  const registration = await readyRegistration();
  await registration.showNotification(title, options);
  return null;
}

export async function jsPostMessage(message) {
  const registration = await readyRegistration();
  if (!registration.active) return false;
  registration.active.postMessage(message);
  return true;
}

export async function jsCacheNames() {
  if (!hasCacheStorage()) {
    fail('Cache API unavailable');
  }
  return await caches.keys();
}

export async function jsDeleteCache(cacheName) {
  if (!hasCacheStorage()) {
    fail('Cache API unavailable');
  }
  return await caches.delete(cacheName);
}

export async function jsStorageEstimate() {
  if (!hasStorageEstimate()) {
    fail('Storage estimate unavailable');
  }
  const estimate = await navigator.storage.estimate();
  return {
    quota: Math.max(0, Math.floor(estimate.quota ?? 0)),
    usage: Math.max(0, Math.floor(estimate.usage ?? 0)),
  };
}

export async function jsRegisterSync(tag) {
  const registration = await readyRegistration();
  if (!registration.sync) {
    fail('Background sync unavailable on the service worker registration');
  }
  await registration.sync.register(tag);
  return null;
}

export async function jsPromptInstall(event) {
  if (!event || typeof event.prompt !== 'function') {
    fail('Deferred install prompt is not promptable');
  }
  await event.prompt();
  const choice = await event.userChoice;
  return choice && choice.outcome ? choice.outcome : 'dismissed';
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsCapabilities)]
    fn js_capabilities() -> JsValue;
    #[wasm_bindgen(js_name = jsNotificationPermission)]
    fn js_notification_permission() -> String;
    #[wasm_bindgen(js_name = jsRequestNotificationPermission)]
    fn js_request_notification_permission() -> Promise;

    #[wasm_bindgen(js_name = jsServiceWorkerReady)]
    fn js_service_worker_ready() -> Promise;
    #[wasm_bindgen(js_name = jsPushSubscribe)]
    fn js_push_subscribe(application_server_key: &[u8]) -> Promise;
    #[wasm_bindgen(js_name = jsPushSubscription)]
    fn js_push_subscription() -> Promise;
    #[wasm_bindgen(js_name = jsPushUnsubscribe)]
    fn js_push_unsubscribe() -> Promise;
    #[wasm_bindgen(js_name = jsShowNotification)]
    fn js_show_notification(title: &str, options: JsValue) -> Promise;
    #[wasm_bindgen(js_name = jsPostMessage)]
    fn js_post_message(message: JsValue) -> Promise;

    #[wasm_bindgen(js_name = jsCacheNames)]
    fn js_cache_names() -> Promise;
    #[wasm_bindgen(js_name = jsDeleteCache)]
    fn js_delete_cache(cache_name: &str) -> Promise;
    #[wasm_bindgen(js_name = jsStorageEstimate)]
    fn js_storage_estimate() -> Promise;
    #[wasm_bindgen(js_name = jsRegisterSync)]
    fn js_register_sync(tag: &str) -> Promise;

    #[wasm_bindgen(js_name = jsPromptInstall)]
    fn js_prompt_install(event: &JsValue) -> Promise;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

async fn promise_to_json<T: DeserializeOwned>(promise: Promise) -> Result<T, String> {
    let value = await_promise(promise).await?;
    from_value(value).map_err(|e| e.to_string())
}

async fn promise_to_optional_json<T: DeserializeOwned>(
    promise: Promise,
) -> Result<Option<T>, String> {
    let value = await_promise(promise).await?;
    if value.is_null() || value.is_undefined() {
        Ok(None)
    } else {
        from_value(value).map(Some).map_err(|e| e.to_string())
    }
}

async fn promise_to_bool(promise: Promise) -> Result<bool, String> {
    Ok(await_promise(promise).await?.as_bool().unwrap_or(false))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

pub fn capabilities() -> PwaCapabilities {
    from_value(js_capabilities()).unwrap_or_else(|err| {
        log::warn!("capability probe returned an unexpected payload: {err}");
        PwaCapabilities::none()
    })
}

pub fn notification_permission() -> NotificationPermission {
    NotificationPermission::parse(&js_notification_permission())
        .unwrap_or(NotificationPermission::Default)
}

pub async fn request_notification_permission() -> Result<NotificationPermission, String> {
    let value = await_promise(js_request_notification_permission()).await?;
    value
        .as_string()
        .as_deref()
        .and_then(NotificationPermission::parse)
        .ok_or_else(|| format!("unexpected notification permission: {value:?}"))
}

pub async fn service_worker_ready() -> Result<(), String> {
    let _ = await_promise(js_service_worker_ready()).await?;
    Ok(())
}

pub async fn push_subscribe(application_server_key: &[u8]) -> Result<PushSubscription, String> {
    promise_to_json(js_push_subscribe(application_server_key)).await
}

pub async fn push_subscription() -> Result<Option<PushSubscription>, String> {
    promise_to_optional_json(js_push_subscription()).await
}

pub async fn push_unsubscribe() -> Result<bool, String> {
    promise_to_bool(js_push_unsubscribe()).await
}

pub async fn show_notification(title: &str, options: &NotificationOptions) -> Result<(), String> {
    let options = to_js(options)?;
    let _ = await_promise(js_show_notification(title, options)).await?;
    Ok(())
}

pub async fn post_message(message: &Value) -> Result<bool, String> {
    let message = to_js(message)?;
    promise_to_bool(js_post_message(message)).await
}

pub async fn cache_names() -> Result<Vec<String>, String> {
    promise_to_json(js_cache_names()).await
}

pub async fn delete_cache(cache_name: &str) -> Result<bool, String> {
    promise_to_bool(js_delete_cache(cache_name)).await
}

pub async fn storage_estimate() -> Result<StorageEstimate, String> {
    promise_to_json(js_storage_estimate()).await
}

pub async fn register_sync(tag: &str) -> Result<(), String> {
    let _ = await_promise(js_register_sync(tag)).await?;
    Ok(())
}

/// Captured `beforeinstallprompt` event.
struct WebInstallPrompt {
    event: JsValue,
}

impl DeferredInstallPrompt for WebInstallPrompt {
    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>> {
        Box::pin(async move {
            let value = await_promise(js_prompt_install(&self.event)).await?;
            let outcome = value.as_string().unwrap_or_default();
            Ok(InstallOutcome::parse(&outcome).unwrap_or(InstallOutcome::Dismissed))
        })
    }
}

fn attach<T: ?Sized>(target: &EventTarget, event: &str, callback: &Closure<T>) {
    if let Err(err) =
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        log::warn!(
            "failed to attach `{event}` listener: {}",
            js_error_to_string(err)
        );
    }
}

fn detach<T: ?Sized>(target: &EventTarget, event: &str, callback: &Closure<T>) {
    if let Err(err) =
        target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        log::warn!(
            "failed to detach `{event}` listener: {}",
            js_error_to_string(err)
        );
    }
}

pub fn add_network_listeners(
    on_online: ListenerCallback,
    on_offline: ListenerCallback,
) -> ListenerCleanup {
    let Some(window) = web_sys::window() else {
        log::warn!("network listeners not attached: window unavailable");
        return ListenerCleanup::noop();
    };
    let online = Closure::<dyn Fn()>::wrap(on_online);
    let offline = Closure::<dyn Fn()>::wrap(on_offline);
    attach(&window, "online", &online);
    attach(&window, "offline", &offline);

    ListenerCleanup::new(move || {
        detach(&window, "online", &online);
        detach(&window, "offline", &offline);
    })
}

pub fn install_prompt_listeners(facade: Rc<PwaFacade>) -> ListenerCleanup {
    let Some(window) = web_sys::window() else {
        log::warn!("install listeners not attached: window unavailable");
        return ListenerCleanup::noop();
    };

    let capture = Rc::clone(&facade);
    let before_install = Closure::<dyn Fn(Event)>::new(move |event: Event| {
        event.prevent_default();
        capture.capture_install_prompt(Box::new(WebInstallPrompt {
            event: event.into(),
        }));
    });
    let installed = Closure::<dyn Fn()>::new(move || facade.handle_app_installed());
    attach(&window, "beforeinstallprompt", &before_install);
    attach(&window, "appinstalled", &installed);

    ListenerCleanup::new(move || {
        detach(&window, "beforeinstallprompt", &before_install);
        detach(&window, "appinstalled", &installed);
    })
}
