use super::*;

fn unsupported() -> String {
    "PWA browser APIs are only available when compiled for wasm32".to_string()
}

pub fn capabilities() -> PwaCapabilities {
    PwaCapabilities::none()
}

pub fn notification_permission() -> NotificationPermission {
    NotificationPermission::Unsupported
}

pub async fn request_notification_permission() -> Result<NotificationPermission, String> {
    Ok(NotificationPermission::Unsupported)
}

pub async fn service_worker_ready() -> Result<(), String> {
    Err(unsupported())
}

pub async fn push_subscribe(_application_server_key: &[u8]) -> Result<PushSubscription, String> {
    Err(unsupported())
}

pub async fn push_subscription() -> Result<Option<PushSubscription>, String> {
    Ok(None)
}

pub async fn push_unsubscribe() -> Result<bool, String> {
    Ok(false)
}

pub async fn show_notification(
    _title: &str,
    _options: &NotificationOptions,
) -> Result<(), String> {
    Err(unsupported())
}

pub async fn post_message(_message: &Value) -> Result<bool, String> {
    Ok(false)
}

pub async fn cache_names() -> Result<Vec<String>, String> {
    Ok(Vec::new())
}

pub async fn delete_cache(_cache_name: &str) -> Result<bool, String> {
    Ok(false)
}

pub async fn storage_estimate() -> Result<StorageEstimate, String> {
    Err(unsupported())
}

pub async fn register_sync(_tag: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn add_network_listeners(
    _on_online: ListenerCallback,
    _on_offline: ListenerCallback,
) -> ListenerCleanup {
    ListenerCleanup::noop()
}

pub fn install_prompt_listeners(_facade: Rc<PwaFacade>) -> ListenerCleanup {
    ListenerCleanup::noop()
}
