//! Typed host contracts for Progressive Web App capabilities.
//!
//! This crate is the platform-neutral boundary for PWA features: capability probing,
//! notification permission, push subscriptions, worker messaging, cache storage, background sync
//! and the deferred install prompt. [`PwaFacade`] composes those operations over an injected
//! [`PwaHost`], while concrete browser adapters live in `pwa_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod capabilities;
pub mod config;
pub mod error;
pub mod facade;
pub mod host;
pub mod install;
pub mod listener;
pub mod memory;
pub mod notifications;
pub mod permission;
pub mod push;
pub mod storage;

pub use capabilities::{CapabilityProvider, PwaCapabilities};
pub use config::{PwaConfig, DEFAULT_NOTIFICATION_BADGE, DEFAULT_NOTIFICATION_ICON};
pub use error::PwaError;
pub use facade::PwaFacade;
pub use host::{NoopPwaHost, PwaHost, PwaHostFuture};
pub use install::{DeferredInstallPrompt, InstallOutcome, InstallPromptFuture, InstallPromptSlot};
pub use listener::{ListenerCallback, ListenerCleanup};
pub use memory::{MemoryInstallPrompt, MemoryPwaHost};
pub use notifications::{
    default_notification_options, merge_notification_options, NotificationOptions,
};
pub use permission::NotificationPermission;
pub use push::{url_base64_to_bytes, vapid_padding_len, PushSubscription, PushSubscriptionKeys};
pub use storage::{percent_used_text, CacheStorageUsage, StorageEstimate};
