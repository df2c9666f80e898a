//! Browser (`wasm32`) implementation of the [`pwa_host`] service contract.
//!
//! This crate wires service worker, push, notification, cache storage, storage estimate,
//! background sync and install prompt APIs into [`pwa_host::PwaFacade`].
//!
//! Bridge bindings live under `bridge/`:
//! - `bridge::wasm` (inline JS interop and `web-sys` event listeners)
//! - `bridge::non_wasm` (fallback shim reporting every capability absent)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Target-selected host factory and facade composition.
pub mod adapters;
mod bridge;
pub mod host;

pub use adapters::{build_pwa_facade, install_prompt_listeners, pwa_host};
pub use host::WebPwaHost;
