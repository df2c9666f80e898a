//! Push subscription model and VAPID application-server key decoding.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::PwaError;

/// Key material attached to a push subscription.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PushSubscriptionKeys {
    /// Client public key (URL-safe base64).
    #[serde(default)]
    pub p256dh: String,
    /// Authentication secret (URL-safe base64).
    #[serde(default)]
    pub auth: String,
}

/// Opaque push subscription issued by the platform push service.
///
/// Mirrors the shape of the platform's `PushSubscription.toJSON()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscription {
    /// Push service endpoint URL.
    pub endpoint: String,
    /// Expiration time in unix milliseconds, when the push service sets one.
    #[serde(default)]
    pub expiration_time: Option<f64>,
    /// Subscription key material.
    #[serde(default)]
    pub keys: PushSubscriptionKeys,
}

/// Returns how many `=` characters pad a base64 text of `len` characters to a multiple of four.
pub const fn vapid_padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Decodes a URL-safe base64 VAPID public key into raw key bytes.
///
/// The input is padded with `=` to a multiple of four characters, `-`/`_` are mapped to
/// `+`/`/`, and the result is decoded with the standard alphabet.
///
/// # Errors
///
/// Returns [`PwaError::InvalidVapidKey`] when the normalized text is not valid base64.
pub fn url_base64_to_bytes(key: &str) -> Result<Vec<u8>, PwaError> {
    let mut normalized = String::with_capacity(key.len() + 3);
    normalized.extend(key.chars().map(|ch| match ch {
        '-' => '+',
        '_' => '/',
        other => other,
    }));
    normalized.push_str(&"=".repeat(vapid_padding_len(key.len())));

    STANDARD
        .decode(normalized.as_bytes())
        .map_err(|err| PwaError::InvalidVapidKey(err.to_string()))
}
