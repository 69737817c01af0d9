//! Avatar image decoding and fallback initials.
//!
//! The login form turns the picked file into a data URI so it can be stored
//! in `localStorage` and sent inline with every message. A read failure just
//! leaves the avatar unset.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode raw file bytes as a `data:` URI. Empty input has nothing to show.
pub fn data_uri(mime: &str, bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let mime = mime.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Uppercased first character of `username`, used when no avatar is set.
pub fn initial(username: &str) -> String {
    username
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_owned())
}

/// Avatar for a finished file read: `None` when the read failed or was empty.
pub fn avatar_from_read(mime: &str, bytes: Option<&[u8]>) -> Option<String> {
    data_uri(mime, bytes?)
}

/// Read a picked file into a data URI.
#[cfg(feature = "hydrate")]
pub async fn read_avatar(file: web_sys::File) -> Option<String> {
    let bytes = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .ok()
        .map(|buffer| js_sys::Uint8Array::new(&buffer).to_vec());
    avatar_from_read(&file.type_(), bytes.as_deref())
}
