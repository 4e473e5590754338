use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Expiry marker appended to every signature; `0` never expires
pub const SIGN_EXPIRY: &str = "0";

/// Builds the `?sign=...` query string for a resource path.
///
/// Returns an empty string when no secret is configured, so the result can
/// always be appended to the public URL.
pub fn sign(secret: Option<&str>, resource_path: &str) -> String {
    let secret = match secret {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    // HMAC accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(resource_path.as_bytes());
    mac.update(b":");
    mac.update(SIGN_EXPIRY.as_bytes());

    let digest = URL_SAFE.encode(mac.finalize().into_bytes());
    format!("?sign={}:{}", digest, SIGN_EXPIRY)
}
