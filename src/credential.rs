//! API credential handling and payload signing.

use std::fmt;

use ring::hmac;

/// API key and secret for the authenticated WebSocket endpoint.
///
/// Signatures use HMAC SHA-384 with lowercase hexadecimal encoding, as
/// required by the v2 auth handshake.
#[derive(Clone)]
pub struct BitfinexCredential {
    api_key: String,
    api_secret: String,
}

impl fmt::Debug for BitfinexCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitfinexCredential")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl BitfinexCredential {
    /// Create a credential from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// The API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a payload, returning the lowercase hex digest.
    pub fn sign(&self, payload: &str) -> String {
        let key = hmac::Key::new(hmac::HMAC_SHA384, self.api_secret.as_bytes());
        let tag = hmac::sign(&key, payload.as_bytes());
        hex::encode(tag.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_produces_sha384_hex_digest() {
        let credential = BitfinexCredential::new("abc", "123");
        let signature = credential.sign("AUTH1518010751551");

        // 48-byte SHA-384 tag as lowercase hex
        assert_eq!(signature.len(), 96);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_sign_is_deterministic() {
        let credential = BitfinexCredential::new("abc", "123");

        assert_eq!(credential.sign("AUTH42"), credential.sign("AUTH42"));
    }

    #[test]
    fn test_sign_depends_on_secret_and_payload() {
        let credential = BitfinexCredential::new("abc", "123");
        let other_secret = BitfinexCredential::new("abc", "456");

        assert_ne!(credential.sign("AUTH42"), other_secret.sign("AUTH42"));
        assert_ne!(credential.sign("AUTH42"), credential.sign("AUTH43"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credential = BitfinexCredential::new("abc", "123");
        let rendered = format!("{:?}", credential);

        assert!(rendered.contains("abc"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("123"));
    }
}
