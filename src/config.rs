//! Per-connection client configuration.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;

use crate::credential::BitfinexCredential;
use crate::error::ConfigurationError;

/// Strategy producing the nonce of an auth handshake.
///
/// Nonces must be strictly increasing per API key. The default produces the
/// current unix timestamp in milliseconds; tests swap in a fixed producer.
pub type NonceProducer = Arc<dyn Fn() -> String + Send + Sync>;

/// The timestamp-based default nonce producer.
pub fn timestamp_nonce_producer() -> NonceProducer {
    Arc::new(|| Utc::now().timestamp_millis().to_string())
}

/// Immutable per-session configuration consumed by command encoding.
///
/// Created once per connection and passed by shared reference into every
/// encode call; commands never mutate it.
#[derive(Clone)]
pub struct BitfinexClientConfiguration {
    credential: Option<BitfinexCredential>,
    nonce_producer: NonceProducer,
}

impl BitfinexClientConfiguration {
    /// Configuration for public channels only, without credentials.
    pub fn anonymous() -> Self {
        Self {
            credential: None,
            nonce_producer: timestamp_nonce_producer(),
        }
    }

    /// Configuration with API credentials for authenticated commands.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credential: Some(BitfinexCredential::new(api_key, api_secret)),
            nonce_producer: timestamp_nonce_producer(),
        }
    }

    /// Replace the nonce strategy.
    pub fn with_nonce_producer(mut self, nonce_producer: NonceProducer) -> Self {
        self.nonce_producer = nonce_producer;
        self
    }

    /// The configured credential, if any.
    pub fn credential(&self) -> Option<&BitfinexCredential> {
        self.credential.as_ref()
    }

    /// The configured credential, or a configuration error when absent.
    pub fn require_credential(&self) -> Result<&BitfinexCredential, ConfigurationError> {
        self.credential
            .as_ref()
            .ok_or(ConfigurationError::MissingCredentials(
                "API key and secret are required for authenticated commands",
            ))
    }

    /// Produce the next auth nonce.
    pub fn next_nonce(&self) -> String {
        (self.nonce_producer)()
    }
}

impl Default for BitfinexClientConfiguration {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl fmt::Debug for BitfinexClientConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitfinexClientConfiguration")
            .field("credential", &self.credential)
            .field("nonce_producer", &"<fn>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_has_no_credential() {
        let config = BitfinexClientConfiguration::anonymous();

        assert!(config.credential().is_none());
        assert!(config.require_credential().is_err());
    }

    #[test]
    fn test_new_carries_credential() {
        let config = BitfinexClientConfiguration::new("abc", "123");

        assert_eq!(config.credential().unwrap().api_key(), "abc");
        assert!(config.require_credential().is_ok());
    }

    #[test]
    fn test_default_nonce_is_numeric_timestamp() {
        let config = BitfinexClientConfiguration::anonymous();
        let nonce = config.next_nonce();

        assert!(!nonce.is_empty());
        assert!(nonce.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_custom_nonce_producer() {
        let config = BitfinexClientConfiguration::new("abc", "123")
            .with_nonce_producer(Arc::new(|| "1518010751551".to_string()));

        assert_eq!(config.next_nonce(), "1518010751551");
        assert_eq!(config.next_nonce(), "1518010751551");
    }
}
