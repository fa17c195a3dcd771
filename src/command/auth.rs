//! Connection authentication command (`auth` event).

use std::fmt;

use serde::Serialize;

use crate::command::frame;
use crate::config::{BitfinexClientConfiguration, NonceProducer};
use crate::error::EncodeResult;

/// Authenticates the connection for account channels and order entry.
///
/// The handshake signs `"AUTH" + nonce` under the API secret. The nonce
/// comes from the configuration's nonce producer unless one was supplied at
/// construction with [`AuthCommand::with_nonce_producer`]. Requires
/// credentials.
#[derive(Clone, Default)]
pub struct AuthCommand {
    nonce_producer: Option<NonceProducer>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthEvent<'a> {
    event: &'static str,
    api_key: &'a str,
    auth_sig: String,
    auth_payload: String,
    auth_nonce: String,
}

impl AuthCommand {
    /// Create the command; the configuration supplies the nonce.
    pub fn new() -> Self {
        Self {
            nonce_producer: None,
        }
    }

    /// Use this nonce strategy instead of the configuration's.
    pub fn with_nonce_producer(mut self, nonce_producer: NonceProducer) -> Self {
        self.nonce_producer = Some(nonce_producer);
        self
    }

    /// Encode the auth event frame.
    pub fn encode(&self, configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        let credential = configuration.require_credential()?;
        let nonce = match &self.nonce_producer {
            Some(producer) => producer(),
            None => configuration.next_nonce(),
        };
        let payload = format!("AUTH{}", nonce);
        let signature = credential.sign(&payload);

        frame::event_frame(&AuthEvent {
            event: "auth",
            api_key: credential.api_key(),
            auth_sig: signature,
            auth_payload: payload,
            auth_nonce: nonce,
        })
    }
}

impl fmt::Debug for AuthCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCommand")
            .field("nonce_producer", &self.nonce_producer.is_some())
            .finish()
    }
}
