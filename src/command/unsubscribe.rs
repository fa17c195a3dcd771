//! Channel unsubscription command (`unsubscribe` event).

use std::fmt;

use serde::Serialize;

use crate::channel::{ChannelResolver, ChannelResolverAware};
use crate::command::frame;
use crate::config::BitfinexClientConfiguration;
use crate::error::{EncodeResult, EncodingError};
use crate::symbol::BitfinexStreamSymbol;

/// Unsubscribes a stream by its assigned channel id.
///
/// The id is only known once the subscription acknowledgment has arrived,
/// so the command is built from the stream symbol and resolves the id at
/// encode time. A [`ChannelResolver`] must be attached first, either with
/// [`UnsubscribeChannelCommand::with_resolver`] or through
/// [`ChannelResolverAware`].
#[derive(Clone)]
pub struct UnsubscribeChannelCommand {
    symbol: BitfinexStreamSymbol,
    resolver: Option<ChannelResolver>,
}

#[derive(Serialize)]
struct UnsubscribeEvent {
    event: &'static str,
    #[serde(rename = "chanId")]
    chan_id: i32,
}

impl UnsubscribeChannelCommand {
    /// Create the command for one subscribed stream.
    pub fn new(symbol: impl Into<BitfinexStreamSymbol>) -> Self {
        Self {
            symbol: symbol.into(),
            resolver: None,
        }
    }

    /// Attach the resolver at construction.
    pub fn with_resolver(mut self, resolver: ChannelResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// The stream to unsubscribe.
    pub fn symbol(&self) -> &BitfinexStreamSymbol {
        &self.symbol
    }

    /// Encode the unsubscribe event frame.
    ///
    /// Fails with [`EncodingError::ResolverNotAttached`] when no resolver
    /// was attached and with [`EncodingError::UnknownChannel`] when the
    /// stream has no registered channel id.
    pub fn encode(&self, _configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        let resolver = self
            .resolver
            .as_ref()
            .ok_or(EncodingError::ResolverNotAttached)?;
        let chan_id = resolver(&self.symbol)
            .ok_or_else(|| EncodingError::UnknownChannel(self.symbol.to_string()))?;

        frame::event_frame(&UnsubscribeEvent {
            event: "unsubscribe",
            chan_id,
        })
    }
}

impl ChannelResolverAware for UnsubscribeChannelCommand {
    fn attach_resolver(&mut self, resolver: ChannelResolver) {
        self.resolver = Some(resolver);
    }
}

impl fmt::Debug for UnsubscribeChannelCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsubscribeChannelCommand")
            .field("symbol", &self.symbol)
            .field("resolver_attached", &self.resolver.is_some())
            .finish()
    }
}
