//! # Bitfinex v2 WebSocket Commands
//!
//! Typed outbound command encoding for the Bitfinex v2 realtime WebSocket
//! API. The crate turns trading-domain requests into protocol-correct,
//! newline-terminated wire frames; it does not open sockets or parse
//! responses.
//!
//! ## Modules
//!
//! - [`command`]: One command per protocol operation, plus the batch
//!   encoding entry point
//! - [`entity`]: Domain value objects (orders, flags, pairs, time frames)
//! - [`symbol`]: Stream symbols identifying subscribable channels
//! - [`channel`]: Channel id registry and the resolver capability
//! - [`config`]: Per-connection client configuration
//! - [`credential`]: API credentials and payload signing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bitfinex_wss::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let configuration = BitfinexClientConfiguration::new("api_key", "api_secret");
//! let registry = ChannelRegistry::new();
//!
//! let order = BitfinexOrderBuilder::new(
//!         BitfinexCurrencyPair::of("BCH", "USD"),
//!         BitfinexOrderType::ExchangeLimit,
//!         dec!(2.0),
//!     )
//!     .with_price(dec!(120.5))
//!     .build();
//!
//! let mut pending: Vec<BitfinexCommand> = vec![
//!     AuthCommand::new().into(),
//!     OrderCommand::new(order).into(),
//! ];
//!
//! for frame in encode_pending(&mut pending, &configuration, &registry)? {
//!     // hand the frame to the transport layer
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Channel id registry and the resolver capability.
pub mod channel;

/// Outbound command variants and the encoding entry point.
pub mod command;

/// Per-connection client configuration.
pub mod config;

/// API credentials and payload signing.
pub mod credential;

/// Domain entities (orders, flags, currency pairs, time frames).
pub mod entity;

/// Error types for encoding and configuration.
pub mod error;

/// Network URL constants (WebSocket endpoints).
pub mod network;

/// Stream symbols identifying subscribable channels.
pub mod symbol;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use bitfinex_wss::prelude::*;
/// ```
pub mod prelude {
    // Commands
    pub use crate::command::{
        encode_pending, AuthCommand, BitfinexCommand, CancelOrderCommand, CancelOrderGroupCommand,
        OrderCommand, PingCommand, SetConnectionFeaturesCommand, SubscribeCandlesCommand,
        SubscribeOrderBookCommand, SubscribeTickerCommand, SubscribeTradesCommand,
        UnsubscribeChannelCommand,
    };

    // Entities
    pub use crate::entity::{
        BitfinexCandleTimeFrame, BitfinexConnectionFeature, BitfinexCurrencyPair,
        BitfinexNewOrder, BitfinexOrderBuilder, BitfinexOrderFlag, BitfinexOrderType,
    };

    // Stream symbols
    pub use crate::symbol::{
        BitfinexCandlestickSymbol, BitfinexExecutedTradeSymbol, BitfinexOrderBookFrequency,
        BitfinexOrderBookPrecision, BitfinexOrderBookSymbol, BitfinexStreamSymbol,
        BitfinexTickerSymbol,
    };

    // Channel resolution
    pub use crate::channel::{ChannelRegistry, ChannelResolver, ChannelResolverAware};

    // Configuration and credentials
    pub use crate::config::{
        timestamp_nonce_producer, BitfinexClientConfiguration, NonceProducer,
    };
    pub use crate::credential::BitfinexCredential;

    // Errors
    pub use crate::error::{ConfigurationError, EncodeResult, EncodingError};

    // Network constants
    pub use crate::network::{AUTH_WS_URL, PUBLIC_WS_URL};
}
