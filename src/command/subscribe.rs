//! Channel subscription commands (`subscribe` events).

use serde::Serialize;

use crate::command::frame;
use crate::config::BitfinexClientConfiguration;
use crate::error::EncodeResult;
use crate::symbol::{
    BitfinexCandlestickSymbol, BitfinexExecutedTradeSymbol, BitfinexOrderBookSymbol,
    BitfinexTickerSymbol,
};

// ============================================================================
// Candles
// ============================================================================

/// Subscribes a candle stream.
#[derive(Debug, Clone)]
pub struct SubscribeCandlesCommand {
    symbol: BitfinexCandlestickSymbol,
}

#[derive(Serialize)]
struct CandlesEvent {
    event: &'static str,
    channel: &'static str,
    key: String,
}

impl SubscribeCandlesCommand {
    /// Create the command for one candle stream.
    pub fn new(symbol: BitfinexCandlestickSymbol) -> Self {
        Self { symbol }
    }

    /// The stream to subscribe.
    pub fn symbol(&self) -> &BitfinexCandlestickSymbol {
        &self.symbol
    }

    /// Encode the subscribe event frame.
    pub fn encode(&self, _configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        frame::event_frame(&CandlesEvent {
            event: "subscribe",
            channel: "candles",
            key: self.symbol.channel_key(),
        })
    }
}

// ============================================================================
// Ticker
// ============================================================================

/// Subscribes a ticker stream.
#[derive(Debug, Clone)]
pub struct SubscribeTickerCommand {
    symbol: BitfinexTickerSymbol,
}

#[derive(Serialize)]
struct TickerEvent {
    event: &'static str,
    channel: &'static str,
    symbol: String,
}

impl SubscribeTickerCommand {
    /// Create the command for one ticker stream.
    pub fn new(symbol: BitfinexTickerSymbol) -> Self {
        Self { symbol }
    }

    /// The stream to subscribe.
    pub fn symbol(&self) -> &BitfinexTickerSymbol {
        &self.symbol
    }

    /// Encode the subscribe event frame.
    pub fn encode(&self, _configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        frame::event_frame(&TickerEvent {
            event: "subscribe",
            channel: "ticker",
            symbol: self.symbol.currency_pair().to_bitfinex_string(),
        })
    }
}

// ============================================================================
// Executed trades
// ============================================================================

/// Subscribes an executed-trades stream.
#[derive(Debug, Clone)]
pub struct SubscribeTradesCommand {
    symbol: BitfinexExecutedTradeSymbol,
}

#[derive(Serialize)]
struct TradesEvent {
    event: &'static str,
    channel: &'static str,
    symbol: String,
}

impl SubscribeTradesCommand {
    /// Create the command for one executed-trades stream.
    pub fn new(symbol: BitfinexExecutedTradeSymbol) -> Self {
        Self { symbol }
    }

    /// The stream to subscribe.
    pub fn symbol(&self) -> &BitfinexExecutedTradeSymbol {
        &self.symbol
    }

    /// Encode the subscribe event frame.
    pub fn encode(&self, _configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        frame::event_frame(&TradesEvent {
            event: "subscribe",
            channel: "trades",
            symbol: self.symbol.currency_pair().to_bitfinex_string(),
        })
    }
}

// ============================================================================
// Order book
// ============================================================================

/// Subscribes an order book stream.
#[derive(Debug, Clone)]
pub struct SubscribeOrderBookCommand {
    symbol: BitfinexOrderBookSymbol,
}

#[derive(Serialize)]
struct BookEvent {
    event: &'static str,
    channel: &'static str,
    symbol: String,
    prec: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    freq: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    len: Option<u16>,
}

impl SubscribeOrderBookCommand {
    /// Create the command for one book stream.
    pub fn new(symbol: BitfinexOrderBookSymbol) -> Self {
        Self { symbol }
    }

    /// The stream to subscribe.
    pub fn symbol(&self) -> &BitfinexOrderBookSymbol {
        &self.symbol
    }

    /// Encode the subscribe event frame.
    ///
    /// Raw books carry neither `freq` nor `len`.
    pub fn encode(&self, _configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        frame::event_frame(&BookEvent {
            event: "subscribe",
            channel: "book",
            symbol: self.symbol.currency_pair().to_bitfinex_string(),
            prec: self.symbol.precision().as_str(),
            freq: self.symbol.frequency().map(|frequency| frequency.as_str()),
            len: self.symbol.price_points(),
        })
    }
}
