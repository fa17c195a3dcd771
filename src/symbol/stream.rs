//! Concrete stream symbols and the unified symbol type.

use std::fmt;

use crate::entity::{BitfinexCandleTimeFrame, BitfinexCurrencyPair};
use crate::symbol::orderbook::BitfinexOrderBookSymbol;

// ============================================================================
// Candlestick symbol
// ============================================================================

/// Identity of a candle stream for one pair and time frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitfinexCandlestickSymbol {
    currency_pair: BitfinexCurrencyPair,
    time_frame: BitfinexCandleTimeFrame,
}

impl BitfinexCandlestickSymbol {
    /// Create a candle stream symbol.
    pub fn new(currency_pair: BitfinexCurrencyPair, time_frame: BitfinexCandleTimeFrame) -> Self {
        Self {
            currency_pair,
            time_frame,
        }
    }

    /// The traded currency pair.
    pub fn currency_pair(&self) -> &BitfinexCurrencyPair {
        &self.currency_pair
    }

    /// The candle aggregation period.
    pub fn time_frame(&self) -> BitfinexCandleTimeFrame {
        self.time_frame
    }

    /// The channel key the subscribe payload carries, e.g. `trade:1h:tBCHUSD`.
    pub fn channel_key(&self) -> String {
        format!(
            "trade:{}:{}",
            self.time_frame,
            self.currency_pair.to_bitfinex_string()
        )
    }
}

impl fmt::Display for BitfinexCandlestickSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.channel_key())
    }
}

// ============================================================================
// Ticker symbol
// ============================================================================

/// Identity of a ticker stream for one pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitfinexTickerSymbol {
    currency_pair: BitfinexCurrencyPair,
}

impl BitfinexTickerSymbol {
    /// Create a ticker stream symbol.
    pub fn new(currency_pair: BitfinexCurrencyPair) -> Self {
        Self { currency_pair }
    }

    /// The traded currency pair.
    pub fn currency_pair(&self) -> &BitfinexCurrencyPair {
        &self.currency_pair
    }
}

impl fmt::Display for BitfinexTickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ticker:{}", self.currency_pair.to_bitfinex_string())
    }
}

// ============================================================================
// Executed trades symbol
// ============================================================================

/// Identity of an executed-trades stream for one pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitfinexExecutedTradeSymbol {
    currency_pair: BitfinexCurrencyPair,
}

impl BitfinexExecutedTradeSymbol {
    /// Create an executed-trades stream symbol.
    pub fn new(currency_pair: BitfinexCurrencyPair) -> Self {
        Self { currency_pair }
    }

    /// The traded currency pair.
    pub fn currency_pair(&self) -> &BitfinexCurrencyPair {
        &self.currency_pair
    }
}

impl fmt::Display for BitfinexExecutedTradeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trades:{}", self.currency_pair.to_bitfinex_string())
    }
}

// ============================================================================
// Unified stream symbol
// ============================================================================

/// Any subscribable stream identity.
///
/// This is the key type of the channel registry and the argument of a
/// channel resolver lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BitfinexStreamSymbol {
    /// Candle stream
    Candlestick(BitfinexCandlestickSymbol),
    /// Ticker stream
    Ticker(BitfinexTickerSymbol),
    /// Executed trades stream
    ExecutedTrades(BitfinexExecutedTradeSymbol),
    /// Order book stream
    OrderBook(BitfinexOrderBookSymbol),
}

impl BitfinexStreamSymbol {
    /// The channel type as a string.
    pub fn channel(&self) -> &'static str {
        match self {
            Self::Candlestick(_) => "candles",
            Self::Ticker(_) => "ticker",
            Self::ExecutedTrades(_) => "trades",
            Self::OrderBook(_) => "book",
        }
    }
}

impl fmt::Display for BitfinexStreamSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Candlestick(symbol) => symbol.fmt(f),
            Self::Ticker(symbol) => symbol.fmt(f),
            Self::ExecutedTrades(symbol) => symbol.fmt(f),
            Self::OrderBook(symbol) => symbol.fmt(f),
        }
    }
}

impl From<BitfinexCandlestickSymbol> for BitfinexStreamSymbol {
    fn from(symbol: BitfinexCandlestickSymbol) -> Self {
        Self::Candlestick(symbol)
    }
}

impl From<BitfinexTickerSymbol> for BitfinexStreamSymbol {
    fn from(symbol: BitfinexTickerSymbol) -> Self {
        Self::Ticker(symbol)
    }
}

impl From<BitfinexExecutedTradeSymbol> for BitfinexStreamSymbol {
    fn from(symbol: BitfinexExecutedTradeSymbol) -> Self {
        Self::ExecutedTrades(symbol)
    }
}

impl From<BitfinexOrderBookSymbol> for BitfinexStreamSymbol {
    fn from(symbol: BitfinexOrderBookSymbol) -> Self {
        Self::OrderBook(symbol)
    }
}
