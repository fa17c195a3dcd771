//! Stream symbols: identities of subscribable channels.
//!
//! A stream symbol names one realtime channel (candles for a pair and time
//! frame, a ticker, executed trades, or an order book view). Symbols are
//! hashable identities: they key the channel registry and drive both
//! subscribe payloads and resolver lookups.

pub mod orderbook;
pub mod stream;

pub use orderbook::{
    BitfinexOrderBookFrequency, BitfinexOrderBookPrecision, BitfinexOrderBookSymbol,
};
pub use stream::{
    BitfinexCandlestickSymbol, BitfinexExecutedTradeSymbol, BitfinexStreamSymbol,
    BitfinexTickerSymbol,
};
