//! Domain entities for the Bitfinex v2 API.
//!
//! Immutable value objects consumed read-only by the command layer:
//! currency pairs, order types and flags, candle time frames, connection
//! features, and the new-order entity with its builder.

pub mod currency;
pub mod features;
pub mod flags;
pub mod order;
pub mod timeframe;

// Re-export commonly used items
pub use currency::BitfinexCurrencyPair;
pub use features::BitfinexConnectionFeature;
pub use flags::BitfinexOrderFlag;
pub use order::{BitfinexNewOrder, BitfinexOrderBuilder, BitfinexOrderType};
pub use timeframe::BitfinexCandleTimeFrame;
