//! Order book stream symbol with precision, frequency, and depth.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::BitfinexCurrencyPair;

/// Price aggregation level of a book subscription.
///
/// `P0` is the most precise aggregated level, `P3` the coarsest; `R0`
/// selects the raw (unaggregated) book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitfinexOrderBookPrecision {
    P0,
    P1,
    P2,
    P3,
    R0,
}

impl BitfinexOrderBookPrecision {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P0 => "P0",
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::R0 => "R0",
        }
    }
}

impl fmt::Display for BitfinexOrderBookPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Update frequency of a book subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitfinexOrderBookFrequency {
    /// Realtime updates
    F0,
    /// Updates every two seconds
    F1,
}

impl BitfinexOrderBookFrequency {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::F0 => "F0",
            Self::F1 => "F1",
        }
    }
}

impl fmt::Display for BitfinexOrderBookFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of an order book stream.
///
/// Raw books carry neither frequency nor depth; both stay off the subscribe
/// payload for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitfinexOrderBookSymbol {
    currency_pair: BitfinexCurrencyPair,
    precision: BitfinexOrderBookPrecision,
    frequency: Option<BitfinexOrderBookFrequency>,
    price_points: Option<u16>,
}

impl BitfinexOrderBookSymbol {
    /// An aggregated book stream.
    pub fn new(
        currency_pair: BitfinexCurrencyPair,
        precision: BitfinexOrderBookPrecision,
        frequency: BitfinexOrderBookFrequency,
        price_points: u16,
    ) -> Self {
        Self {
            currency_pair,
            precision,
            frequency: Some(frequency),
            price_points: Some(price_points),
        }
    }

    /// A raw (unaggregated) book stream.
    pub fn raw(currency_pair: BitfinexCurrencyPair) -> Self {
        Self {
            currency_pair,
            precision: BitfinexOrderBookPrecision::R0,
            frequency: None,
            price_points: None,
        }
    }

    /// The traded currency pair.
    pub fn currency_pair(&self) -> &BitfinexCurrencyPair {
        &self.currency_pair
    }

    /// Price aggregation level.
    pub fn precision(&self) -> BitfinexOrderBookPrecision {
        self.precision
    }

    /// Update frequency; `None` for raw books.
    pub fn frequency(&self) -> Option<BitfinexOrderBookFrequency> {
        self.frequency
    }

    /// Number of price points per side; `None` for raw books.
    pub fn price_points(&self) -> Option<u16> {
        self.price_points
    }

    /// Whether this is a raw book stream.
    pub fn is_raw(&self) -> bool {
        self.precision == BitfinexOrderBookPrecision::R0
    }
}

impl fmt::Display for BitfinexOrderBookSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "book:{}:{}",
            self.currency_pair.to_bitfinex_string(),
            self.precision
        )?;
        if let Some(frequency) = self.frequency {
            write!(f, ":{}", frequency)?;
        }
        if let Some(price_points) = self.price_points {
            write!(f, ":{}", price_points)?;
        }
        Ok(())
    }
}
