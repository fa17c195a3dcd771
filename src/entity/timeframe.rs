//! Candle time frames.

use serde::{Deserialize, Serialize};

/// Candlestick aggregation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitfinexCandleTimeFrame {
    /// 1 minute candles
    #[serde(rename = "1m")]
    OneMinute,
    /// 5 minute candles
    #[serde(rename = "5m")]
    FiveMinutes,
    /// 15 minute candles
    #[serde(rename = "15m")]
    FifteenMinutes,
    /// 30 minute candles
    #[serde(rename = "30m")]
    ThirtyMinutes,
    /// 1 hour candles
    #[serde(rename = "1h")]
    OneHour,
    /// 3 hour candles
    #[serde(rename = "3h")]
    ThreeHours,
    /// 6 hour candles
    #[serde(rename = "6h")]
    SixHours,
    /// 12 hour candles
    #[serde(rename = "12h")]
    TwelveHours,
    /// 1 day candles
    #[serde(rename = "1D")]
    OneDay,
    /// 7 day candles
    #[serde(rename = "7D")]
    OneWeek,
    /// 14 day candles
    #[serde(rename = "14D")]
    TwoWeeks,
    /// 1 month candles
    #[serde(rename = "1M")]
    OneMonth,
}

impl BitfinexCandleTimeFrame {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::ThreeHours => "3h",
            Self::SixHours => "6h",
            Self::TwelveHours => "12h",
            Self::OneDay => "1D",
            Self::OneWeek => "7D",
            Self::TwoWeeks => "14D",
            Self::OneMonth => "1M",
        }
    }
}

impl std::fmt::Display for BitfinexCandleTimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
