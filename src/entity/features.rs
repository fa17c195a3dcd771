//! Connection-level feature flags negotiated via the `conf` event.

use std::collections::HashSet;

/// Connection features toggled with a `conf` message.
///
/// Like order flags these carry power-of-two codes, but the protocol
/// semantics differ: sending `conf` replaces the active feature set, so an
/// empty set encodes as an explicit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitfinexConnectionFeature {
    /// All decimal values are sent as strings
    DecimalStrings,
    /// All timestamps are sent as date strings
    TimeStrings,
    /// Attach a server timestamp to each message
    Timestamp,
    /// Attach sequence numbers to each message
    SequenceNumbers,
    /// Periodic order book checksum messages
    BookChecksum,
}

impl BitfinexConnectionFeature {
    /// The numeric feature code.
    pub fn code(&self) -> u64 {
        match self {
            Self::DecimalStrings => 8,
            Self::TimeStrings => 32,
            Self::Timestamp => 32768,
            Self::SequenceNumbers => 65536,
            Self::BookChecksum => 131072,
        }
    }
}

/// Combine a feature set into the `flags` value of a `conf` message.
pub fn combined_features(features: &HashSet<BitfinexConnectionFeature>) -> u64 {
    features.iter().fold(0, |acc, feature| acc | feature.code())
}
