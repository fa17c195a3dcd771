//! Connection feature negotiation command (`conf` event).

use std::collections::HashSet;

use serde::Serialize;

use crate::command::frame;
use crate::config::BitfinexClientConfiguration;
use crate::entity::features::{combined_features, BitfinexConnectionFeature};
use crate::error::EncodeResult;

/// Replaces the connection's active feature set.
///
/// A `conf` frame always carries the full combined value; an empty set
/// sends an explicit 0, resetting every feature.
#[derive(Debug, Clone, Default)]
pub struct SetConnectionFeaturesCommand {
    features: HashSet<BitfinexConnectionFeature>,
}

#[derive(Serialize)]
struct ConfEvent {
    event: &'static str,
    flags: u64,
}

impl SetConnectionFeaturesCommand {
    /// Create the command for a feature set.
    pub fn new(features: HashSet<BitfinexConnectionFeature>) -> Self {
        Self { features }
    }

    /// The requested feature set.
    pub fn features(&self) -> &HashSet<BitfinexConnectionFeature> {
        &self.features
    }

    /// Encode the conf event frame.
    pub fn encode(&self, _configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        frame::event_frame(&ConfEvent {
            event: "conf",
            flags: combined_features(&self.features),
        })
    }
}
