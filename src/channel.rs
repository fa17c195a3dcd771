//! Channel id registry and the resolver capability.
//!
//! The exchange assigns a numeric channel id to every accepted subscription.
//! The registry tracks the symbol to id assignments and hands out resolver
//! closures that the unsubscribe command uses at encode time.

use std::sync::Arc;

use dashmap::DashMap;

use crate::symbol::BitfinexStreamSymbol;

/// Lookup from a subscribed stream symbol to its assigned channel id.
///
/// Returns `None` when the symbol has no active subscription.
pub type ChannelResolver = Arc<dyn Fn(&BitfinexStreamSymbol) -> Option<i32> + Send + Sync>;

/// Capability of commands whose wire frame needs a channel id.
///
/// A resolver must be attached before `encode` is called; attaching again
/// replaces the earlier resolver.
pub trait ChannelResolverAware {
    /// Attach the resolver consulted during encoding.
    fn attach_resolver(&mut self, resolver: ChannelResolver);
}

/// Thread-safe symbol to channel id table.
///
/// Written from the inbound side as subscription acknowledgments arrive and
/// read through [`ChannelRegistry::resolver`] while encoding outbound
/// frames. Writes made before a subsequent read are visible to that read.
#[derive(Debug, Clone, Default)]
pub struct ChannelRegistry {
    channels: Arc<DashMap<BitfinexStreamSymbol, i32>>,
}

impl ChannelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a channel id assignment, returning the id it replaces, if any.
    pub fn register(&self, symbol: BitfinexStreamSymbol, channel_id: i32) -> Option<i32> {
        self.channels.insert(symbol, channel_id)
    }

    /// Drop the assignment for a symbol, returning its channel id.
    pub fn remove_symbol(&self, symbol: &BitfinexStreamSymbol) -> Option<i32> {
        self.channels.remove(symbol).map(|(_, channel_id)| channel_id)
    }

    /// Drop the assignment carrying a channel id, returning its symbol.
    ///
    /// Unsubscribe acknowledgments carry only the id, not the symbol.
    pub fn remove_channel(&self, channel_id: i32) -> Option<BitfinexStreamSymbol> {
        let symbol = self
            .channels
            .iter()
            .find(|entry| *entry.value() == channel_id)
            .map(|entry| entry.key().clone())?;
        self.channels.remove(&symbol);
        Some(symbol)
    }

    /// The channel id assigned to a symbol, if subscribed.
    pub fn channel_id(&self, symbol: &BitfinexStreamSymbol) -> Option<i32> {
        self.channels.get(symbol).map(|entry| *entry.value())
    }

    /// All registered symbols, for re-subscribing after a reconnect.
    pub fn symbols(&self) -> Vec<BitfinexStreamSymbol> {
        self.channels
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Number of registered assignments.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the registry has no assignments.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Drop all assignments, e.g. when a connection is torn down.
    pub fn clear(&self) {
        self.channels.clear();
    }

    /// A resolver closure backed by this registry.
    ///
    /// The closure shares the live table, so assignments registered after
    /// the closure was created are still found.
    pub fn resolver(&self) -> ChannelResolver {
        let channels = Arc::clone(&self.channels);
        Arc::new(move |symbol| channels.get(symbol).map(|entry| *entry.value()))
    }
}
