//! Outbound command variants and the encoding entry point.
//!
//! Each command wraps one domain entity or parameter set and produces
//! exactly one wire frame through `encode`. [`BitfinexCommand`] unifies the
//! closed set of variants; [`encode_pending`] drains a batch of pending
//! commands, injecting the channel resolver where a command needs one.

pub mod auth;
pub mod cancel;
pub mod features;
pub mod frame;
pub mod order;
pub mod ping;
pub mod subscribe;
pub mod unsubscribe;

pub use auth::AuthCommand;
pub use cancel::{CancelOrderCommand, CancelOrderGroupCommand};
pub use features::SetConnectionFeaturesCommand;
pub use order::OrderCommand;
pub use ping::PingCommand;
pub use subscribe::{
    SubscribeCandlesCommand, SubscribeOrderBookCommand, SubscribeTickerCommand,
    SubscribeTradesCommand,
};
pub use unsubscribe::UnsubscribeChannelCommand;

use crate::channel::{ChannelRegistry, ChannelResolverAware};
use crate::config::BitfinexClientConfiguration;
use crate::error::EncodeResult;

/// Any outbound command.
#[derive(Debug, Clone)]
pub enum BitfinexCommand {
    /// Authenticate the connection
    Auth(AuthCommand),
    /// Cancel one order by id
    CancelOrder(CancelOrderCommand),
    /// Cancel all orders of a client group
    CancelOrderGroup(CancelOrderGroupCommand),
    /// Submit a new order
    Order(OrderCommand),
    /// Keep-alive ping
    Ping(PingCommand),
    /// Replace the connection feature set
    SetConnectionFeatures(SetConnectionFeaturesCommand),
    /// Subscribe a candle stream
    SubscribeCandles(SubscribeCandlesCommand),
    /// Subscribe an order book stream
    SubscribeOrderBook(SubscribeOrderBookCommand),
    /// Subscribe a ticker stream
    SubscribeTicker(SubscribeTickerCommand),
    /// Subscribe an executed-trades stream
    SubscribeTrades(SubscribeTradesCommand),
    /// Unsubscribe a stream by channel id
    UnsubscribeChannel(UnsubscribeChannelCommand),
}

impl BitfinexCommand {
    /// The wire operation or event name this command produces.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::CancelOrder(_) => "oc",
            Self::CancelOrderGroup(_) => "oc_multi",
            Self::Order(_) => "on",
            Self::Ping(_) => "ping",
            Self::SetConnectionFeatures(_) => "conf",
            Self::SubscribeCandles(_)
            | Self::SubscribeOrderBook(_)
            | Self::SubscribeTicker(_)
            | Self::SubscribeTrades(_) => "subscribe",
            Self::UnsubscribeChannel(_) => "unsubscribe",
        }
    }

    /// Access the resolver capability, for commands that need one.
    pub fn as_resolver_aware(&mut self) -> Option<&mut dyn ChannelResolverAware> {
        match self {
            Self::UnsubscribeChannel(command) => Some(command),
            _ => None,
        }
    }

    /// Encode this command into its wire frame.
    pub fn encode(&self, configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        match self {
            Self::Auth(command) => command.encode(configuration),
            Self::CancelOrder(command) => command.encode(configuration),
            Self::CancelOrderGroup(command) => command.encode(configuration),
            Self::Order(command) => command.encode(configuration),
            Self::Ping(command) => command.encode(configuration),
            Self::SetConnectionFeatures(command) => command.encode(configuration),
            Self::SubscribeCandles(command) => command.encode(configuration),
            Self::SubscribeOrderBook(command) => command.encode(configuration),
            Self::SubscribeTicker(command) => command.encode(configuration),
            Self::SubscribeTrades(command) => command.encode(configuration),
            Self::UnsubscribeChannel(command) => command.encode(configuration),
        }
    }
}

impl From<AuthCommand> for BitfinexCommand {
    fn from(command: AuthCommand) -> Self {
        Self::Auth(command)
    }
}

impl From<CancelOrderCommand> for BitfinexCommand {
    fn from(command: CancelOrderCommand) -> Self {
        Self::CancelOrder(command)
    }
}

impl From<CancelOrderGroupCommand> for BitfinexCommand {
    fn from(command: CancelOrderGroupCommand) -> Self {
        Self::CancelOrderGroup(command)
    }
}

impl From<OrderCommand> for BitfinexCommand {
    fn from(command: OrderCommand) -> Self {
        Self::Order(command)
    }
}

impl From<PingCommand> for BitfinexCommand {
    fn from(command: PingCommand) -> Self {
        Self::Ping(command)
    }
}

impl From<SetConnectionFeaturesCommand> for BitfinexCommand {
    fn from(command: SetConnectionFeaturesCommand) -> Self {
        Self::SetConnectionFeatures(command)
    }
}

impl From<SubscribeCandlesCommand> for BitfinexCommand {
    fn from(command: SubscribeCandlesCommand) -> Self {
        Self::SubscribeCandles(command)
    }
}

impl From<SubscribeOrderBookCommand> for BitfinexCommand {
    fn from(command: SubscribeOrderBookCommand) -> Self {
        Self::SubscribeOrderBook(command)
    }
}

impl From<SubscribeTickerCommand> for BitfinexCommand {
    fn from(command: SubscribeTickerCommand) -> Self {
        Self::SubscribeTicker(command)
    }
}

impl From<SubscribeTradesCommand> for BitfinexCommand {
    fn from(command: SubscribeTradesCommand) -> Self {
        Self::SubscribeTrades(command)
    }
}

impl From<UnsubscribeChannelCommand> for BitfinexCommand {
    fn from(command: UnsubscribeChannelCommand) -> Self {
        Self::UnsubscribeChannel(command)
    }
}

/// Encode a batch of pending commands in order.
///
/// Resolver-aware commands get the registry's resolver attached before
/// encoding. Stops at the first failing command; nothing of the failed
/// command reaches the output.
pub fn encode_pending(
    commands: &mut [BitfinexCommand],
    configuration: &BitfinexClientConfiguration,
    registry: &ChannelRegistry,
) -> EncodeResult<Vec<String>> {
    let mut frames = Vec::with_capacity(commands.len());

    for command in commands.iter_mut() {
        if let Some(aware) = command.as_resolver_aware() {
            aware.attach_resolver(registry.resolver());
        }
        let frame = command.encode(configuration)?;
        tracing::trace!("Sending frame: {}", frame.trim_end());
        frames.push(frame);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::BitfinexCurrencyPair;
    use crate::error::EncodingError;
    use crate::symbol::BitfinexTickerSymbol;

    fn ticker_symbol() -> BitfinexTickerSymbol {
        BitfinexTickerSymbol::new(BitfinexCurrencyPair::of("BCH", "USD"))
    }

    #[test]
    fn test_operation_names() {
        let command: BitfinexCommand = PingCommand::new().into();
        assert_eq!(command.operation(), "ping");

        let command: BitfinexCommand = CancelOrderCommand::new(123).into();
        assert_eq!(command.operation(), "oc");

        let command: BitfinexCommand = SubscribeTickerCommand::new(ticker_symbol()).into();
        assert_eq!(command.operation(), "subscribe");

        let command: BitfinexCommand = UnsubscribeChannelCommand::new(ticker_symbol()).into();
        assert_eq!(command.operation(), "unsubscribe");
    }

    #[test]
    fn test_only_unsubscribe_is_resolver_aware() {
        let mut command: BitfinexCommand = UnsubscribeChannelCommand::new(ticker_symbol()).into();
        assert!(command.as_resolver_aware().is_some());

        let mut command: BitfinexCommand = PingCommand::new().into();
        assert!(command.as_resolver_aware().is_none());

        let mut command: BitfinexCommand = SubscribeTickerCommand::new(ticker_symbol()).into();
        assert!(command.as_resolver_aware().is_none());
    }

    #[test]
    fn test_encode_pending_injects_resolver() {
        let registry = ChannelRegistry::new();
        registry.register(ticker_symbol().into(), 12);

        let mut commands: Vec<BitfinexCommand> = vec![
            PingCommand::new().into(),
            UnsubscribeChannelCommand::new(ticker_symbol()).into(),
        ];

        let frames = encode_pending(
            &mut commands,
            &BitfinexClientConfiguration::anonymous(),
            &registry,
        )
        .unwrap();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], "{\"event\":\"ping\"}\n");
        assert_eq!(frames[1], "{\"event\":\"unsubscribe\",\"chanId\":12}\n");
    }

    #[test]
    fn test_encode_pending_fails_on_unknown_channel() {
        let registry = ChannelRegistry::new();

        let mut commands: Vec<BitfinexCommand> =
            vec![UnsubscribeChannelCommand::new(ticker_symbol()).into()];

        let result = encode_pending(
            &mut commands,
            &BitfinexClientConfiguration::anonymous(),
            &registry,
        );

        assert!(matches!(result, Err(EncodingError::UnknownChannel(_))));
    }
}
