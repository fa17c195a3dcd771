//! Integration tests for outbound command encoding.
//!
//! Builds every command variant against a fixed configuration and checks
//! the produced wire frames.

use std::collections::HashSet;
use std::sync::Arc;

use bitfinex_wss::prelude::*;
use rust_decimal_macros::dec;

fn test_configuration() -> BitfinexClientConfiguration {
    BitfinexClientConfiguration::new("abc", "123")
        .with_nonce_producer(Arc::new(|| "1518010751551".to_string()))
}

fn bch_usd() -> BitfinexCurrencyPair {
    BitfinexCurrencyPair::of("BCH", "USD")
}

fn bat_btc() -> BitfinexCurrencyPair {
    BitfinexCurrencyPair::of("BAT", "BTC")
}

fn aggregated_book() -> BitfinexOrderBookSymbol {
    BitfinexOrderBookSymbol::new(
        bch_usd(),
        BitfinexOrderBookPrecision::P0,
        BitfinexOrderBookFrequency::F0,
        50,
    )
}

// =============================================================================
// Whole command set
// =============================================================================

mod all_commands {
    use super::*;

    fn all_commands() -> Vec<BitfinexCommand> {
        let order =
            BitfinexOrderBuilder::new(bch_usd(), BitfinexOrderType::ExchangeStop, dec!(2.0))
                .build();
        let candles =
            BitfinexCandlestickSymbol::new(bch_usd(), BitfinexCandleTimeFrame::OneHour);

        vec![
            AuthCommand::new().into(),
            CancelOrderCommand::new(123).into(),
            CancelOrderGroupCommand::new(1).into(),
            OrderCommand::new(order).into(),
            PingCommand::new().into(),
            SubscribeCandlesCommand::new(candles).into(),
            SubscribeTickerCommand::new(BitfinexTickerSymbol::new(bch_usd())).into(),
            SubscribeTradesCommand::new(BitfinexExecutedTradeSymbol::new(bat_btc())).into(),
            SubscribeOrderBookCommand::new(aggregated_book()).into(),
            SubscribeOrderBookCommand::new(BitfinexOrderBookSymbol::raw(bat_btc())).into(),
            UnsubscribeChannelCommand::new(aggregated_book()).into(),
            SetConnectionFeaturesCommand::new(HashSet::new()).into(),
        ]
    }

    #[test]
    fn test_every_command_encodes() {
        let registry = ChannelRegistry::new();
        registry.register(aggregated_book().into(), 12);

        let mut commands = all_commands();
        let frames = encode_pending(&mut commands, &test_configuration(), &registry).unwrap();

        assert_eq!(frames.len(), commands.len());
        for frame in &frames {
            assert!(frame.len() > 10, "short frame: {}", frame);
            assert!(frame.ends_with('\n'));
        }
    }

    #[test]
    fn test_every_frame_parses_as_json() {
        let registry = ChannelRegistry::new();
        registry.register(aggregated_book().into(), 12);

        let mut commands = all_commands();
        let frames = encode_pending(&mut commands, &test_configuration(), &registry).unwrap();

        for frame in &frames {
            let value: serde_json::Value = serde_json::from_str(frame).unwrap();
            assert!(value.is_object() || value.is_array());
        }
    }

    #[test]
    fn test_encoding_is_idempotent() {
        let registry = ChannelRegistry::new();
        registry.register(aggregated_book().into(), 12);

        let mut first = all_commands();
        let mut second = all_commands();
        let configuration = test_configuration();

        let first_frames = encode_pending(&mut first, &configuration, &registry).unwrap();
        let second_frames = encode_pending(&mut second, &configuration, &registry).unwrap();

        assert_eq!(first_frames, second_frames);

        // Re-encoding the same command values yields the same frames again.
        let repeated = encode_pending(&mut first, &configuration, &registry).unwrap();
        assert_eq!(first_frames, repeated);
    }
}

// =============================================================================
// Order command
// =============================================================================

mod order_command {
    use super::*;

    #[test]
    fn test_order_with_optionals() {
        let order =
            BitfinexOrderBuilder::new(bch_usd(), BitfinexOrderType::ExchangeStop, dec!(2.0))
                .with_order_flag(BitfinexOrderFlag::Hidden)
                .with_price(dec!(12))
                .with_price_aux_limit(dec!(23))
                .with_price_trailing(dec!(23))
                .with_group_id(4)
                .build();

        let frame = OrderCommand::new(order)
            .encode(&test_configuration())
            .unwrap();

        assert!(frame.len() > 10);
        assert!(frame.contains("\"2.0\""));
        assert!(frame.contains("\"flags\":64"));
        assert!(frame.contains("\"gid\":4"));
    }

    #[test]
    fn test_minimal_order_has_no_optional_keys() {
        let order =
            BitfinexOrderBuilder::new(bch_usd(), BitfinexOrderType::ExchangeStop, dec!(2.0))
                .build();

        let frame = OrderCommand::new(order)
            .encode(&test_configuration())
            .unwrap();

        // [0,"on",null,{...}] with exactly the three required keys
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value[0], 0);
        assert_eq!(value[1], "on");
        assert!(value[2].is_null());

        let params = value[3].as_object().unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params["type"], "EXCHANGE STOP");
        assert_eq!(params["symbol"], "tBCHUSD");
        assert_eq!(params["amount"], "2.0");
    }

    #[test]
    fn test_flag_combination_is_insertion_order_independent() {
        let forward = BitfinexOrderBuilder::new(bch_usd(), BitfinexOrderType::Limit, dec!(1))
            .with_order_flag(BitfinexOrderFlag::Hidden)
            .with_order_flag(BitfinexOrderFlag::PostOnly)
            .with_order_flag(BitfinexOrderFlag::Oco)
            .build();
        let reverse = BitfinexOrderBuilder::new(bch_usd(), BitfinexOrderType::Limit, dec!(1))
            .with_order_flag(BitfinexOrderFlag::Oco)
            .with_order_flag(BitfinexOrderFlag::PostOnly)
            .with_order_flag(BitfinexOrderFlag::Hidden)
            .build();

        let configuration = test_configuration();
        let forward_frame = OrderCommand::new(forward).encode(&configuration).unwrap();
        let reverse_frame = OrderCommand::new(reverse).encode(&configuration).unwrap();

        assert_eq!(forward_frame, reverse_frame);
        assert!(forward_frame.contains(&format!("\"flags\":{}", 64 + 4096 + 16384)));
    }
}

// =============================================================================
// Unsubscribe command and channel resolution
// =============================================================================

mod unsubscribe_command {
    use super::*;

    #[test]
    fn test_unsubscribe_without_resolver_fails() {
        let command = UnsubscribeChannelCommand::new(aggregated_book());

        let result = command.encode(&test_configuration());

        assert!(matches!(result, Err(EncodingError::ResolverNotAttached)));
    }

    #[test]
    fn test_unsubscribe_with_fixed_resolver() {
        let command =
            UnsubscribeChannelCommand::new(aggregated_book()).with_resolver(Arc::new(|_| Some(12)));

        let frame = command.encode(&test_configuration()).unwrap();

        assert_eq!(frame, "{\"event\":\"unsubscribe\",\"chanId\":12}\n");
    }

    #[test]
    fn test_unsubscribe_through_registry() {
        let registry = ChannelRegistry::new();
        registry.register(aggregated_book().into(), 815);

        let command =
            UnsubscribeChannelCommand::new(aggregated_book()).with_resolver(registry.resolver());

        let frame = command.encode(&test_configuration()).unwrap();
        assert!(frame.contains("\"chanId\":815"));

        // Not subscribed anymore: the resolver reports the gap
        registry.remove_channel(815);
        let result = command.encode(&test_configuration());
        assert!(matches!(result, Err(EncodingError::UnknownChannel(_))));
    }
}

// =============================================================================
// Auth command
// =============================================================================

mod auth_command {
    use super::*;

    #[test]
    fn test_auth_payload_embeds_nonce() {
        let frame = AuthCommand::new().encode(&test_configuration()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();

        assert_eq!(value["event"], "auth");
        assert_eq!(value["apiKey"], "abc");
        assert_eq!(value["authNonce"], "1518010751551");
        assert_eq!(value["authPayload"], "AUTH1518010751551");
        assert_eq!(value["authSig"].as_str().unwrap().len(), 96);
    }

    #[test]
    fn test_auth_needs_credentials() {
        let result = AuthCommand::new().encode(&BitfinexClientConfiguration::anonymous());

        assert!(matches!(result, Err(EncodingError::Configuration(_))));
    }
}
