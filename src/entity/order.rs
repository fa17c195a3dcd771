//! New-order entity, order types, and the order builder.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::currency::BitfinexCurrencyPair;
use crate::entity::flags::{combined_flags, BitfinexOrderFlag};

// ============================================================================
// Order type
// ============================================================================

/// Order execution type.
///
/// The plain variants trade on margin; the `Exchange*` variants trade the
/// exchange wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitfinexOrderType {
    #[serde(rename = "MARKET")]
    Market,
    #[serde(rename = "EXCHANGE MARKET")]
    ExchangeMarket,
    #[serde(rename = "LIMIT")]
    Limit,
    #[serde(rename = "EXCHANGE LIMIT")]
    ExchangeLimit,
    #[serde(rename = "STOP")]
    Stop,
    #[serde(rename = "EXCHANGE STOP")]
    ExchangeStop,
    #[serde(rename = "STOP LIMIT")]
    StopLimit,
    #[serde(rename = "EXCHANGE STOP LIMIT")]
    ExchangeStopLimit,
    #[serde(rename = "TRAILING STOP")]
    TrailingStop,
    #[serde(rename = "EXCHANGE TRAILING STOP")]
    ExchangeTrailingStop,
    #[serde(rename = "FOK")]
    Fok,
    #[serde(rename = "EXCHANGE FOK")]
    ExchangeFok,
    #[serde(rename = "IOC")]
    Ioc,
    #[serde(rename = "EXCHANGE IOC")]
    ExchangeIoc,
}

impl BitfinexOrderType {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::ExchangeMarket => "EXCHANGE MARKET",
            Self::Limit => "LIMIT",
            Self::ExchangeLimit => "EXCHANGE LIMIT",
            Self::Stop => "STOP",
            Self::ExchangeStop => "EXCHANGE STOP",
            Self::StopLimit => "STOP LIMIT",
            Self::ExchangeStopLimit => "EXCHANGE STOP LIMIT",
            Self::TrailingStop => "TRAILING STOP",
            Self::ExchangeTrailingStop => "EXCHANGE TRAILING STOP",
            Self::Fok => "FOK",
            Self::ExchangeFok => "EXCHANGE FOK",
            Self::Ioc => "IOC",
            Self::ExchangeIoc => "EXCHANGE IOC",
        }
    }
}

impl std::fmt::Display for BitfinexOrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// New order entity
// ============================================================================

/// A new order to be submitted over the wire.
///
/// Order type, currency pair, and amount are always present; everything else
/// is optional and left off the wire frame entirely when unset. Construct
/// through [`BitfinexOrderBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitfinexNewOrder {
    currency_pair: BitfinexCurrencyPair,
    order_type: BitfinexOrderType,
    amount: Decimal,
    price: Option<Decimal>,
    price_trailing: Option<Decimal>,
    price_aux_limit: Option<Decimal>,
    price_oco_stop: Option<Decimal>,
    order_flags: HashSet<BitfinexOrderFlag>,
    client_id: Option<i64>,
    client_group_id: Option<i64>,
}

impl BitfinexNewOrder {
    /// The traded currency pair.
    pub fn currency_pair(&self) -> &BitfinexCurrencyPair {
        &self.currency_pair
    }

    /// The execution type.
    pub fn order_type(&self) -> BitfinexOrderType {
        self.order_type
    }

    /// Order amount; positive buys, negative sells.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Limit or stop price, if any.
    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Trailing price distance, if any.
    pub fn price_trailing(&self) -> Option<Decimal> {
        self.price_trailing
    }

    /// Auxiliary limit price for stop-limit orders, if any.
    pub fn price_aux_limit(&self) -> Option<Decimal> {
        self.price_aux_limit
    }

    /// OCO stop price, if any.
    pub fn price_oco_stop(&self) -> Option<Decimal> {
        self.price_oco_stop
    }

    /// The set of order flags; may be empty.
    pub fn order_flags(&self) -> &HashSet<BitfinexOrderFlag> {
        &self.order_flags
    }

    /// All flags combined into the single numeric wire value.
    pub fn combined_flags(&self) -> u64 {
        combined_flags(&self.order_flags)
    }

    /// Client-assigned order id, if any.
    pub fn client_id(&self) -> Option<i64> {
        self.client_id
    }

    /// Client-assigned order group id, if any.
    pub fn client_group_id(&self) -> Option<i64> {
        self.client_group_id
    }
}

// ============================================================================
// Order builder
// ============================================================================

/// Builder for [`BitfinexNewOrder`].
///
/// The required fields are taken at construction; all optional attributes
/// are added with `with_*` steps.
///
/// # Example
///
/// ```rust,ignore
/// use bitfinex_wss::prelude::*;
///
/// let order = BitfinexOrderBuilder::new(
///         BitfinexCurrencyPair::of("BCH", "USD"),
///         BitfinexOrderType::ExchangeLimit,
///         dec!(2.0),
///     )
///     .with_price(dec!(120.5))
///     .with_order_flag(BitfinexOrderFlag::PostOnly)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct BitfinexOrderBuilder {
    order: BitfinexNewOrder,
}

impl BitfinexOrderBuilder {
    /// Start building an order from its required fields.
    pub fn new(
        currency_pair: BitfinexCurrencyPair,
        order_type: BitfinexOrderType,
        amount: Decimal,
    ) -> Self {
        Self {
            order: BitfinexNewOrder {
                currency_pair,
                order_type,
                amount,
                price: None,
                price_trailing: None,
                price_aux_limit: None,
                price_oco_stop: None,
                order_flags: HashSet::new(),
                client_id: None,
                client_group_id: None,
            },
        }
    }

    /// Set the limit or stop price.
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.order.price = Some(price);
        self
    }

    /// Set the trailing price distance.
    pub fn with_price_trailing(mut self, price_trailing: Decimal) -> Self {
        self.order.price_trailing = Some(price_trailing);
        self
    }

    /// Set the auxiliary limit price (stop-limit orders).
    pub fn with_price_aux_limit(mut self, price_aux_limit: Decimal) -> Self {
        self.order.price_aux_limit = Some(price_aux_limit);
        self
    }

    /// Set the OCO stop price.
    pub fn with_price_oco_stop(mut self, price_oco_stop: Decimal) -> Self {
        self.order.price_oco_stop = Some(price_oco_stop);
        self
    }

    /// Add an order flag; may be called multiple times.
    pub fn with_order_flag(mut self, flag: BitfinexOrderFlag) -> Self {
        self.order.order_flags.insert(flag);
        self
    }

    /// Set the client-assigned order id.
    pub fn with_client_id(mut self, client_id: i64) -> Self {
        self.order.client_id = Some(client_id);
        self
    }

    /// Set the client-assigned order group id.
    pub fn with_group_id(mut self, group_id: i64) -> Self {
        self.order.client_group_id = Some(group_id);
        self
    }

    /// Finish building.
    pub fn build(self) -> BitfinexNewOrder {
        self.order
    }
}
