//! New-order command (`on` operation).

use rust_decimal::Decimal;
use serde::Serialize;

use crate::command::frame;
use crate::config::BitfinexClientConfiguration;
use crate::entity::{BitfinexNewOrder, BitfinexOrderType};
use crate::error::EncodeResult;

/// Submits a new order.
#[derive(Debug, Clone)]
pub struct OrderCommand {
    order: BitfinexNewOrder,
}

/// Wire parameter object of an `on` frame.
///
/// Every optional stays off the wire when unset; the exchange treats a null
/// differently from an absent key.
#[derive(Serialize)]
struct OrderParams {
    #[serde(rename = "type")]
    order_type: BitfinexOrderType,
    symbol: String,
    amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_trailing: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_aux_limit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_oco_stop: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gid: Option<i64>,
}

impl OrderCommand {
    /// Create the command for one order.
    pub fn new(order: BitfinexNewOrder) -> Self {
        Self { order }
    }

    /// The wrapped order.
    pub fn order(&self) -> &BitfinexNewOrder {
        &self.order
    }

    /// Encode the order into its input frame.
    pub fn encode(&self, _configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        let order = &self.order;
        let params = OrderParams {
            order_type: order.order_type(),
            symbol: order.currency_pair().to_bitfinex_string(),
            amount: order.amount(),
            price: order.price(),
            price_trailing: order.price_trailing(),
            price_aux_limit: order.price_aux_limit(),
            price_oco_stop: order.price_oco_stop(),
            flags: (!order.order_flags().is_empty()).then(|| order.combined_flags()),
            cid: order.client_id(),
            gid: order.client_group_id(),
        };

        let frame = frame::input_frame("on", &params)?;
        tracing::debug!("Encoded order frame: {}", frame.trim_end());
        Ok(frame)
    }
}
