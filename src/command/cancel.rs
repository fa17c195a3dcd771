//! Order cancellation commands (`oc` and `oc_multi` operations).

use serde::Serialize;

use crate::command::frame;
use crate::config::BitfinexClientConfiguration;
use crate::error::EncodeResult;

/// Cancels a single order by its exchange-assigned id.
#[derive(Debug, Clone)]
pub struct CancelOrderCommand {
    order_id: i64,
}

#[derive(Serialize)]
struct CancelParams {
    id: i64,
}

impl CancelOrderCommand {
    /// Create the command for one order id.
    pub fn new(order_id: i64) -> Self {
        Self { order_id }
    }

    /// The order id to cancel.
    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    /// Encode the cancellation into its input frame.
    pub fn encode(&self, _configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        frame::input_frame("oc", &CancelParams { id: self.order_id })
    }
}

/// Cancels every order belonging to a client group id.
#[derive(Debug, Clone)]
pub struct CancelOrderGroupCommand {
    group_id: i64,
}

// The protocol takes a list of group ids here; one id still travels as a list.
#[derive(Serialize)]
struct CancelGroupParams {
    gid: [i64; 1],
}

impl CancelOrderGroupCommand {
    /// Create the command for one group id.
    pub fn new(group_id: i64) -> Self {
        Self { group_id }
    }

    /// The group id to cancel.
    pub fn group_id(&self) -> i64 {
        self.group_id
    }

    /// Encode the group cancellation into its input frame.
    pub fn encode(&self, _configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        frame::input_frame(
            "oc_multi",
            &CancelGroupParams {
                gid: [self.group_id],
            },
        )
    }
}
