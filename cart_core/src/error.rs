// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::ItemId;

/// A failed call against the cart API.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent, or no response arrived.
    #[error("could not reach the server: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server answered {status} {reason}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Status text sent along with the code.
        reason: String,
    },
    /// The response body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Why a user action was not carried out.
///
/// None of these leave any trace in the local state.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// The list the action works on has no item with this id.
    #[error("no item with id {0}")]
    NotFound(ItemId),
    /// A cart request for this item has not completed yet.
    #[error("a request for item {0} is still in flight")]
    Busy(ItemId),
    /// Cart actions wait until checkout is done.
    #[error("checkout is in progress")]
    CheckoutInProgress,
    /// Checkout waits until every item request is done.
    #[error("other cart requests are still in flight")]
    RequestsInFlight,
    /// Adding the picked amount would take the cart entry past `u32::MAX`.
    #[error("the cart can't hold more of item {0}")]
    AmountOverflow(ItemId),
    /// The executor no longer accepts tasks.
    #[error("the request could not be scheduled")]
    Spawn,
}
