// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::future::Future;

use crate::{ApiError, CartItem, InventoryItem, ItemId};

/// The remote cart API.
///
/// The returned futures are polled on a single-threaded executor, so they don't need to be
/// `Send`.
pub trait CartApi: 'static {
    /// `GET /inventory`
    fn get_inventory(&self) -> impl Future<Output = Result<Vec<InventoryItem>, ApiError>>;

    /// `GET /cart`
    fn get_cart(&self) -> impl Future<Output = Result<Vec<CartItem>, ApiError>>;

    /// `POST /cart`, answering with the entry as stored by the server.
    fn add_to_cart(
        &self,
        item: &CartItem,
    ) -> impl Future<Output = Result<CartItem, ApiError>>;

    /// `PATCH /cart/:id` with only the new amount.
    fn update_cart(
        &self,
        id: &ItemId,
        amount: u32,
    ) -> impl Future<Output = Result<CartItem, ApiError>>;

    /// `DELETE /cart/:id`. The confirmation payload carries no meaning.
    fn delete_from_cart(
        &self,
        id: &ItemId,
    ) -> impl Future<Output = Result<serde_json::Value, ApiError>>;
}
