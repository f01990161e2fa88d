// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use cart_core::{AmountPatch, ApiError, CartApi, CartItem, Endpoints, InventoryItem, ItemId};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// [`CartApi`] over `fetch`.
#[derive(Clone, Debug)]
pub(crate) struct HttpApi {
    endpoints: Endpoints,
}

impl HttpApi {
    pub(crate) fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
    let request = request.map_err(|err| ApiError::Transport(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Server {
            status: response.status(),
            reason: response.status_text(),
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

impl CartApi for HttpApi {
    async fn get_inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        let url = self.endpoints.inventory();
        tracing::debug!("GET {url}");
        decode(send(Request::get(&url).build()).await?).await
    }

    async fn get_cart(&self) -> Result<Vec<CartItem>, ApiError> {
        let url = self.endpoints.cart();
        tracing::debug!("GET {url}");
        decode(send(Request::get(&url).build()).await?).await
    }

    async fn add_to_cart(&self, item: &CartItem) -> Result<CartItem, ApiError> {
        let url = self.endpoints.cart();
        tracing::debug!("POST {url} id={}", item.id);
        decode(send(Request::post(&url).json(item)).await?).await
    }

    async fn update_cart(&self, id: &ItemId, amount: u32) -> Result<CartItem, ApiError> {
        let url = self.endpoints.cart_item(id);
        tracing::debug!("PATCH {url} amount={amount}");
        decode(send(Request::patch(&url).json(&AmountPatch { amount })).await?).await
    }

    async fn delete_from_cart(&self, id: &ItemId) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoints.cart_item(id);
        tracing::debug!("DELETE {url}");
        let response = send(Request::delete(&url).build()).await?;
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        // Some servers answer a delete with an empty body.
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }
}
