// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Browser front end of the shopping cart client.
//!
//! Build with `trunk serve` from this directory; the API is expected at the URL given by the
//! `cart-api-url` meta tag in `index.html`.

use cart_core::Coordinator;

mod api;
mod dom;
mod events;
mod spawner;
mod view;

use api::HttpApi;
use dom::Surface;
use spawner::WasmSpawner;
use view::DomView;

type Cart = Coordinator<HttpApi, DomView, WasmSpawner>;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let document = dom::document();
    let config = dom::read_config(&document);
    tracing::info!(api_url = %config.api_url, "start cart client");

    let surface = Surface::locate(&document);
    let view = DomView::new(document, surface.clone(), config.notice_timeout_ms);
    let cart: Cart = Coordinator::new(HttpApi::new(config.endpoints()), view, WasmSpawner);

    if let Err(err) = cart.init() {
        tracing::error!("could not load the cart: {err}");
    }
    events::attach(&surface, &cart);
}
