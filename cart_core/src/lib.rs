// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Platform independent core of the shopping cart web client.
//!
//! The client shows an inventory and a cart loaded from a JSON API. Users pick amounts in
//! the inventory, move them into the cart, remove cart entries and check out. Changes are
//! applied locally first and then sent to the server; see [`Coordinator`] for how failed
//! requests are rolled back.
//!
//! Everything touching the browser lives behind two traits: [`CartApi`] performs the
//! requests and [`CartView`] renders the lists. Requests run as tasks on a
//! [`LocalSpawn`](futures::task::LocalSpawn) spawner.

mod api;
mod config;
mod coordinator;
mod error;
mod model;
mod pending;
mod state;
mod view;

pub use api::CartApi;
pub use config::{Config, DEFAULT_API_URL, DEFAULT_NOTICE_TIMEOUT_MS, Endpoints};
pub use coordinator::Coordinator;
pub use error::{ActionError, ApiError};
pub use model::{AmountPatch, CartItem, InventoryItem, ItemId};
pub use state::{Change, State};
pub use view::{Action, CartView, Notice};
