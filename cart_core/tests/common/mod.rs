// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, reason = "Not every test binary uses every helper")]
#![allow(unreachable_pub, reason = "Shared between test binaries")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cart_core::{
    ApiError, CartApi, CartItem, CartView, Coordinator, InventoryItem, ItemId, Notice,
};
use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};

pub fn id(n: u64) -> ItemId {
    ItemId::Number(n)
}

pub fn stock(n: u64, content: &str, amount: u32) -> InventoryItem {
    InventoryItem::new(id(n), content).with_amount(amount)
}

pub fn entry(n: u64, content: &str, amount: u32) -> CartItem {
    CartItem::new(id(n), content, amount)
}

pub fn server_error() -> ApiError {
    ApiError::Server {
        status: 500,
        reason: "Internal Server Error".into(),
    }
}

/// A request the coordinator made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    GetInventory,
    GetCart,
    Add(CartItem),
    Update(ItemId, u32),
    Delete(ItemId),
}

type FailWhen = Box<dyn Fn(&Call) -> bool>;

#[derive(Default)]
struct ServerState {
    inventory: RefCell<Vec<InventoryItem>>,
    cart: RefCell<Vec<CartItem>>,
    calls: RefCell<Vec<Call>>,
    fail_when: RefCell<Option<FailWhen>>,
    held: Cell<bool>,
    parked: RefCell<Vec<(Call, oneshot::Sender<()>)>>,
}

/// An in-memory cart server.
///
/// Calls can be scripted to fail, and while [held](Self::hold) they don't complete until
/// released, in any order the test likes.
#[derive(Clone, Default)]
pub struct MockApi {
    server: Rc<ServerState>,
}

impl MockApi {
    pub fn new(inventory: Vec<InventoryItem>, cart: Vec<CartItem>) -> Self {
        let api = Self::default();
        *api.server.inventory.borrow_mut() = inventory;
        *api.server.cart.borrow_mut() = cart;
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.server.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.server.calls.borrow_mut().clear();
    }

    pub fn server_cart(&self) -> Vec<CartItem> {
        self.server.cart.borrow().clone()
    }

    /// Makes every matching call answer with [`server_error`].
    pub fn fail_when(&self, fail_when: impl Fn(&Call) -> bool + 'static) {
        *self.server.fail_when.borrow_mut() = Some(Box::new(fail_when));
    }

    pub fn stop_failing(&self) {
        *self.server.fail_when.borrow_mut() = None;
    }

    /// Parks calls made from now on until they are released.
    pub fn hold(&self) {
        self.server.held.set(true);
    }

    pub fn parked(&self) -> Vec<Call> {
        self.server
            .parked
            .borrow()
            .iter()
            .map(|(call, _)| call.clone())
            .collect()
    }

    /// Lets the parked call at `index` complete.
    pub fn release(&self, index: usize) {
        let (_, release) = self.server.parked.borrow_mut().remove(index);
        let _ = release.send(());
    }

    /// Lets all parked calls complete and stops parking new ones.
    pub fn release_all(&self) {
        self.server.held.set(false);
        for (_, release) in self.server.parked.borrow_mut().drain(..) {
            let _ = release.send(());
        }
    }

    async fn handle<T>(
        &self,
        call: Call,
        apply: impl FnOnce(&ServerState) -> T,
    ) -> Result<T, ApiError> {
        self.server.calls.borrow_mut().push(call.clone());
        if self.server.held.get() {
            let (release, released) = oneshot::channel();
            self.server.parked.borrow_mut().push((call.clone(), release));
            let _ = released.await;
        }
        let fails = self
            .server
            .fail_when
            .borrow()
            .as_ref()
            .is_some_and(|fail_when| fail_when(&call));
        if fails {
            return Err(server_error());
        }
        Ok(apply(&self.server))
    }
}

impl CartApi for MockApi {
    async fn get_inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.handle(Call::GetInventory, |server| server.inventory.borrow().clone()).await
    }

    async fn get_cart(&self) -> Result<Vec<CartItem>, ApiError> {
        self.handle(Call::GetCart, |server| server.cart.borrow().clone()).await
    }

    async fn add_to_cart(&self, item: &CartItem) -> Result<CartItem, ApiError> {
        self.handle(Call::Add(item.clone()), |server| {
            server.cart.borrow_mut().push(item.clone());
            item.clone()
        })
        .await
    }

    async fn update_cart(&self, id: &ItemId, amount: u32) -> Result<CartItem, ApiError> {
        let updated = self
            .handle(Call::Update(id.clone(), amount), |server| {
                let mut cart = server.cart.borrow_mut();
                let entry = cart.iter_mut().find(|entry| entry.id == *id)?;
                entry.amount = amount;
                Some(entry.clone())
            })
            .await?;
        updated.ok_or(ApiError::Server {
            status: 404,
            reason: "Not Found".into(),
        })
    }

    async fn delete_from_cart(&self, id: &ItemId) -> Result<serde_json::Value, ApiError> {
        self.handle(Call::Delete(id.clone()), |server| {
            server.cart.borrow_mut().retain(|entry| entry.id != *id);
            serde_json::json!({})
        })
        .await
    }
}

/// Something the coordinator showed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shown {
    Inventory(Vec<InventoryItem>),
    Cart(Vec<CartItem>),
    Notice(Notice),
}

/// A view that remembers everything it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingView {
    shown: RefCell<Vec<Shown>>,
}

impl RecordingView {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.borrow().clone()
    }

    pub fn clear(&self) {
        self.shown.borrow_mut().clear();
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.shown
            .borrow()
            .iter()
            .filter_map(|shown| match shown {
                Shown::Notice(notice) => Some(notice.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_inventory(&self) -> Option<Vec<InventoryItem>> {
        self.shown.borrow().iter().rev().find_map(|shown| match shown {
            Shown::Inventory(items) => Some(items.clone()),
            _ => None,
        })
    }

    pub fn last_cart(&self) -> Option<Vec<CartItem>> {
        self.shown.borrow().iter().rev().find_map(|shown| match shown {
            Shown::Cart(items) => Some(items.clone()),
            _ => None,
        })
    }
}

impl CartView for RecordingView {
    fn render_inventory(&self, items: &[InventoryItem]) {
        self.shown.borrow_mut().push(Shown::Inventory(items.to_vec()));
    }

    fn render_cart(&self, items: &[CartItem]) {
        self.shown.borrow_mut().push(Shown::Cart(items.to_vec()));
    }

    fn notify(&self, notice: &Notice) {
        self.shown.borrow_mut().push(Shown::Notice(notice.clone()));
    }
}

/// A coordinator over a [`MockApi`], driven by a [`LocalPool`].
pub struct Harness {
    pub pool: LocalPool,
    pub api: MockApi,
    pub cart: Coordinator<MockApi, RecordingView, LocalSpawner>,
}

impl Harness {
    /// Creates the coordinator and lets its initial load complete.
    pub fn new(inventory: Vec<InventoryItem>, cart: Vec<CartItem>) -> Self {
        let mut harness = Self::unloaded(inventory, cart);
        harness.cart.init().unwrap();
        harness.settle();
        harness.api.clear_calls();
        harness.view().clear();
        harness
    }

    pub fn unloaded(inventory: Vec<InventoryItem>, cart: Vec<CartItem>) -> Self {
        let pool = LocalPool::new();
        let api = MockApi::new(inventory, cart);
        let cart = Coordinator::new(api.clone(), RecordingView::default(), pool.spawner());
        Self { pool, api, cart }
    }

    /// Runs every request that can make progress.
    pub fn settle(&mut self) {
        self.pool.run_until_stalled();
    }

    pub fn view(&self) -> &RecordingView {
        self.cart.view()
    }

    pub fn amount(&self, n: u64) -> Option<u32> {
        self.cart
            .state()
            .inventory_item(&id(n))
            .map(|item| item.amount)
    }

    pub fn local_cart(&self) -> Vec<CartItem> {
        self.cart.state().cart().to_vec()
    }
}
