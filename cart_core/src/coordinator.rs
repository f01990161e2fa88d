// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Ties user actions to the state, the view and the API.
//!
//! Every action first mutates the local state and renders it, then issues its request as a
//! task on the spawner. When a request fails, its local mutation is reverted, the affected
//! lists are rendered again and a [`Notice`] is shown.
//!
//! While a cart request for an item is in flight, further cart actions on that item are
//! rejected with [`ActionError::Busy`]. Checkout excludes all other cart requests.

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::join_all;
use futures::task::{LocalSpawn, LocalSpawnExt};

use crate::pending::{Pending, PendingToken};
use crate::{
    Action, ActionError, ApiError, CartApi, CartItem, CartView, Change, ItemId, Notice, State,
};

/// The request an add-to-cart action issues, depending on whether the cart already holds
/// the item.
#[derive(Debug)]
enum AddRequest {
    Create(CartItem),
    Update { amount: u32 },
}

/// Owns the state and coordinates the view and the API.
///
/// Cloning is cheap and yields a handle to the same coordinator, which is how event handlers
/// share it.
pub struct Coordinator<A, V, S> {
    inner: Rc<Inner<A, V, S>>,
}

struct Inner<A, V, S> {
    api: A,
    view: Rc<V>,
    spawner: S,
    state: RefCell<State>,
    pending: Pending,
    checkout: Cell<bool>,
}

impl<A, V, S> Clone for Coordinator<A, V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A, V, S> fmt::Debug for Coordinator<A, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("state", &self.inner.state)
            .field("pending", &self.inner.pending)
            .field("checkout", &self.inner.checkout.get())
            .finish_non_exhaustive()
    }
}

impl<A, V, S> Coordinator<A, V, S>
where
    A: CartApi,
    V: CartView,
    S: LocalSpawn + 'static,
{
    /// Creates a coordinator with empty lists, rendering every list replacement to `view`.
    pub fn new(api: A, view: V, spawner: S) -> Self {
        let view = Rc::new(view);
        let mut state = State::new();
        let subscriber = Rc::clone(&view);
        state.subscribe(move |change| match change {
            Change::Inventory(items) => subscriber.render_inventory(items),
            Change::Cart(items) => subscriber.render_cart(items),
        });
        Self {
            inner: Rc::new(Inner {
                api,
                view,
                spawner,
                state: RefCell::new(state),
                pending: Pending::default(),
                checkout: Cell::new(false),
            }),
        }
    }

    /// The view everything is rendered to.
    pub fn view(&self) -> &V {
        &self.inner.view
    }

    /// Read access to the current lists.
    ///
    /// The borrow must be released before any action is dispatched.
    pub fn state(&self) -> Ref<'_, State> {
        self.inner.state.borrow()
    }

    /// Whether no request started by an action is in flight.
    pub fn is_idle(&self) -> bool {
        self.inner.pending.is_empty() && !self.inner.checkout.get()
    }

    /// Whether a cart request for `id` is in flight.
    pub fn is_pending(&self, id: &ItemId) -> bool {
        self.inner.pending.contains(id)
    }

    /// Loads the inventory and the cart.
    ///
    /// Both requests run concurrently; each list is replaced as soon as it arrives.
    pub fn init(&self) -> Result<(), ActionError> {
        self.inner.ready()?;
        let this = Rc::clone(&self.inner);
        self.spawn(async move {
            let (inventory, cart) = futures::join!(this.api.get_inventory(), this.api.get_cart());
            match inventory {
                Ok(items) => {
                    tracing::info!("loaded {} inventory items", items.len());
                    this.state.borrow_mut().set_inventory(items);
                }
                Err(error) => {
                    tracing::error!("failed to load inventory: {error}");
                    this.view.notify(&Notice::LoadInventoryFailed(error));
                }
            }
            match cart {
                Ok(items) => {
                    tracing::info!("loaded {} cart entries", items.len());
                    this.state.borrow_mut().set_cart(items);
                }
                Err(error) => {
                    tracing::error!("failed to load cart: {error}");
                    this.view.notify(&Notice::LoadCartFailed(error));
                }
            }
        })
    }

    /// Runs the action a row control stands for.
    pub fn dispatch(&self, action: Action, id: &ItemId) -> Result<(), ActionError> {
        tracing::debug!(?action, %id, "dispatch");
        match action {
            Action::Increment => self.increment(id),
            Action::Decrement => self.decrement(id),
            Action::AddToCart => self.add_to_cart(id),
            Action::DeleteFromCart => self.delete_from_cart(id),
        }
    }

    /// Raises the pending amount of an item by one.
    pub fn increment(&self, id: &ItemId) -> Result<(), ActionError> {
        let mut state = self.inner.state.borrow_mut();
        let Some(item) = state.inventory_item_mut(id) else {
            return Err(not_found(id));
        };
        item.amount = item.amount.saturating_add(1);
        self.inner.view.render_inventory(state.inventory());
        Ok(())
    }

    /// Lowers the pending amount of an item, stopping at zero.
    pub fn decrement(&self, id: &ItemId) -> Result<(), ActionError> {
        let mut state = self.inner.state.borrow_mut();
        let Some(item) = state.inventory_item_mut(id) else {
            return Err(not_found(id));
        };
        if item.amount > 0 {
            item.amount -= 1;
            self.inner.view.render_inventory(state.inventory());
        }
        Ok(())
    }

    /// Moves the pending amount of an item into the cart.
    ///
    /// An existing entry for the item gets the amount added to it, otherwise a new entry is
    /// created. The inventory amount drops to zero right away. Nothing happens when the
    /// amount is already zero, and the action is refused when the merged amount would not
    /// fit a `u32`.
    pub fn add_to_cart(&self, id: &ItemId) -> Result<(), ActionError> {
        let token = self.inner.guard_cart_action(id)?;
        let mut state = self.inner.state.borrow_mut();
        let Some(item) = state.inventory_item(id) else {
            return Err(not_found(id));
        };
        if item.amount == 0 {
            tracing::debug!(%id, "nothing to add");
            return Ok(());
        }
        let entry = CartItem::from_inventory(item, item.amount);
        let moved = entry.amount;
        let content = entry.content.clone();
        let request = match state.cart_item(id) {
            Some(existing) => {
                let Some(amount) = existing.amount.checked_add(moved) else {
                    tracing::warn!(%id, "cart entry can't hold {moved} more");
                    return Err(ActionError::AmountOverflow(id.clone()));
                };
                AddRequest::Update { amount }
            }
            None => AddRequest::Create(entry),
        };

        match &request {
            AddRequest::Create(entry) => state.cart_mut().push(entry.clone()),
            AddRequest::Update { amount } => {
                if let Some(existing) = state.cart_item_mut(id) {
                    existing.amount = *amount;
                }
            }
        }
        if let Some(item) = state.inventory_item_mut(id) {
            item.amount = 0;
        }
        self.inner.view.render_inventory(state.inventory());
        drop(state);

        let this = Rc::clone(&self.inner);
        let id = id.clone();
        self.spawn(async move {
            let result = match &request {
                AddRequest::Create(entry) => this.api.add_to_cart(entry).await,
                AddRequest::Update { amount } => this.api.update_cart(&id, *amount).await,
            };
            this.finish_add_to_cart(&id, content, moved, &request, result);
            drop(token);
        })
    }

    /// Removes an entry from the cart.
    pub fn delete_from_cart(&self, id: &ItemId) -> Result<(), ActionError> {
        let token = self.inner.guard_cart_action(id)?;
        let mut state = self.inner.state.borrow_mut();
        let Some(position) = state.cart_position(id) else {
            return Err(not_found(id));
        };
        let mut cart = state.cart().to_vec();
        let removed = cart.remove(position);
        state.set_cart(cart);
        drop(state);

        let this = Rc::clone(&self.inner);
        self.spawn(async move {
            let result = this.api.delete_from_cart(&removed.id).await;
            this.finish_delete_from_cart(position, removed, result);
            drop(token);
        })
    }

    /// Deletes every entry of the server-side cart, then empties the local cart.
    ///
    /// Entries whose deletion failed stay in the cart.
    pub fn checkout(&self) -> Result<(), ActionError> {
        if self.inner.checkout.get() {
            tracing::warn!("checkout already in progress");
            return Err(ActionError::CheckoutInProgress);
        }
        if !self.inner.pending.is_empty() {
            tracing::warn!("checkout while cart requests are in flight");
            return Err(ActionError::RequestsInFlight);
        }
        self.inner.ready()?;
        self.inner.checkout.set(true);

        let this = Rc::clone(&self.inner);
        let spawned = self.spawn(async move {
            this.run_checkout().await;
            this.checkout.set(false);
        });
        if spawned.is_err() {
            self.inner.checkout.set(false);
        }
        spawned
    }

    fn spawn(&self, future: impl Future<Output = ()> + 'static) -> Result<(), ActionError> {
        self.inner.spawner.spawn_local(future).map_err(|err| {
            tracing::error!("could not schedule request: {err}");
            ActionError::Spawn
        })
    }
}

impl<A, V, S> Inner<A, V, S>
where
    A: CartApi,
    V: CartView,
    S: LocalSpawn,
{
    fn ready(&self) -> Result<(), ActionError> {
        self.spawner.status_local().map_err(|err| {
            tracing::error!("requests can't be scheduled: {err}");
            ActionError::Spawn
        })
    }

    fn guard_cart_action(&self, id: &ItemId) -> Result<PendingToken, ActionError> {
        if self.checkout.get() {
            tracing::warn!(%id, "cart is locked during checkout");
            return Err(ActionError::CheckoutInProgress);
        }
        self.ready()?;
        self.pending.acquire(id).ok_or_else(|| {
            tracing::warn!(%id, "request for item still in flight");
            ActionError::Busy(id.clone())
        })
    }

    fn finish_add_to_cart(
        &self,
        id: &ItemId,
        content: String,
        moved: u32,
        request: &AddRequest,
        result: Result<CartItem, ApiError>,
    ) {
        let error = match result {
            Ok(confirmed) => {
                tracing::debug!(%id, amount = confirmed.amount, "cart entry stored");
                self.view.render_cart(self.state.borrow().cart());
                return;
            }
            Err(error) => error,
        };
        tracing::error!(%id, "failed to store cart entry: {error}");

        let mut state = self.state.borrow_mut();
        if let Some(item) = state.inventory_item_mut(id) {
            item.amount = item.amount.saturating_add(moved);
        }
        if let Some(position) = state.cart_position(id) {
            let cart = state.cart_mut();
            let remaining = match request {
                AddRequest::Create(_) => 0,
                AddRequest::Update { .. } => cart[position].amount.saturating_sub(moved),
            };
            if remaining == 0 {
                cart.remove(position);
            } else {
                cart[position].amount = remaining;
            }
        }
        self.view.render_inventory(state.inventory());
        self.view.render_cart(state.cart());
        drop(state);

        self.view.notify(&Notice::AddToCartFailed { content, error });
    }

    fn finish_delete_from_cart(
        &self,
        position: usize,
        removed: CartItem,
        result: Result<serde_json::Value, ApiError>,
    ) {
        match result {
            Ok(_) => {
                tracing::debug!(id = %removed.id, "cart entry deleted");
                self.view.render_cart(self.state.borrow().cart());
            }
            Err(error) => {
                tracing::error!(id = %removed.id, "failed to delete cart entry: {error}");
                let content = removed.content.clone();
                let mut state = self.state.borrow_mut();
                let mut cart = state.cart().to_vec();
                cart.insert(position.min(cart.len()), removed);
                state.set_cart(cart);
                drop(state);
                self.view.notify(&Notice::DeleteFromCartFailed { content, error });
            }
        }
    }

    async fn run_checkout(&self) {
        let entries = match self.api.get_cart().await {
            Ok(entries) => entries,
            Err(error) => {
                tracing::error!("checkout could not fetch the cart: {error}");
                self.view.notify(&Notice::CheckoutFailed(error));
                return;
            }
        };
        tracing::info!("checking out {} cart entries", entries.len());

        let deletions = entries.iter().map(|entry| self.api.delete_from_cart(&entry.id));
        let results = join_all(deletions).await;
        let remaining: Vec<CartItem> = entries
            .into_iter()
            .zip(results)
            .filter_map(|(entry, result)| match result {
                Ok(_) => None,
                Err(error) => {
                    tracing::warn!(id = %entry.id, "checkout could not delete entry: {error}");
                    Some(entry)
                }
            })
            .collect();

        let count = remaining.len();
        self.state.borrow_mut().set_cart(remaining);
        if count > 0 {
            self.view.notify(&Notice::CheckoutIncomplete { remaining: count });
        } else {
            tracing::info!("checkout complete");
        }
    }
}

fn not_found(id: &ItemId) -> ActionError {
    tracing::warn!(%id, "no such item");
    ActionError::NotFound(id.clone())
}
