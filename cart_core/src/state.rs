// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::{CartItem, InventoryItem, ItemId};

/// Which list was replaced, with its new contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change<'a> {
    /// The inventory was replaced.
    Inventory(&'a [InventoryItem]),
    /// The cart was replaced.
    Cart(&'a [CartItem]),
}

type Subscriber = Box<dyn FnMut(Change<'_>)>;

/// Holds the inventory and the cart.
///
/// Replacing either list with [`set_inventory`](Self::set_inventory) or
/// [`set_cart`](Self::set_cart) synchronously notifies the subscriber. Edits through the
/// `_mut` accessors don't; whoever makes them is responsible for re-rendering.
#[derive(Default)]
pub struct State {
    inventory: Vec<InventoryItem>,
    cart: Vec<CartItem>,
    on_change: Option<Subscriber>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("inventory", &self.inventory)
            .field("cart", &self.cart)
            .field("subscribed", &self.on_change.is_some())
            .finish()
    }
}

impl State {
    /// Empty lists and no subscriber.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the change subscriber, replacing any previous one.
    pub fn subscribe(&mut self, on_change: impl FnMut(Change<'_>) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// The inventory, in server order.
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// The cart entries, in insertion order.
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// In-place access to the cart, without notification.
    pub fn cart_mut(&mut self) -> &mut Vec<CartItem> {
        &mut self.cart
    }

    /// Replaces the inventory and notifies the subscriber.
    pub fn set_inventory(&mut self, inventory: Vec<InventoryItem>) {
        self.inventory = inventory;
        if let Some(on_change) = &mut self.on_change {
            on_change(Change::Inventory(&self.inventory));
        }
    }

    /// Replaces the cart and notifies the subscriber.
    pub fn set_cart(&mut self, cart: Vec<CartItem>) {
        self.cart = cart;
        if let Some(on_change) = &mut self.on_change {
            on_change(Change::Cart(&self.cart));
        }
    }

    /// The inventory item with this id.
    pub fn inventory_item(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.id == *id)
    }

    /// In-place access to an inventory item, without notification.
    pub fn inventory_item_mut(&mut self, id: &ItemId) -> Option<&mut InventoryItem> {
        self.inventory.iter_mut().find(|item| item.id == *id)
    }

    /// The cart entry for this id.
    pub fn cart_item(&self, id: &ItemId) -> Option<&CartItem> {
        self.cart.iter().find(|item| item.id == *id)
    }

    /// In-place access to a cart entry, without notification.
    pub fn cart_item_mut(&mut self, id: &ItemId) -> Option<&mut CartItem> {
        self.cart.iter_mut().find(|item| item.id == *id)
    }

    /// Index of the cart entry for this id.
    pub fn cart_position(&self, id: &ItemId) -> Option<usize> {
        self.cart.iter().position(|item| item.id == *id)
    }
}
