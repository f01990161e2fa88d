// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::{ApiError, CartItem, InventoryItem};

/// Displays the lists and failure notices.
///
/// Both render methods rebuild their list from scratch, reading nothing but the given items.
pub trait CartView: 'static {
    /// One row per item: content, a decrement control, the amount, an increment control and
    /// an "add to cart" control.
    fn render_inventory(&self, items: &[InventoryItem]);

    /// One row per entry: content, amount and a delete control.
    fn render_cart(&self, items: &[CartItem]);

    /// Shows a transient message about a failed request.
    fn notify(&self, notice: &Notice);
}

/// A user-facing report of a request that failed and was rolled back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The initial inventory request failed; the inventory stays empty.
    LoadInventoryFailed(ApiError),
    /// The initial cart request failed; the cart stays empty.
    LoadCartFailed(ApiError),
    /// Storing a cart entry failed and the picked amount went back to the inventory.
    AddToCartFailed {
        /// Name of the item.
        content: String,
        /// What went wrong.
        error: ApiError,
    },
    /// Deleting a cart entry failed and the entry was put back.
    DeleteFromCartFailed {
        /// Name of the item.
        content: String,
        /// What went wrong.
        error: ApiError,
    },
    /// Checkout could not fetch the cart, so nothing was deleted.
    CheckoutFailed(ApiError),
    /// Some entries could not be removed and are still in the cart.
    CheckoutIncomplete { remaining: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadInventoryFailed(error) => write!(f, "Could not load the inventory: {error}"),
            Self::LoadCartFailed(error) => write!(f, "Could not load the cart: {error}"),
            Self::AddToCartFailed { content, error } => {
                write!(f, "Could not add {content} to the cart: {error}")
            }
            Self::DeleteFromCartFailed { content, error } => {
                write!(f, "Could not remove {content} from the cart: {error}")
            }
            Self::CheckoutFailed(error) => write!(f, "Checkout failed: {error}"),
            Self::CheckoutIncomplete { remaining: 1 } => {
                f.write_str("Checkout incomplete: 1 item is still in the cart")
            }
            Self::CheckoutIncomplete { remaining } => {
                write!(f, "Checkout incomplete: {remaining} items are still in the cart")
            }
        }
    }
}

/// The row controls, and the class names that identify them to the click handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Raise the pending amount of an inventory item.
    Increment,
    /// Lower the pending amount of an inventory item.
    Decrement,
    /// Move the pending amount into the cart.
    AddToCart,
    /// Remove a cart entry.
    DeleteFromCart,
}

impl Action {
    /// Controls of an inventory row, in display order around the amount.
    pub const INVENTORY: [Self; 3] = [Self::Decrement, Self::Increment, Self::AddToCart];

    /// The class a control carries.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::AddToCart => "add-to-cart",
            Self::DeleteFromCart => "delete-from-cart",
        }
    }

    /// The text on the control.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Increment => "+",
            Self::Decrement => "-",
            Self::AddToCart => "Add to cart",
            Self::DeleteFromCart => "Delete",
        }
    }

    /// The action whose class is exactly `class`.
    pub fn from_class_name(class: &str) -> Option<Self> {
        [
            Self::Increment,
            Self::Decrement,
            Self::AddToCart,
            Self::DeleteFromCart,
        ]
        .into_iter()
        .find(|action| action.class_name() == class)
    }

    /// The first action named by a whitespace separated class list.
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(Self::from_class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_round_trip() {
        for action in [
            Action::Increment,
            Action::Decrement,
            Action::AddToCart,
            Action::DeleteFromCart,
        ] {
            assert_eq!(Action::from_class_name(action.class_name()), Some(action));
        }
    }

    #[test]
    fn class_list_lookup_skips_unrelated_classes() {
        assert_eq!(
            Action::from_class_list("btn  add-to-cart primary"),
            Some(Action::AddToCart)
        );
        assert_eq!(Action::from_class_list("btn primary"), None);
        assert_eq!(Action::from_class_list(""), None);
    }

    #[test]
    fn notices_read_naturally() {
        let notice = Notice::AddToCartFailed {
            content: "Apple".into(),
            error: ApiError::Server {
                status: 500,
                reason: "Internal Server Error".into(),
            },
        };
        assert_eq!(
            notice.to_string(),
            "Could not add Apple to the cart: server answered 500 Internal Server Error"
        );
        assert_eq!(
            Notice::CheckoutIncomplete { remaining: 1 }.to_string(),
            "Checkout incomplete: 1 item is still in the cart"
        );
    }
}
