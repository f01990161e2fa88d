// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The wire types shared with the cart API.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of an item, as assigned by the server.
///
/// Servers are free to use JSON numbers or strings for ids, so both are accepted and
/// written back in the form they were received in. Two ids are equal when their
/// textual forms are equal, i.e. `1` and `"1"` name the same item.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// A numeric id, e.g. `{"id": 3}`.
    Number(u64),
    /// A textual id, e.g. `{"id": "3"}` or `{"id": "a1f"}`.
    Text(String),
}

impl ItemId {
    /// Parses an id from its textual form, such as the value of a `data-id` attribute.
    ///
    /// Only the canonical decimal form of a `u64` becomes [`ItemId::Number`]; anything else,
    /// including `"0123"` and `"+5"`, stays [`ItemId::Text`] so that its text survives.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(number) if number.to_string() == raw => Self::Number(number),
            _ => Self::Text(raw.to_owned()),
        }
    }
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(n), Self::Text(s)) | (Self::Text(s), Self::Number(n)) => {
                *s == n.to_string()
            }
        }
    }
}

impl Eq for ItemId {}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `PartialEq`, which compares the textual forms.
        match self {
            Self::Number(n) => n.to_string().as_str().hash(state),
            Self::Text(s) => s.as_str().hash(state),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Stock that can be moved into the cart.
///
/// `amount` is the pending quantity the user picked, not yet committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Server-assigned id.
    pub id: ItemId,
    /// Display name.
    pub content: String,
    /// Units picked but not yet added to the cart.
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: u32,
}

impl InventoryItem {
    /// Creates an item with a zero amount.
    pub fn new(id: impl Into<ItemId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            amount: 0,
        }
    }

    /// Sets the pending amount.
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }
}

/// A quantity of an item committed toward checkout, persisted server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Id of the inventory item this entry holds.
    pub id: ItemId,
    /// Display name, copied from the inventory item.
    pub content: String,
    /// Units in the cart.
    pub amount: u32,
}

impl CartItem {
    /// Creates an entry.
    pub fn new(id: impl Into<ItemId>, content: impl Into<String>, amount: u32) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            amount,
        }
    }

    /// A cart entry for `amount` units of the given inventory item.
    pub fn from_inventory(item: &InventoryItem, amount: u32) -> Self {
        Self {
            id: item.id.clone(),
            content: item.content.clone(),
            amount,
        }
    }
}

/// Body of the partial update sent when a cart entry's quantity changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AmountPatch {
    /// The entry's new total amount.
    pub amount: u32,
}

// `null` and a missing field both mean "nothing picked yet".
fn amount_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}
