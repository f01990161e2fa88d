// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashSet;

use crate::ItemId;

/// Ids with a cart request in flight.
#[derive(Clone, Debug, Default)]
pub(crate) struct Pending {
    ids: Rc<RefCell<HashSet<ItemId>>>,
}

impl Pending {
    /// Marks `id` as busy until the returned token is dropped.
    ///
    /// Returns `None` if `id` is already busy.
    pub(crate) fn acquire(&self, id: &ItemId) -> Option<PendingToken> {
        if !self.ids.borrow_mut().insert(id.clone()) {
            return None;
        }
        Some(PendingToken {
            ids: Rc::clone(&self.ids),
            id: id.clone(),
        })
    }

    pub(crate) fn contains(&self, id: &ItemId) -> bool {
        self.ids.borrow().contains(id)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ids.borrow().is_empty()
    }
}

#[derive(Debug)]
pub(crate) struct PendingToken {
    ids: Rc<RefCell<HashSet<ItemId>>>,
    id: ItemId,
}

impl Drop for PendingToken {
    fn drop(&mut self) {
        self.ids.borrow_mut().remove(&self.id);
    }
}
