// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Delegated click handling.
//!
//! One listener per container decodes the clicked control from its class and `data-id`
//! attribute, so rows can be rebuilt freely without re-attaching listeners.

use cart_core::{Action, ItemId};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Element, Event};

use crate::Cart;
use crate::dom::Surface;

/// The control a click landed on, if it is one of `accepted`.
fn clicked_control(event: &Event, accepted: &[Action]) -> Option<(Action, ItemId)> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let action = Action::from_class_list(&target.class_name())?;
    if !accepted.contains(&action) {
        return None;
    }
    let Some(id) = target.get_attribute("data-id") else {
        tracing::warn!(?action, "control without a data-id");
        return None;
    };
    Some((action, ItemId::parse(&id)))
}

fn listen(target: &Element, mut handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| handler(event));
    target
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .unwrap_throw();
    // The listeners live as long as the page.
    callback.forget();
}

fn delegate(target: &Element, cart: &Cart, accepted: &'static [Action]) {
    let cart = cart.clone();
    listen(target, move |event| {
        let Some((action, id)) = clicked_control(&event, accepted) else {
            return;
        };
        if let Err(err) = cart.dispatch(action, &id) {
            tracing::debug!(?action, %id, "action rejected: {err}");
        }
    });
}

/// Routes clicks on the page's controls to `cart`.
pub(crate) fn attach(surface: &Surface, cart: &Cart) {
    delegate(&surface.inventory_list, cart, &Action::INVENTORY);
    delegate(&surface.cart_list, cart, &[Action::DeleteFromCart]);

    let cart = cart.clone();
    listen(&surface.checkout_button, move |_| {
        if let Err(err) = cart.checkout() {
            tracing::debug!("checkout rejected: {err}");
        }
    });
}
