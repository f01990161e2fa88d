// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use cart_core::{Action, CartItem, CartView, InventoryItem, ItemId, Notice};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::{Document, Element};

use crate::dom::Surface;

/// Renders into the page by replacing the contents of the list containers.
#[derive(Debug)]
pub(crate) struct DomView {
    document: Document,
    surface: Surface,
    notice_timeout_ms: u32,
}

impl DomView {
    pub(crate) fn new(document: Document, surface: Surface, notice_timeout_ms: u32) -> Self {
        Self {
            document,
            surface,
            notice_timeout_ms,
        }
    }

    fn element(&self, tag: &str) -> Element {
        self.document.create_element(tag).unwrap_throw()
    }

    fn append_text(&self, parent: &Element, text: &str) {
        let text = self.document.create_text_node(text);
        parent.append_child(&text).unwrap_throw();
    }

    fn append_element(&self, parent: &Element, tag: &str, text: &str) -> Element {
        let element = self.element(tag);
        element.set_text_content(Some(text));
        parent.append_child(&element).unwrap_throw();
        element
    }

    /// A control the click handlers recognize by its class and `data-id`.
    fn append_control(&self, parent: &Element, action: Action, id: &ItemId) {
        let button = self.append_element(parent, "button", action.label());
        button.set_class_name(action.class_name());
        button
            .set_attribute("data-id", &id.to_string())
            .unwrap_throw();
    }
}

impl CartView for DomView {
    fn render_inventory(&self, items: &[InventoryItem]) {
        let list = &self.surface.inventory_list;
        list.set_text_content(None);
        for item in items {
            let row = self.element("li");
            self.append_text(&row, &format!("{} - ", item.content));
            self.append_control(&row, Action::Decrement, &item.id);
            self.append_text(&row, " ");
            self.append_element(&row, "span", &item.amount.to_string());
            self.append_text(&row, " ");
            self.append_control(&row, Action::Increment, &item.id);
            self.append_text(&row, " ");
            self.append_control(&row, Action::AddToCart, &item.id);
            list.append_child(&row).unwrap_throw();
        }
    }

    fn render_cart(&self, items: &[CartItem]) {
        let list = &self.surface.cart_list;
        list.set_text_content(None);
        for item in items {
            let row = self.element("li");
            self.append_text(&row, &format!("{} x {} ", item.content, item.amount));
            self.append_control(&row, Action::DeleteFromCart, &item.id);
            list.append_child(&row).unwrap_throw();
        }
    }

    fn notify(&self, notice: &Notice) {
        let message = self.append_element(&self.surface.notices, "div", &notice.to_string());
        message.set_class_name("notice");
        message.set_attribute("role", "alert").unwrap_throw();

        let timeout_ms = self.notice_timeout_ms;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            message.remove();
        });
    }
}
