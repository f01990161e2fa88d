// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Access to the parts of the page the client works with.

use cart_core::Config;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::{Document, Element};

pub(crate) const INVENTORY_LIST: &str = ".inventory-container ul";
pub(crate) const CART_LIST: &str = ".cart-container ul";
pub(crate) const CHECKOUT_BUTTON: &str = ".checkout-btn";
pub(crate) const NOTICE_CONTAINER: &str = "notice-container";

/// Helper to get the HTML document
pub(crate) fn document() -> Document {
    let window = web_sys::window().expect_throw("no global `window` exists");
    window
        .document()
        .expect_throw("should have a document on window")
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn require(document: &Document, selector: &str) -> Element {
    query(document, selector).unwrap_or_else(|| {
        wasm_bindgen::throw_str(&format!("page is missing an element matching `{selector}`"))
    })
}

fn meta_content(document: &Document, name: &str) -> Option<String> {
    query(document, &format!("meta[name=\"{name}\"]"))?.get_attribute("content")
}

/// Reads overrides of the default [`Config`] from `<meta>` tags.
pub(crate) fn read_config(document: &Document) -> Config {
    let mut config = Config::default();
    if let Some(url) = meta_content(document, "cart-api-url") {
        config = config.with_api_url(&url);
    }
    if let Some(timeout) = meta_content(document, "cart-notice-timeout-ms") {
        config = config.with_notice_timeout(&timeout);
    }
    config
}

/// The elements the client renders into and listens on.
#[derive(Clone, Debug)]
pub(crate) struct Surface {
    pub(crate) inventory_list: Element,
    pub(crate) cart_list: Element,
    pub(crate) checkout_button: Element,
    pub(crate) notices: Element,
}

impl Surface {
    /// Finds the containers, creating the notice container if the page has none.
    pub(crate) fn locate(document: &Document) -> Self {
        let notices = query(document, &format!(".{NOTICE_CONTAINER}")).unwrap_or_else(|| {
            let notices = document.create_element("div").unwrap_throw();
            notices.set_class_name(NOTICE_CONTAINER);
            document
                .body()
                .expect_throw("HTML document missing body")
                .append_child(&notices)
                .unwrap_throw();
            notices
        });
        Self {
            inventory_list: require(document, INVENTORY_LIST),
            cart_list: require(document, CART_LIST),
            checkout_button: require(document, CHECKOUT_BUTTON),
            notices,
        }
    }
}
