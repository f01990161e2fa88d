// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write as _;

use crate::ItemId;

/// Where the API used when nothing else is configured lives.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// How long a notice stays on screen by default, in milliseconds.
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 3_000;

/// Runtime settings of the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the cart API, without the resource path.
    pub api_url: String,
    /// How long a failure notice is shown before it is removed.
    pub notice_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Overrides the API base URL, ignoring blank values.
    pub fn with_api_url(mut self, url: &str) -> Self {
        let url = url.trim();
        if !url.is_empty() {
            self.api_url = url.to_owned();
        }
        self
    }

    /// Overrides the notice timeout from its textual form, ignoring values that don't parse.
    pub fn with_notice_timeout(mut self, raw: &str) -> Self {
        match raw.trim().parse() {
            Ok(ms) => self.notice_timeout_ms = ms,
            Err(_) => tracing::warn!("ignoring invalid notice timeout {raw:?}"),
        }
        self
    }

    /// The resource URLs under [`api_url`](Self::api_url).
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_url)
    }
}

/// The resource URLs of the cart API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Endpoints under `base`; a trailing slash is ignored.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    /// `/inventory`
    pub fn inventory(&self) -> String {
        format!("{}/inventory", self.base)
    }

    /// `/cart`
    pub fn cart(&self) -> String {
        format!("{}/cart", self.base)
    }

    /// `/cart/:id`, with the id encoded as a single path segment.
    pub fn cart_item(&self, id: &ItemId) -> String {
        format!("{}/cart/{}", self.base, encode_segment(&id.to_string()))
    }
}

// Everything outside the RFC 3986 unreserved set is percent-encoded.
fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}
