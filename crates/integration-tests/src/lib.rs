//! Integration tests for Delish.
//!
//! The tests drive the storefront router in-process with
//! `tower::ServiceExt::oneshot` over a shared in-memory storage backend, so
//! they exercise the full handler → store → backend path without a network
//! or a running server.
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart mutations through the HTTP surface
//! - `signin_flow` - Mock sign-in and guest flows

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use delish_storefront::config::StorefrontConfig;
use delish_storefront::state::AppState;
use delish_storefront::storage::{KeyValueStore, MemoryStore, SharedStorage};

/// A storefront router plus a handle on the storage backend behind it.
pub struct TestContext {
    router: Router,
    storage: SharedStorage,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Build a fresh storefront over an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        let storage: SharedStorage = Arc::new(MemoryStore::new());
        let config = StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            // Unused: the state is built over the in-memory backend.
            data_file: PathBuf::from("unused.json"),
        };
        let state = AppState::with_storage(config, Arc::clone(&storage));
        Self {
            router: delish_storefront::app(state),
            storage,
        }
    }

    /// Issue a GET request.
    pub async fn get(&self, path: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Issue a POST request with a form-encoded body.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let body = fields
            .iter()
            .map(|(key, value)| format!("{}={}", urlencode(key), urlencode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Read a raw persisted blob straight from the backend.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.storage.get(key).expect("memory store never fails")
    }

    /// Write a raw blob straight to the backend (e.g., to plant corruption).
    pub fn set_raw(&self, key: &str, value: &str) {
        self.storage
            .set(key, value)
            .expect("memory store never fails");
    }

    /// Collect a response body into a string.
    pub async fn body_string(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
    }
}

/// Percent-encode a form value.
fn urlencode(value: &str) -> String {
    value
        .bytes()
        .map(|byte| match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                char::from(byte).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{byte:02X}"),
        })
        .collect()
}
