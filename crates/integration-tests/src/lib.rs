//! Integration tests for Vino Crackers.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vino-crackers-integration-tests
//! ```
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`;
//! no server or network is needed. [`TestShop`] plays the part of a browser:
//! it keeps the session cookie between requests.

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use tower::ServiceExt;

use vino_crackers_core::Catalog;
use vino_crackers_storefront::config::StorefrontConfig;
use vino_crackers_storefront::services::delivery::{self, DeliveryWorker};
use vino_crackers_storefront::state::AppState;

/// Largest response body read by the harness.
const BODY_LIMIT: usize = 1024 * 1024;

/// A response with its body read to a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("response is not JSON ({e}): {}", self.body))
    }
}

/// One shopper's browser against a fresh storefront.
pub struct TestShop {
    router: Router,
    cookie: Option<String>,
    /// Receiving end of the enquiry queue; nothing drains it unless a test does.
    pub worker: Option<DeliveryWorker>,
}

impl TestShop {
    /// A storefront with the built-in catalog and log-only enquiries.
    #[must_use]
    pub fn new() -> Self {
        let (notifier, worker) = delivery::channel(None);
        let state =
            AppState::with_catalog(StorefrontConfig::default(), Catalog::fireworks(), notifier);

        Self {
            router: vino_crackers_storefront::app(state),
            cookie: None,
            worker: Some(worker),
        }
    }

    /// Another browser against the same storefront, starting with no cookie.
    ///
    /// The enquiry queue stays with `self`.
    #[must_use]
    pub fn another_browser(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
            worker: None,
        }
    }

    /// Stop the delivery worker, as if it had crashed.
    pub fn stop_delivery(&mut self) {
        self.worker = None;
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::builder().method("GET").uri(uri);
        self.send(request, Body::empty()).await
    }

    /// Send a form POST with an already URL-encoded body.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(request, Body::from(form.to_owned())).await
    }

    /// Press a quantity button.
    pub async fn adjust(&mut self, product_id: i32, delta: i64) -> TestResponse {
        self.post_form("/cart/adjust", &format!("product_id={product_id}&delta={delta}"))
            .await
    }

    async fn send(&mut self, mut request: axum::http::request::Builder, body: Body) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let request = request
            .body(body)
            .unwrap_or_else(|e| panic!("invalid request: {e}"));

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|e| match e {});

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
        {
            self.cookie = set_cookie.split(';').next().map(str::to_owned);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .unwrap_or_else(|e| panic!("failed to read body: {e}"));

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}
