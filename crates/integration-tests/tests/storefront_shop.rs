//! Integration tests for browsing and the cart.
//!
//! Each test drives a fresh in-process storefront through the same requests a
//! browser would send.

use axum::http::StatusCode;
use vino_crackers_integration_tests::TestShop;

// ============================================================================
// Health and headers
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let mut shop = TestShop::new();

    let resp = shop.get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");

    let resp = shop.get("/health/ready").await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_fails_without_delivery_worker() {
    let mut shop = TestShop::new();
    shop.stop_delivery();

    let resp = shop.get("/health/ready").await;
    assert_eq!(resp.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_responses_carry_request_id_and_security_headers() {
    let mut shop = TestShop::new();
    let resp = shop.get("/").await;

    assert!(resp.headers.contains_key("x-request-id"));
    assert_eq!(resp.headers.get("x-frame-options").unwrap(), "DENY");
    assert!(resp.headers.contains_key("content-security-policy"));
}

#[tokio::test]
async fn test_stylesheet_served() {
    let mut shop = TestShop::new();
    let resp = shop.get("/assets/shop.css").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(
        resp.headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );
}

// ============================================================================
// Catalog filtering
// ============================================================================

#[tokio::test]
async fn test_shop_lists_every_product_by_default() {
    let mut shop = TestShop::new();
    let resp = shop.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    for name in [
        "240 Shots Multi Color",
        "Flower Pots (Big)",
        "10cm Sparklers (Red)",
        "Ground Chakkar (Deluxe)",
        "Rocket Bomb (Packet)",
        "Family Gift Box (Mega)",
        "Standard Sparklers",
    ] {
        assert!(resp.body.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn test_category_filter_is_remembered() {
    let mut shop = TestShop::new();

    let resp = shop.get("/?category=gift-boxes").await;
    assert!(resp.body.contains("240 Shots Multi Color"));
    assert!(resp.body.contains("Family Gift Box (Mega)"));
    assert!(!resp.body.contains("Rocket Bomb (Packet)"));

    // Adjusting a quantity re-renders the same filter.
    let resp = shop.adjust(6, 1).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    let resp = shop.get("/").await;
    assert!(resp.body.contains("Family Gift Box (Mega)"));
    assert!(!resp.body.contains("Standard Sparklers"));

    let resp = shop.get("/?category=all").await;
    assert!(resp.body.contains("Standard Sparklers"));
}

#[tokio::test]
async fn test_unknown_category_shows_everything() {
    let mut shop = TestShop::new();
    let resp = shop.get("/?category=sky-lanterns").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Rocket Bomb (Packet)"));
    assert!(resp.body.contains("Flower Pots (Big)"));
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
async fn test_adjust_redirects_and_persists() {
    let mut shop = TestShop::new();

    for _ in 0..3 {
        let resp = shop.adjust(3, 1).await;
        assert_eq!(resp.status, StatusCode::SEE_OTHER);
        assert_eq!(resp.location(), Some("/#products"));
    }

    let summary = shop.get("/cart/summary").await.json();
    assert_eq!(summary["item_count"], 3);
    assert_eq!(summary["total"], 135);
    assert_eq!(summary["total_display"], "₹135");
}

#[tokio::test]
async fn test_cart_totals_span_products() {
    let mut shop = TestShop::new();
    shop.adjust(1, 1).await;
    shop.adjust(7, 2).await;

    let summary = shop.get("/cart/summary").await.json();
    assert_eq!(summary["item_count"], 3);
    assert_eq!(summary["total"], 1260);
}

#[tokio::test]
async fn test_decrement_never_goes_below_zero() {
    let mut shop = TestShop::new();
    shop.adjust(2, 1).await;
    shop.adjust(2, -1).await;
    shop.adjust(2, -1).await;

    let summary = shop.get("/cart/summary").await.json();
    assert_eq!(summary["item_count"], 0);
    assert_eq!(summary["total"], 0);
}

#[tokio::test]
async fn test_adjust_unknown_product_is_rejected() {
    let mut shop = TestShop::new();
    let resp = shop.adjust(99, 1).await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    let summary = shop.get("/cart/summary").await.json();
    assert_eq!(summary["item_count"], 0);
}

#[tokio::test]
async fn test_carts_are_per_shopper() {
    let mut first = TestShop::new();
    first.adjust(5, 2).await;

    // A second browser against the same server has its own cart.
    let mut second = first.another_browser();
    let summary = second.get("/cart/summary").await.json();
    assert_eq!(summary["item_count"], 0);

    second.adjust(1, 1).await;
    let summary = second.get("/cart/summary").await.json();
    assert_eq!(summary["item_count"], 1);

    let summary = first.get("/cart/summary").await.json();
    assert_eq!(summary["item_count"], 2);
    assert_eq!(summary["total"], 600);
}
