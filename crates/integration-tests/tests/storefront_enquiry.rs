//! Integration tests for checkout and the enquiry form.

use axum::http::StatusCode;
use vino_crackers_core::EMPTY_CART_NOTICE as EMPTY_CART;
use vino_crackers_integration_tests::TestShop;

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
async fn test_checkout_with_empty_cart_shows_notice_once() {
    let mut shop = TestShop::new();

    let resp = shop.post_form("/checkout", "").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let page = shop.get("/").await;
    assert!(page.body.contains(EMPTY_CART));
    assert!(!page.body.contains("id=\"enquiry\""));

    let page = shop.get("/").await;
    assert!(!page.body.contains(EMPTY_CART));
}

#[tokio::test]
async fn test_checkout_opens_form_with_total() {
    let mut shop = TestShop::new();
    for _ in 0..3 {
        shop.adjust(3, 1).await;
    }

    let resp = shop.post_form("/checkout", "").await;
    assert_eq!(resp.location(), Some("/#enquiry"));

    let page = shop.get("/").await;
    assert!(page.body.contains("id=\"enquiry\""));
    assert!(page.body.contains("Order total: <strong>₹135</strong>"));
}

#[tokio::test]
async fn test_close_dismisses_form() {
    let mut shop = TestShop::new();
    shop.adjust(1, 1).await;
    shop.post_form("/checkout", "").await;

    let resp = shop.post_form("/enquiry/close", "").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let page = shop.get("/").await;
    assert!(!page.body.contains("id=\"enquiry\""));
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn test_submit_acknowledges_queues_and_clears_cart() {
    let mut shop = TestShop::new();
    for _ in 0..3 {
        shop.adjust(3, 1).await;
    }
    shop.post_form("/checkout", "").await;

    let resp = shop
        .post_form("/enquiry", "name=Arun&phone=9840012345&message=Evening+delivery")
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let page = shop.get("/").await;
    assert!(page.body.contains(
        "Thank you Arun! Your enquiry has been sent. We will contact you at 9840012345 shortly."
    ));
    assert!(!page.body.contains("id=\"enquiry\""));

    let summary = shop.get("/cart/summary").await.json();
    assert_eq!(summary["item_count"], 0);
    assert_eq!(summary["total"], 0);

    let mut worker = shop.worker.take().unwrap();
    let enquiry = worker.recv().await.unwrap();
    assert_eq!(enquiry.customer.name(), "Arun");
    assert_eq!(enquiry.customer.message(), "Evening delivery");
    assert_eq!(enquiry.item_count, 3);
    assert_eq!(enquiry.total.amount, 135);
    assert_eq!(enquiry.lines.len(), 1);
}

#[tokio::test]
async fn test_submit_with_blank_phone_keeps_form_and_cart() {
    let mut shop = TestShop::new();
    shop.adjust(4, 2).await;
    shop.post_form("/checkout", "").await;

    let resp = shop.post_form("/enquiry", "name=Arun&phone=+++").await;
    assert_eq!(resp.location(), Some("/#enquiry"));

    let page = shop.get("/").await;
    assert!(page.body.contains("phone number is required"));
    assert!(page.body.contains("id=\"enquiry\""));

    let summary = shop.get("/cart/summary").await.json();
    assert_eq!(summary["total"], 360);
}

#[tokio::test]
async fn test_submit_without_open_form_changes_nothing() {
    let mut shop = TestShop::new();
    shop.adjust(5, 1).await;

    let resp = shop.post_form("/enquiry", "name=Arun&phone=9840012345").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let summary = shop.get("/cart/summary").await.json();
    assert_eq!(summary["item_count"], 1);
}

#[tokio::test]
async fn test_submit_after_emptying_cart_shows_notice() {
    let mut shop = TestShop::new();
    shop.adjust(5, 1).await;
    shop.post_form("/checkout", "").await;
    shop.adjust(5, -1).await;

    shop.post_form("/enquiry", "name=Arun&phone=9840012345").await;

    let page = shop.get("/").await;
    assert!(page.body.contains(EMPTY_CART));
    assert!(!page.body.contains("id=\"enquiry\""));
}

#[tokio::test]
async fn test_submit_with_delivery_down_keeps_cart() {
    let mut shop = TestShop::new();
    shop.adjust(6, 1).await;
    shop.post_form("/checkout", "").await;
    shop.stop_delivery();

    let resp = shop.post_form("/enquiry", "name=Arun&phone=9840012345").await;
    assert_eq!(resp.status, StatusCode::SERVICE_UNAVAILABLE);

    let summary = shop.get("/cart/summary").await.json();
    assert_eq!(summary["total"], 4500);
    let page = shop.get("/").await;
    assert!(page.body.contains("id=\"enquiry\""));
}
