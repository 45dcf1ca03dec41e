//! Integration tests for `HttpProductApi`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use turbo_commerce::{Money, ProductId};
use turbo_data::{FetchClient, FetchError, HttpProductApi, ProductApi};

fn api_for(server: &MockServer) -> HttpProductApi {
    let client = FetchClient::builder(server.uri())
        .build()
        .expect("failed to build test FetchClient");
    HttpProductApi::new(client)
}

fn listing() -> serde_json::Value {
    json!({
        "products": [
            {"id": 1, "title": "Laptop Stand", "price": 25.99, "category": "laptops", "rating": 4.5},
            {"id": 2, "title": "Mouse", "price": 15.0, "category": "accessories", "rating": 3.9},
            {"id": 3, "title": "Gaming Laptop", "price": 1299.0, "category": "laptops", "rating": 4.8}
        ],
        "total": 3,
        "skip": 0,
        "limit": 30
    })
}

#[tokio::test]
async fn fetch_products_parses_listing_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
        .expect(1)
        .mount(&server)
        .await;

    let products = api_for(&server).fetch_products().await.unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].id, ProductId::new(1));
    assert_eq!(products[0].price, Money::new(2599));
}

#[tokio::test]
async fn fetch_categories_derives_unique_set_from_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
        .mount(&server)
        .await;

    let categories = api_for(&server).fetch_categories().await.unwrap();

    assert_eq!(categories, vec!["laptops", "accessories"]);
}

#[tokio::test]
async fn fetch_product_returns_bare_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 2, "title": "Mouse", "price": 15.0})),
        )
        .mount(&server)
        .await;

    let product = api_for(&server)
        .fetch_product(ProductId::new(2))
        .await
        .unwrap();

    assert_eq!(product.title, "Mouse");
}

#[tokio::test]
async fn search_sends_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/search"))
        .and(query_param("q", "laptop stand"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{"id": 1, "title": "Laptop Stand"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let products = api_for(&server).search_products("laptop stand").await.unwrap();

    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn category_listing_and_limit_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/category/laptops"))
        .and(query_param("limit", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{"id": 3, "title": "Gaming Laptop", "category": "laptops"}]
        })))
        .mount(&server)
        .await;

    let products = api_for(&server)
        .with_listing_limit(0)
        .fetch_products_by_category("laptops")
        .await
        .unwrap();

    assert_eq!(products[0].id, ProductId::new(3));
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Product with id '999' not found"
        })))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .fetch_product(ProductId::new(999))
        .await
        .unwrap_err();

    match err {
        FetchError::HttpError { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/products/999"));
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_products().await.unwrap_err();

    assert!(matches!(err, FetchError::ParseError(_)));
}
