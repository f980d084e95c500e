//! HTTP-level integration tests for the gift endpoints, covering the
//! filter/sort contract of the listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

fn gift_body(name: &str, min: f64, max: f64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": "something nice",
        "price": { "min": min, "max": max },
        "image": "https://example.com/img.png",
        "code": name,
        "links": [{ "name_link": "Store", "url": "https://example.com" }]
    })
}

async fn create_gift(pool: &PgPool, name: &str, min: f64, max: f64) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/gifts",
        gift_body(name, min, max),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn list_names(pool: &PgPool, uri: &str) -> Vec<String> {
    let response = get(common::build_test_app(pool.clone()), uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_gift_returns_201_with_message(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/gifts", gift_body("Stroller", 10.0, 20.0)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Gift added successfully!");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_gift_accepts_an_empty_body(pool: PgPool) {
    // Gift creation is deliberately permissive: no field is required.
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/gifts", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let gifts = body_json(get(common::build_test_app(pool), "/api/gifts").await).await;
    assert_eq!(gifts[0]["price"], serde_json::json!({ "min": 0.0, "max": 0.0 }));
    assert_eq!(gifts[0]["enabled"], false);
    assert_eq!(gifts[0]["links"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listed_gift_carries_nested_price_and_links(pool: PgPool) {
    create_gift(&pool, "Stroller", 10.0, 20.0).await;

    let gifts = body_json(get(common::build_test_app(pool), "/api/gifts").await).await;
    let gift = &gifts[0];
    assert_eq!(gift["price"]["min"], 10.0);
    assert_eq!(gift["price"]["max"], 20.0);
    assert_eq!(gift["links"][0]["name_link"], "Store");
    assert_eq!(gift["enabled"], false);
}

// ---------------------------------------------------------------------------
// Listing: sort
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn sort_asc_orders_by_price_min(pool: PgPool) {
    // [{min:10,max:20}, {min:5,max:8}] sorted ascending by price.min.
    create_gift(&pool, "big", 10.0, 20.0).await;
    create_gift(&pool, "small", 5.0, 8.0).await;

    let names = list_names(&pool, "/api/gifts?sort=asc").await;
    assert_eq!(names, vec!["small", "big"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sort_desc_orders_by_price_min_descending(pool: PgPool) {
    create_gift(&pool, "small", 5.0, 8.0).await;
    create_gift(&pool, "mid", 7.0, 9.0).await;
    create_gift(&pool, "big", 10.0, 20.0).await;

    let names = list_names(&pool, "/api/gifts?sort=desc").await;
    assert_eq!(names, vec!["big", "mid", "small"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_sort_directive_preserves_insertion_order(pool: PgPool) {
    create_gift(&pool, "big", 10.0, 20.0).await;
    create_gift(&pool, "small", 5.0, 8.0).await;

    assert_eq!(list_names(&pool, "/api/gifts?sort=price").await, vec!["big", "small"]);
    assert_eq!(list_names(&pool, "/api/gifts").await, vec!["big", "small"]);
}

// ---------------------------------------------------------------------------
// Listing: price filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn price_filter_keeps_ranges_inside_the_bounds(pool: PgPool) {
    create_gift(&pool, "inside", 15.0, 40.0).await;
    create_gift(&pool, "below", 5.0, 30.0).await;
    create_gift(&pool, "above", 20.0, 60.0).await;
    create_gift(&pool, "exact", 10.0, 50.0).await;

    // Containment on the gift's own range: "below" and "above" overlap the
    // bounds but stick out, so they are dropped.
    let names = list_names(&pool, "/api/gifts?minPrice=10&maxPrice=50").await;
    assert_eq!(names, vec!["inside", "exact"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_price_bound_applies_no_filter(pool: PgPool) {
    create_gift(&pool, "cheap", 5.0, 8.0).await;
    create_gift(&pool, "pricey", 100.0, 200.0).await;

    // Only one bound given: the listing is unfiltered, not open-ended.
    let names = list_names(&pool, "/api/gifts?minPrice=50").await;
    assert_eq!(names, vec!["cheap", "pricey"]);

    let names = list_names(&pool, "/api/gifts?maxPrice=50").await;
    assert_eq!(names, vec!["cheap", "pricey"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unparsable_price_bound_counts_as_absent(pool: PgPool) {
    create_gift(&pool, "cheap", 5.0, 8.0).await;
    create_gift(&pool, "pricey", 100.0, 200.0).await;

    let names = list_names(&pool, "/api/gifts?minPrice=abc&maxPrice=50").await;
    assert_eq!(names, vec!["cheap", "pricey"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filter_and_sort_compose(pool: PgPool) {
    create_gift(&pool, "b", 20.0, 30.0).await;
    create_gift(&pool, "a", 12.0, 18.0).await;
    create_gift(&pool, "out", 5.0, 80.0).await;

    let names = list_names(&pool, "/api/gifts?minPrice=10&maxPrice=50&sort=asc").await;
    assert_eq!(names, vec!["a", "b"]);
}

// ---------------------------------------------------------------------------
// Enabled-flag update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn put_enabled_updates_and_returns_the_gift(pool: PgPool) {
    create_gift(&pool, "Stroller", 10.0, 20.0).await;
    let gifts = body_json(get(common::build_test_app(pool.clone()), "/api/gifts").await).await;
    let id = gifts[0]["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/gifts/{id}"),
        serde_json::json!({ "enabled": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Gift confirmed and locked");
    assert_eq!(json["gift"]["id"], id);
    assert_eq!(json["gift"]["enabled"], true);

    // The flag sticks.
    let gifts = body_json(get(common::build_test_app(pool), "/api/gifts").await).await;
    assert_eq!(gifts[0]["enabled"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_enabled_for_unknown_id_returns_404(pool: PgPool) {
    create_gift(&pool, "Stroller", 10.0, 20.0).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/gifts/999999",
        serde_json::json!({ "enabled": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("not found"));

    // No record was altered.
    let gifts = body_json(get(common::build_test_app(pool), "/api/gifts").await).await;
    assert_eq!(gifts[0]["enabled"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_enabled_with_non_numeric_id_is_a_client_error(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/gifts/not-a-number",
        serde_json::json!({ "enabled": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
