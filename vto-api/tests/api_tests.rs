//! Integration tests for vto-api endpoints
//!
//! Every test builds the full router over fixture stores and drives it with
//! `oneshot`, so no socket is opened.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method
use vto_api::store::{Catalog, InMemoryAvatarStore};
use vto_api::{build_router, AppState};
use vto_common::{Avatar, ClothingCategory, ClothingItem, Measurements, Size};

fn item(id: &str, name: &str, category: ClothingCategory) -> ClothingItem {
    ClothingItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: format!("{} in organic cotton", name),
        price: 49.0,
        sizes: Size::ALL.to_vec(),
        colors: vec!["navy".to_string(), "sand".to_string()],
        mesh_url: format!("/models/{}.glb", id),
        texture_url: format!("/textures/{}.jpg", id),
        thumbnail_url: format!("/thumbs/{}.jpg", id),
        brand_name: "Harbor".to_string(),
        affiliate_link: format!("https://shop.example/{}", id),
    }
}

fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        item("top-1", "Oxford Shirt", ClothingCategory::Tops),
        item("dress-1", "Wrap Dress", ClothingCategory::Dresses),
        item("coat-1", "Wool Coat", ClothingCategory::Outerwear),
    ])
}

/// Test helper: app over the fixture catalog and the given avatars
fn setup_app(avatars: Vec<Avatar>) -> axum::Router {
    let store = InMemoryAvatarStore::with_avatars(avatars);
    let state = AppState::new(Arc::new(store), fixture_catalog());
    build_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(vec![]);
    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["module"], "vto-api");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_banner() {
    let app = setup_app(vec![]);
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "Virtual Tryon API");
}

// =============================================================================
// Size recommendations
// =============================================================================

#[tokio::test]
async fn test_size_recommendations_wire_format() {
    let avatar = Avatar::new(
        "/m.glb",
        "/t.jpg",
        Some(Measurements {
            bust: Some(115.0),
            waist: Some(80.0),
            hips: Some(85.0),
            inseam: Some(70.0),
            shoulder_width: Some(36.0),
            ..Measurements::default()
        }),
    );
    let uri = format!("/api/size/recommendations/{}", avatar.id);
    let app = setup_app(vec![avatar]);

    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let recs = body.as_array().expect("array of recommendations");
    assert_eq!(recs.len(), 4);

    let categories: Vec<_> = recs.iter().map(|r| r["category"].as_str().unwrap()).collect();
    assert_eq!(categories, vec!["tops", "bottoms", "dresses", "outerwear"]);

    assert_eq!(recs[0]["recommendedSize"], "XXXL");
    assert_eq!(recs[1]["recommendedSize"], "M");
    assert!((recs[1]["confidence"].as_f64().unwrap() - 0.95).abs() < 1e-9);
    // (115 + 80 + 85) / 3 = 93.3 -> L
    assert_eq!(recs[2]["recommendedSize"], "L");
    assert_eq!(recs[3]["recommendedSize"], "XXXL");
    assert!((recs[3]["confidence"].as_f64().unwrap() - 0.6525).abs() < 1e-9);
}

#[tokio::test]
async fn test_size_recommendations_empty_measurements_use_defaults() {
    let avatar = Avatar::new("/m.glb", "/t.jpg", Some(Measurements::default()));
    let uri = format!("/api/size/recommendations/{}", avatar.id);
    let app = setup_app(vec![avatar]);

    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(
        body,
        json!([
            {"category": "tops", "recommendedSize": "M", "confidence": 0.6},
            {"category": "bottoms", "recommendedSize": "M", "confidence": 0.6},
            {"category": "dresses", "recommendedSize": "M", "confidence": 0.6},
            {"category": "outerwear", "recommendedSize": "M", "confidence": 0.6},
        ])
    );
}

#[tokio::test]
async fn test_size_recommendations_unknown_avatar() {
    let app = setup_app(vec![]);
    let response = app
        .oneshot(get("/api/size/recommendations/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_size_recommendations_without_measurements() {
    let avatar = Avatar::new("/m.glb", "/t.jpg", None);
    let uri = format!("/api/size/recommendations/{}", avatar.id);
    let app = setup_app(vec![avatar]);

    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "NO_MEASUREMENTS");
}

// =============================================================================
// Avatars
// =============================================================================

#[tokio::test]
async fn test_register_then_recommend() {
    let app = setup_app(vec![]);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/avatar",
            json!({
                "mesh_url": "https://models.example/u1.glb",
                "texture_url": "https://models.example/u1.jpg",
                "measurements": {"bust": 90.0, "shoulder_width": 0.0, "height": 168.0}
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let avatar = extract_json(response.into_body()).await;
    let id = avatar["id"].as_str().unwrap().to_string();
    assert_eq!(avatar["measurements"], json!({"height": 168.0, "bust": 90.0}));

    let response = app.clone().oneshot(get(&format!("/api/avatar/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_json(response.into_body()).await["id"], id.as_str());

    let response = app
        .oneshot(get(&format!("/api/size/recommendations/{}", id)))
        .await
        .unwrap();
    let recs = extract_json(response.into_body()).await;
    // bust 90 -> M; dresses delegate to tops; outerwear escalates to L
    assert_eq!(recs[0]["recommendedSize"], "M");
    assert_eq!(recs[2]["recommendedSize"], "M");
    assert_eq!(recs[3]["recommendedSize"], "L");
    assert!((recs[3]["confidence"].as_f64().unwrap() - 0.72).abs() < 1e-9);
}

#[tokio::test]
async fn test_register_without_measurements_gets_defaults() {
    let app = setup_app(vec![]);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/avatar",
            json!({"mesh_url": "/a.glb", "texture_url": "/a.jpg"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let avatar = extract_json(response.into_body()).await;
    let id = avatar["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(get(&format!("/api/size/recommendations/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let recs = extract_json(response.into_body()).await;
    for rec in recs.as_array().unwrap() {
        assert_eq!(rec["recommendedSize"], "M");
        assert_eq!(rec["confidence"], 0.6);
    }
    assert_eq!(recs.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_register_rejects_negative_measurement() {
    let app = setup_app(vec![]);
    let response = app
        .oneshot(post_json(
            "/api/avatar",
            json!({
                "mesh_url": "/a.glb",
                "texture_url": "/a.jpg",
                "measurements": {"waist": -70.0}
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_get_unknown_avatar() {
    let app = setup_app(vec![]);
    let response = app.oneshot(get("/api/avatar/unknown")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_all_clothing() {
    let app = setup_app(vec![]);
    let response = app.oneshot(get("/api/clothing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["brandName"], "Harbor");
}

#[tokio::test]
async fn test_clothing_by_category() {
    let app = setup_app(vec![]);
    let response = app
        .clone()
        .oneshot(get("/api/clothing/category/outerwear"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "coat-1");

    // valid category with no items
    let response = app.oneshot(get("/api/clothing/category/scarves")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_json(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_clothing_by_invalid_category() {
    let app = setup_app(vec![]);
    let response = app.oneshot(get("/api/clothing/category/spacesuits")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_clothing_item_lookup() {
    let app = setup_app(vec![]);
    let response = app.clone().oneshot(get("/api/clothing/dress-1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_json(response.into_body()).await["name"], "Wrap Dress");

    let response = app.oneshot(get("/api/clothing/missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clothing_search() {
    let app = setup_app(vec![]);
    let response = app
        .clone()
        .oneshot(get("/api/clothing/search?description=organic%20WOOL"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "coat-1");

    let response = app
        .oneshot(get("/api/clothing/search?category=tops&description=cotton"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "top-1");
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let state = AppState::with_catalog(fixture_catalog()).with_cors_origin("http://localhost:3000");
    let app = build_router(state);

    let request = Request::builder()
        .method("GET")
        .uri("/api/clothing")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}
