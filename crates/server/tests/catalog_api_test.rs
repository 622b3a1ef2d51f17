// Catalog API tests against the in-memory backend
// Run with: cargo test -p east-store-server --test catalog_api_test

mod common;

use axum::http::{Method, StatusCode};
use common::*;
use east_store_core::{Artwork, ContentSetting, SizeCardTemplate};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_artwork_crud_workflow() {
    let app = test_app();

    // Step 1: Create
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/artworks",
        Some(json!({
            "title": "Morning over the river",
            "image_url": "https://images.eaststore.com/art/morning.jpg",
            "tags": ["landscape", "oil"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let artwork: Artwork = serde_json::from_value(body).expect("Failed to parse artwork");
    assert_eq!(artwork.title, "Morning over the river");
    assert!(!artwork.featured);
    assert_eq!(artwork.sort_order, 0);
    assert_eq!(artwork.tags, vec!["landscape", "oil"]);

    // Step 2: Get
    let uri = format!("/api/artworks/{}", artwork.id);
    let (status, body) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], artwork.id.to_string());

    // Step 3: Partial update keeps other fields
    let (status, body) = call(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({"featured": true, "description": "Oil on canvas"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Artwork = serde_json::from_value(body).expect("Failed to parse artwork");
    assert!(updated.featured);
    assert_eq!(updated.description.as_deref(), Some("Oil on canvas"));
    assert_eq!(updated.title, artwork.title);
    assert!(updated.updated_at >= artwork.updated_at);

    // Step 4: Delete, then it is gone
    let (status, _) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Artwork not found"}));

    let (status, _) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_artwork_listing_order_and_filter() {
    let app = test_app();

    for (title, featured, sort_order) in [("b", true, 2), ("a", false, 1), ("c", true, 0)] {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/artworks",
            Some(json!({
                "title": title,
                "image_url": format!("https://images.eaststore.com/{}.jpg", title),
                "featured": featured,
                "sort_order": sort_order
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = call(&app, Method::GET, "/api/artworks", None).await;
    assert_eq!(status, StatusCode::OK);
    let all: Vec<Artwork> = serde_json::from_value(body["data"].clone()).unwrap();
    let titles: Vec<_> = all.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);

    let (_, body) = call(&app, Method::GET, "/api/artworks?featured=true", None).await;
    let featured: Vec<Artwork> = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(featured.len(), 2);
    assert!(featured.iter().all(|a| a.featured));

    // Overview counts reflect the catalog
    let cookie = session_cookie(SESSION_TOKEN);
    let response = send(&app, Method::GET, "/admin", Some(&cookie), None).await;
    let overview = json_body(response).await;
    assert_eq!(overview["artworks"], 3);
    assert_eq!(overview["featured_artworks"], 2);
}

#[tokio::test]
async fn test_artwork_validation() {
    let app = test_app();

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/artworks",
        Some(json!({"title": "", "image_url": "https://x/y.jpg"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "title is required"}));

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/artworks",
        Some(json!({"title": "x".repeat(513), "image_url": "https://x/y.jpg"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Input exceeds allowed limits"}));

    let (status, _) = call(
        &app,
        Method::PATCH,
        &format!("/api/artworks/{}", Uuid::now_v7()),
        Some(json!({"title": "New"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_settings_upsert_and_delete() {
    let app = test_app();

    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/settings/home.title",
        Some(json!({"value": "East"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["key"], "home.title");

    // Second PUT replaces the value
    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/settings/home.title",
        Some(json!({"value": "East Store"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "East Store");

    call(
        &app,
        Method::PUT,
        "/api/settings/contact.email",
        Some(json!({"value": "hello@eaststore.com"})),
    )
    .await;

    let (_, body) = call(&app, Method::GET, "/api/settings", None).await;
    let settings: Vec<ContentSetting> = serde_json::from_value(body["data"].clone()).unwrap();
    let keys: Vec<_> = settings.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["contact.email", "home.title"]);

    let (status, body) = call(&app, Method::GET, "/api/settings/home.title", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "East Store");

    let (status, _) = call(&app, Method::DELETE, "/api/settings/home.title", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(&app, Method::GET, "/api/settings/home.title", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Setting not found"}));

    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("/api/settings/{}", "k".repeat(129)),
        Some(json!({"value": "v"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_size_card_workflow() {
    let app = test_app();

    // Step 1: Create
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/size-cards",
        Some(json!({
            "name": "T-shirt (unisex)",
            "columns": ["Size", "Chest (cm)"],
            "rows": [["S", "88"], ["M", "96"]]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let card: SizeCardTemplate = serde_json::from_value(body).expect("Failed to parse size card");
    assert_eq!(card.columns.len(), 2);
    assert_eq!(card.rows.len(), 2);
    let uri = format!("/api/size-cards/{}", card.id);

    // Step 2: Duplicate name conflicts
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/size-cards",
        Some(json!({"name": "T-shirt (unisex)", "columns": ["Size"], "rows": []})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({"error": "size card 'T-shirt (unisex)' already exists"})
    );

    // Step 3: Rows that do not fit the existing columns are rejected
    let (status, body) = call(&app, Method::PATCH, &uri, Some(json!({"rows": [["L"]]}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "every row must have one cell per column"}));

    // Changing columns alone must still fit the stored rows
    let (status, _) = call(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({"columns": ["Size", "Chest (cm)", "Length (cm)"]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({
            "columns": ["Size", "Chest (cm)", "Length (cm)"],
            "rows": [["S", "88", "68"]]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: SizeCardTemplate = serde_json::from_value(body).unwrap();
    assert_eq!(updated.columns.len(), 3);
    assert_eq!(updated.name, "T-shirt (unisex)");

    // Step 4: Renaming onto another card conflicts
    call(
        &app,
        Method::POST,
        "/api/size-cards",
        Some(json!({"name": "Hoodie", "columns": ["Size"], "rows": [["M"]]})),
    )
    .await;
    let (status, _) = call(&app, Method::PATCH, &uri, Some(json!({"name": "Hoodie"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = call(&app, Method::GET, "/api/size-cards", None).await;
    let names: Vec<String> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Hoodie", "T-shirt (unisex)"]);

    // Step 5: Delete
    let (status, _) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Size card not found"}));
}

#[tokio::test]
async fn test_size_card_validation() {
    let app = test_app();

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/size-cards",
        Some(json!({"name": "Pants", "columns": ["Size", "Waist"], "rows": [["S"]]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "every row must have one cell per column"}));

    let columns: Vec<String> = (0..33).map(|i| format!("c{}", i)).collect();
    let (status, _) = call(
        &app,
        Method::POST,
        "/api/size-cards",
        Some(json!({"name": "Wide", "columns": columns, "rows": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        &app,
        Method::PATCH,
        &format!("/api/size-cards/{}", Uuid::now_v7()),
        Some(json!({"rows": []})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A taken name sent to a missing card is still a 404
    call(
        &app,
        Method::POST,
        "/api/size-cards",
        Some(json!({"name": "Hoodie", "columns": ["Size"], "rows": [["M"]]})),
    )
    .await;
    let (status, _) = call(
        &app,
        Method::PATCH,
        &format!("/api/size-cards/{}", Uuid::now_v7()),
        Some(json!({"name": "Hoodie"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
