//! End-to-end tests against an in-process mock of the Brease API
//!
//! The mock serves the `{"data": {...}}` envelopes the real backend uses,
//! checks bearer auth where it matters, and exposes one permanently broken
//! collection for the fail-closed paths.

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use brease_api_client::params::{generate_collection_params, generate_page_params, PageParams};
use brease_api_client::{BreaseClient, ClientConfig, FetchResult, SharedContent};
use serde_json::{json, Value};
use std::collections::HashMap;

const TOKEN: &str = "test-token";

async fn locales(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if auth != format!("Bearer {TOKEN}") {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "data": {"locales": [
            {"code": "en", "name": "English", "default": true},
            {"code": "fr", "name": "French"}
        ]}
    })))
}

async fn pages(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    // Same two pages in every locale; the locale only scopes the content.
    assert!(query.contains_key("locale"));
    Json(json!({
        "data": {"pages": [
            {"slug": "/"},
            {"slug": "/about"}
        ]}
    }))
}

async fn page(Query(query): Query<HashMap<String, String>>) -> Result<Json<Value>, StatusCode> {
    let slug = query.get("slug").cloned().unwrap_or_default();
    let locale = query.get("locale").cloned().unwrap_or_default();
    if slug != "/about" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "data": {"page": {
            "uuid": "p-about",
            "name": "About",
            "slug": slug,
            "locale": locale,
            "meta": {"title": "About us", "indexing": false},
            "sections": [
                {"uuid": "s-1", "type": "hero", "elements": {"headline": "About"}},
                {"uuid": "s-2", "type": "team", "elements": {}}
            ]
        }}
    })))
}

async fn navigation(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id != "nav-header" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "data": {"navigation": {
            "uuid": "nav-header",
            "name": "Header",
            "items": [
                {"label": "Home", "type": "internal", "target": {"slug": "/"}}
            ]
        }}
    })))
}

async fn collection(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    match id.as_str() {
        "posts" => Ok(Json(json!({
            "data": {"collection": {
                "uuid": "c-posts",
                "name": "Posts",
                "slug": "posts",
                "entries": [
                    {"uuid": "e-1", "slug": "first-post", "elements": {"title": "First"}},
                    {"uuid": "e-2", "slug": "second-post", "elements": {"title": "Second"}}
                ]
            }}
        }))),
        "broken" => Err(StatusCode::INTERNAL_SERVER_ERROR),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn spawn_mock() -> ClientConfig {
    let app = Router::new()
        .route("/environments/test/locales", get(locales))
        .route("/environments/test/pages", get(pages))
        .route("/environments/test/page", get(page))
        .route("/environments/test/navigations/{id}", get(navigation))
        .route("/environments/test/collections/{id}", get(collection));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ClientConfig::new(format!("http://{addr}"), TOKEN, "test", "en")
}

#[tokio::test]
async fn fetches_a_page_with_sections_in_order() {
    let client = BreaseClient::with_config(spawn_mock().await).unwrap();

    match client.pages().get("en/about", None).await {
        FetchResult::Success { data, status } => {
            assert_eq!(status, 200);
            assert_eq!(data.slug, "/about");
            assert_eq!(data.locale.as_deref(), Some("en"));
            let kinds: Vec<_> = data.sections.iter().map(|s| s.kind.as_str()).collect();
            assert_eq!(kinds, vec!["hero", "team"]);
            assert_eq!(data.meta.unwrap().indexing, Some(false));
        }
        FetchResult::Failure { error, .. } => panic!("unexpected failure: {error}"),
    }
}

#[tokio::test]
async fn missing_page_becomes_a_404_failure_not_an_error() {
    let client = BreaseClient::with_config(spawn_mock().await).unwrap();

    match client.pages().get("nope", None).await {
        FetchResult::Failure {
            error,
            status,
            endpoint,
        } => {
            assert_eq!(status, 404);
            assert!(error.contains("404"));
            assert!(endpoint.unwrap().contains("/environments/test/page"));
        }
        FetchResult::Success { .. } => panic!("expected a 404 failure"),
    }
}

#[tokio::test]
async fn bad_token_surfaces_as_a_401_failure() {
    let config = spawn_mock().await;
    let config = ClientConfig::new(config.api_url, "wrong-token", "test", "en");
    let client = BreaseClient::with_config(config).unwrap();

    match client.locales().list().await {
        FetchResult::Failure { status, .. } => assert_eq!(status, 401),
        FetchResult::Success { .. } => panic!("expected auth rejection"),
    }
}

#[tokio::test]
async fn page_params_cover_every_locale_and_include_the_root() {
    let client = BreaseClient::with_config(spawn_mock().await).unwrap();

    let params = generate_page_params(&client).await;
    assert_eq!(params.len(), 4);
    assert!(params.contains(&PageParams {
        locale: "en".to_string(),
        slug: vec![],
    }));
    assert!(params.contains(&PageParams {
        locale: "fr".to_string(),
        slug: vec!["about".to_string()],
    }));
}

#[tokio::test]
async fn page_params_fail_closed_when_the_backend_is_unreachable() {
    let config = ClientConfig::new("http://127.0.0.1:9", TOKEN, "test", "en");
    let client = BreaseClient::with_config(config).unwrap();

    assert!(generate_page_params(&client).await.is_empty());
}

#[tokio::test]
async fn collection_params_enumerate_entry_slugs() {
    let client = BreaseClient::with_config(spawn_mock().await).unwrap();

    let params = generate_collection_params(&client, "posts", Some("fr")).await;
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].locale, "fr");
    assert_eq!(params[0].slug, vec!["first-post".to_string()]);
}

#[tokio::test]
async fn collection_params_fail_closed_on_upstream_error() {
    let client = BreaseClient::with_config(spawn_mock().await).unwrap();

    assert!(
        generate_collection_params(&client, "broken", None)
            .await
            .is_empty()
    );
}

#[tokio::test]
async fn shared_content_keeps_successes_and_drops_failures() {
    let client = BreaseClient::with_config(spawn_mock().await).unwrap();

    let content = SharedContent::load(
        &client,
        "en",
        &[("header", "nav-header")],
        &[("posts", "posts"), ("flaky", "broken")],
    )
    .await;

    assert_eq!(content.navigation_count(), 1);
    assert_eq!(content.collection_count(), 1);
    assert_eq!(content.navigation("header").unwrap().name, "Header");
    assert_eq!(content.collection("posts").unwrap().entries.len(), 2);
    // The failed fetch was dropped; asking for it is indistinguishable from
    // never registering it.
    assert!(content.collection("flaky").is_err());
}
