// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::*;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_crawler_round_trip() {
    let app = create_test_app().await;
    let before = get_count(&app.server, "/api/crawlers/count").await;

    let response = app
        .server
        .post("/api/crawlers")
        .json(&json!({
            "name": DEFAULT_NAME,
            "fetch": DEFAULT_FETCH,
            "source": DEFAULT_SOURCE
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Value = response.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(
        response.header("location").to_str().unwrap(),
        format!("/api/crawlers/{}", id)
    );
    assert_eq!(
        response.header("x-crawlcfg-alert").to_str().unwrap(),
        format!("A new crawler is created with identifier {}", id)
    );

    let fetched: Value = app.server.get(&format!("/api/crawlers/{}", id)).await.json();
    assert_eq!(
        fetched,
        json!({
            "id": id,
            "name": DEFAULT_NAME,
            "fetch": DEFAULT_FETCH,
            "source": DEFAULT_SOURCE
        })
    );

    assert_eq!(get_count(&app.server, "/api/crawlers/count").await, before + 1);
}

#[tokio::test]
async fn test_create_crawler_with_existing_id_is_rejected() {
    let app = create_test_app().await;
    create_default_crawler(&app.server).await;
    let before = get_count(&app.server, "/api/crawlers/count").await;

    let response = app
        .server
        .post("/api/crawlers")
        .json(&json!({
            "id": 1,
            "name": DEFAULT_NAME,
            "fetch": DEFAULT_FETCH,
            "source": DEFAULT_SOURCE
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.header("x-crawlcfg-error").to_str().unwrap(),
        "error.idexists"
    );
    let body: Value = response.json();
    assert_eq!(body["entityName"], "crawler");
    assert_eq!(body["errorKey"], "idexists");

    assert_eq!(get_count(&app.server, "/api/crawlers/count").await, before);
}

#[tokio::test]
async fn test_required_fields_are_checked() {
    let app = create_test_app().await;

    let missing_name = app
        .server
        .post("/api/crawlers")
        .json(&json!({ "fetch": DEFAULT_FETCH, "source": DEFAULT_SOURCE }))
        .await;
    assert_eq!(missing_name.status_code(), StatusCode::BAD_REQUEST);

    let missing_fetch = app
        .server
        .post("/api/crawlers")
        .json(&json!({ "name": DEFAULT_NAME, "source": DEFAULT_SOURCE }))
        .await;
    assert_eq!(missing_fetch.status_code(), StatusCode::BAD_REQUEST);

    let empty_source = app
        .server
        .post("/api/crawlers")
        .json(&json!({ "name": DEFAULT_NAME, "fetch": DEFAULT_FETCH, "source": "" }))
        .await;
    assert_eq!(empty_source.status_code(), StatusCode::BAD_REQUEST);

    let fetch_too_small = app
        .server
        .post("/api/crawlers")
        .json(&json!({ "name": DEFAULT_NAME, "fetch": -2, "source": DEFAULT_SOURCE }))
        .await;
    assert_eq!(fetch_too_small.status_code(), StatusCode::BAD_REQUEST);

    assert_eq!(get_count(&app.server, "/api/crawlers/count").await, 0);
}

#[tokio::test]
async fn test_get_all_crawlers() {
    let app = create_test_app().await;
    let first = create_default_crawler(&app.server).await;
    let second = create_crawler(&app.server, UPDATED_NAME, UPDATED_FETCH, UPDATED_SOURCE).await;

    let response = app.server.get("/api/crawlers").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.maybe_header("x-total-count").is_none());

    let mut found = ids(&response.json::<Value>());
    found.sort();
    assert_eq!(found, vec![first, second]);
}

#[tokio::test]
async fn test_get_non_existing_crawler() {
    let app = create_test_app().await;
    let response = app.server.get("/api/crawlers/9999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_update_replaces_every_field() {
    let app = create_test_app().await;
    let id = create_default_crawler(&app.server).await;

    let response = app
        .server
        .put(&format!("/api/crawlers/{}", id))
        .json(&json!({
            "id": id,
            "name": UPDATED_NAME,
            "fetch": UPDATED_FETCH,
            "source": UPDATED_SOURCE
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("x-crawlcfg-alert").to_str().unwrap(),
        format!("A crawler is updated with identifier {}", id)
    );

    let fetched: Value = app.server.get(&format!("/api/crawlers/{}", id)).await.json();
    assert_eq!(fetched["name"], UPDATED_NAME);
    assert_eq!(fetched["fetch"], UPDATED_FETCH);
    assert_eq!(fetched["source"], UPDATED_SOURCE);
}

#[tokio::test]
async fn test_partial_update_keeps_absent_fields() {
    let app = create_test_app().await;
    let id = create_default_crawler(&app.server).await;

    let response = app
        .server
        .patch(&format!("/api/crawlers/{}", id))
        .json(&json!({ "id": id, "source": UPDATED_SOURCE }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let fetched: Value = app.server.get(&format!("/api/crawlers/{}", id)).await.json();
    assert_eq!(fetched["name"], DEFAULT_NAME);
    assert_eq!(fetched["fetch"], DEFAULT_FETCH);
    assert_eq!(fetched["source"], UPDATED_SOURCE);

    let invalid = app
        .server
        .patch(&format!("/api/crawlers/{}", id))
        .json(&json!({ "id": id, "fetch": -7 }))
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_identifier_checks() {
    let app = create_test_app().await;
    let id = create_default_crawler(&app.server).await;
    let body = |id: Option<i64>| {
        json!({
            "id": id,
            "name": UPDATED_NAME,
            "fetch": UPDATED_FETCH,
            "source": UPDATED_SOURCE
        })
    };

    let without_id = app
        .server
        .put(&format!("/api/crawlers/{}", id))
        .json(&body(None))
        .await;
    assert_eq!(without_id.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        without_id.header("x-crawlcfg-error").to_str().unwrap(),
        "error.idnull"
    );

    let mismatched = app
        .server
        .put(&format!("/api/crawlers/{}", id))
        .json(&body(Some(id + 1)))
        .await;
    assert_eq!(mismatched.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        mismatched.header("x-crawlcfg-error").to_str().unwrap(),
        "error.idinvalid"
    );

    let missing = app
        .server
        .put("/api/crawlers/9999")
        .json(&body(Some(9999)))
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let missing_patch = app
        .server
        .patch("/api/crawlers/9999")
        .json(&json!({ "id": 9999, "name": UPDATED_NAME }))
        .await;
    assert_eq!(missing_patch.status_code(), StatusCode::NOT_FOUND);

    let fetched: Value = app.server.get(&format!("/api/crawlers/{}", id)).await.json();
    assert_eq!(fetched["name"], DEFAULT_NAME);
}

#[tokio::test]
async fn test_update_without_path_id_is_not_allowed() {
    let app = create_test_app().await;
    let id = create_default_crawler(&app.server).await;
    let body = json!({
        "id": id,
        "name": UPDATED_NAME,
        "fetch": UPDATED_FETCH,
        "source": UPDATED_SOURCE
    });

    let put = app.server.put("/api/crawlers").json(&body).await;
    assert_eq!(put.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let patch = app.server.patch("/api/crawlers").json(&body).await;
    assert_eq!(patch.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_delete_crawler() {
    let app = create_test_app().await;
    let id = create_default_crawler(&app.server).await;
    let other = create_crawler(&app.server, UPDATED_NAME, UPDATED_FETCH, UPDATED_SOURCE).await;
    let before = get_count(&app.server, "/api/crawlers/count").await;

    let response = app.server.delete(&format!("/api/crawlers/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.header("x-crawlcfg-alert").to_str().unwrap(),
        format!("A crawler is deleted with identifier {}", id)
    );

    let gone = app.server.get(&format!("/api/crawlers/{}", id)).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(get_count(&app.server, "/api/crawlers/count").await, before - 1);
    assert_eq!(get_ids(&app.server, "/api/crawlers").await, vec![other]);

    let again = app.server.delete(&format!("/api/crawlers/{}", id)).await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
}
