// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::*;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_filters_with_crawler_reference() {
    let app = create_test_app().await;
    let crawler = create_default_crawler(&app.server).await;

    let response = app
        .server
        .post("/api/filters")
        .json(&json!({ "crawler": { "id": crawler } }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let created: Value = response.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created, json!({ "id": id, "crawler": { "id": crawler } }));
    assert_eq!(
        response.header("location").to_str().unwrap(),
        format!("/api/filters/{}", id)
    );

    let fetched: Value = app.server.get(&format!("/api/filters/{}", id)).await.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_filters_rejects_existing_id_and_dangling_reference() {
    let app = create_test_app().await;

    let with_id = app
        .server
        .post("/api/filters")
        .json(&json!({ "id": 1, "crawler": null }))
        .await;
    assert_eq!(with_id.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        with_id.header("x-crawlcfg-error").to_str().unwrap(),
        "error.idexists"
    );

    let dangling = app
        .server
        .post("/api/filters")
        .json(&json!({ "crawler": { "id": 4242 } }))
        .await;
    assert_eq!(dangling.status_code(), StatusCode::BAD_REQUEST);

    assert_eq!(get_count(&app.server, "/api/filters/count").await, 0);
}

#[tokio::test]
async fn test_filter_by_crawler_id() {
    let app = create_test_app().await;
    let crawler = create_default_crawler(&app.server).await;
    let other_crawler =
        create_crawler(&app.server, UPDATED_NAME, UPDATED_FETCH, UPDATED_SOURCE).await;

    let owned = create_filters(&app.server, Some(crawler)).await;
    let foreign = create_filters(&app.server, Some(other_crawler)).await;
    let detached = create_filters(&app.server, None).await;

    let matching = get_ids(
        &app.server,
        &format!("/api/filters?crawlerId.equals={}", crawler),
    )
    .await;
    assert_eq!(matching, vec![owned]);
    assert_eq!(
        get_count(
            &app.server,
            &format!("/api/filters/count?crawlerId.equals={}", crawler)
        )
        .await,
        1
    );

    let unreferenced = other_crawler + 1;
    let none = get_ids(
        &app.server,
        &format!("/api/filters?crawlerId.equals={}", unreferenced),
    )
    .await;
    assert!(none.is_empty());
    assert_eq!(
        get_count(
            &app.server,
            &format!("/api/filters/count?crawlerId.equals={}", unreferenced)
        )
        .await,
        0
    );

    let mut not_owned = get_ids(
        &app.server,
        &format!("/api/filters?crawlerId.notEquals={}", crawler),
    )
    .await;
    not_owned.sort();
    assert_eq!(not_owned, vec![foreign, detached]);

    let specified = get_ids(&app.server, "/api/filters?crawlerId.specified=true&sort=id").await;
    assert_eq!(specified, vec![owned, foreign]);
    let unspecified = get_ids(&app.server, "/api/filters?crawlerId.specified=false").await;
    assert_eq!(unspecified, vec![detached]);

    let ranged = get_ids(
        &app.server,
        &format!("/api/filters?crawlerId.greaterThan={}", crawler),
    )
    .await;
    assert_eq!(ranged, vec![foreign]);

    let paged = app
        .server
        .get(&format!(
            "/api/filters?crawlerId.in={},{}&sort=id,desc&page=0&size=1",
            crawler, other_crawler
        ))
        .await;
    assert_eq!(paged.status_code(), StatusCode::OK);
    assert_eq!(paged.header("x-total-count").to_str().unwrap(), "2");
    assert_eq!(ids(&paged.json::<Value>()), vec![foreign]);
}

#[tokio::test]
async fn test_relationship_operand_must_be_numeric() {
    let app = create_test_app().await;
    let response = app.server.get("/api/filters?crawlerId.equals=abc").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_filters() {
    let app = create_test_app().await;
    let crawler = create_default_crawler(&app.server).await;
    let other_crawler =
        create_crawler(&app.server, UPDATED_NAME, UPDATED_FETCH, UPDATED_SOURCE).await;
    let id = create_filters(&app.server, Some(crawler)).await;

    let moved = app
        .server
        .put(&format!("/api/filters/{}", id))
        .json(&json!({ "id": id, "crawler": { "id": other_crawler } }))
        .await;
    assert_eq!(moved.status_code(), StatusCode::OK);
    assert_eq!(
        moved.json::<Value>(),
        json!({ "id": id, "crawler": { "id": other_crawler } })
    );

    let mismatched = app
        .server
        .put(&format!("/api/filters/{}", id))
        .json(&json!({ "id": id + 1, "crawler": null }))
        .await;
    assert_eq!(mismatched.status_code(), StatusCode::BAD_REQUEST);

    let missing = app
        .server
        .put("/api/filters/9999")
        .json(&json!({ "id": 9999, "crawler": null }))
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let collection = app
        .server
        .put("/api/filters")
        .json(&json!({ "id": id, "crawler": null }))
        .await;
    assert_eq!(collection.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_partial_update_distinguishes_null_from_absent() {
    let app = create_test_app().await;
    let crawler = create_default_crawler(&app.server).await;
    let id = create_filters(&app.server, Some(crawler)).await;

    let untouched = app
        .server
        .patch(&format!("/api/filters/{}", id))
        .json(&json!({ "id": id }))
        .await;
    assert_eq!(untouched.status_code(), StatusCode::OK);
    assert_eq!(untouched.json::<Value>()["crawler"]["id"], crawler);

    let cleared = app
        .server
        .patch(&format!("/api/filters/{}", id))
        .json(&json!({ "id": id, "crawler": null }))
        .await;
    assert_eq!(cleared.status_code(), StatusCode::OK);
    assert_eq!(cleared.json::<Value>()["crawler"], Value::Null);

    let fetched: Value = app.server.get(&format!("/api/filters/{}", id)).await.json();
    assert_eq!(fetched["crawler"], Value::Null);
}

#[tokio::test]
async fn test_deleting_crawler_detaches_its_filters() {
    let app = create_test_app().await;
    let crawler = create_default_crawler(&app.server).await;
    let id = create_filters(&app.server, Some(crawler)).await;

    let response = app.server.delete(&format!("/api/crawlers/{}", crawler)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let fetched: Value = app.server.get(&format!("/api/filters/{}", id)).await.json();
    assert_eq!(fetched, json!({ "id": id, "crawler": null }));
}

#[tokio::test]
async fn test_delete_filters() {
    let app = create_test_app().await;
    let id = create_filters(&app.server, None).await;

    let response = app.server.delete(&format!("/api/filters/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.header("x-crawlcfg-alert").to_str().unwrap(),
        format!("A filters is deleted with identifier {}", id)
    );

    let gone = app.server.get(&format!("/api/filters/{}", id)).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(get_count(&app.server, "/api/filters/count").await, 0);
}
