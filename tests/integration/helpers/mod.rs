// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use axum_test::TestServer;
use crawlcfg::config::settings::{DatabaseSettings, PaginationSettings};
use crawlcfg::infrastructure::database::connection;
use crawlcfg::presentation::routes;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

pub const DEFAULT_NAME: &str = "AAAAAAAAAA";
pub const UPDATED_NAME: &str = "BBBBBBBBBB";
pub const DEFAULT_FETCH: i32 = -1;
pub const UPDATED_FETCH: i32 = 0;
pub const DEFAULT_SOURCE: &str = "AAAAAAAAAA";
pub const UPDATED_SOURCE: &str = "BBBBBBBBBB";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
}

/// 连接一个迁移完成的内存 SQLite 数据库
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        // One connection, otherwise each connection sees its own empty database
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(10),
        idle_timeout: None,
        run_migrations: true,
    };
    Arc::new(connection::create_pool(&settings).await.unwrap())
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_pagination(PaginationSettings::default()).await
}

pub async fn create_test_app_with_pagination(pagination: PaginationSettings) -> TestApp {
    let db = create_test_db().await;
    let app = routes::app(db.clone(), pagination);
    let server = TestServer::new(app).unwrap();
    TestApp { server, db }
}

pub async fn create_crawler(server: &TestServer, name: &str, fetch: i32, source: &str) -> i64 {
    let response = server
        .post("/api/crawlers")
        .json(&json!({ "name": name, "fetch": fetch, "source": source }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub async fn create_default_crawler(server: &TestServer) -> i64 {
    create_crawler(server, DEFAULT_NAME, DEFAULT_FETCH, DEFAULT_SOURCE).await
}

pub async fn create_filters(server: &TestServer, crawler_id: Option<i64>) -> i64 {
    let crawler = crawler_id.map(|id| json!({ "id": id }));
    let response = server
        .post("/api/filters")
        .json(&json!({ "crawler": crawler }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

/// 返回响应数组中的全部 `id`，保持顺序
pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

pub async fn get_ids(server: &TestServer, path: &str) -> Vec<i64> {
    let response = server.get(path).await;
    assert_eq!(response.status_code(), StatusCode::OK, "GET {}", path);
    ids(&response.json::<Value>())
}

pub async fn get_count(server: &TestServer, path: &str) -> u64 {
    let response = server.get(path).await;
    assert_eq!(response.status_code(), StatusCode::OK, "GET {}", path);
    response.json::<u64>()
}
