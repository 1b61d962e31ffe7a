// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::PaginationSettings;
use crate::infrastructure::repositories::crawler_repo_impl::CrawlerRepositoryImpl;
use crate::infrastructure::repositories::filters_repo_impl::FiltersRepositoryImpl;
use crate::presentation::handlers::{crawler_handler, filters_handler};
use axum::{routing::get, Extension, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 集合路径只接受 `GET` 和 `POST`，`PUT`/`PATCH` 必须带ID，否则返回 `405`
///
/// # 返回值
///
/// 返回配置好的路由，仓库和分页配置需要由调用方以 `Extension` 注入
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api/version", get(version));

    let crawler_routes = Router::new()
        .route(
            "/api/crawlers",
            get(crawler_handler::get_all_crawlers::<CrawlerRepositoryImpl>)
                .post(crawler_handler::create_crawler::<CrawlerRepositoryImpl>),
        )
        .route(
            "/api/crawlers/count",
            get(crawler_handler::count_crawlers::<CrawlerRepositoryImpl>),
        )
        .route(
            "/api/crawlers/{id}",
            get(crawler_handler::get_crawler::<CrawlerRepositoryImpl>)
                .put(crawler_handler::update_crawler::<CrawlerRepositoryImpl>)
                .patch(crawler_handler::partial_update_crawler::<CrawlerRepositoryImpl>)
                .delete(crawler_handler::delete_crawler::<CrawlerRepositoryImpl>),
        );

    let filters_routes = Router::new()
        .route(
            "/api/filters",
            get(filters_handler::get_all_filters::<FiltersRepositoryImpl>)
                .post(filters_handler::create_filters::<FiltersRepositoryImpl>),
        )
        .route(
            "/api/filters/count",
            get(filters_handler::count_filters::<FiltersRepositoryImpl>),
        )
        .route(
            "/api/filters/{id}",
            get(filters_handler::get_filters::<FiltersRepositoryImpl>)
                .put(filters_handler::update_filters::<FiltersRepositoryImpl>)
                .patch(filters_handler::partial_update_filters::<FiltersRepositoryImpl>)
                .delete(filters_handler::delete_filters::<FiltersRepositoryImpl>),
        );

    Router::new()
        .merge(public_routes)
        .merge(crawler_routes)
        .merge(filters_routes)
}

/// 创建完整的应用
///
/// 在 [`routes`] 的基础上注入仓库、分页配置和请求追踪
pub fn app(db: Arc<DatabaseConnection>, pagination: PaginationSettings) -> Router {
    let crawler_repo = Arc::new(CrawlerRepositoryImpl::new(db.clone()));
    let filters_repo = Arc::new(FiltersRepositoryImpl::new(db));

    routes()
        .layer(Extension(crawler_repo))
        .layer(Extension(filters_repo))
        .layer(Extension(pagination))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
