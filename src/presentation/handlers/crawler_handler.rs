// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{Extension, OriginalUri, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::{
    application::{
        dto::crawler_dto::{CrawlerDto, CrawlerPatchDto},
        use_cases::{
            crawler_query_service::CrawlerQueryService,
            crawler_service::{CrawlerService, ENTITY_NAME},
        },
    },
    config::settings::PaginationSettings,
    domain::{
        criteria::{CrawlerCriteria, Criteria, PageRequest},
        repositories::crawler_repository::CrawlerRepository,
    },
    presentation::{
        errors::AppError,
        extractors::{AppJson, QueryPairs},
        headers::{entity_creation_alert, entity_deletion_alert, entity_update_alert, insert},
        pagination::pagination_headers,
    },
};

fn id_param(dto: &CrawlerDto) -> String {
    dto.id.map(|id| id.to_string()).unwrap_or_default()
}

/// 创建爬虫
///
/// 成功时返回 `201`，`Location` 指向新资源
pub async fn create_crawler<R>(
    Extension(repo): Extension<Arc<R>>,
    AppJson(payload): AppJson<CrawlerDto>,
) -> Result<Response, AppError>
where
    R: CrawlerRepository + 'static,
{
    debug!("REST request to save Crawler : {:?}", payload);
    let created = CrawlerService::new(repo).create(payload).await?;

    let id = id_param(&created);
    let mut headers = entity_creation_alert(ENTITY_NAME, &id);
    insert(&mut headers, header::LOCATION, format!("/api/crawlers/{}", id));
    Ok((StatusCode::CREATED, headers, Json(created)).into_response())
}

/// 整体更新爬虫
pub async fn update_crawler<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<CrawlerDto>,
) -> Result<Response, AppError>
where
    R: CrawlerRepository + 'static,
{
    debug!("REST request to update Crawler : {}, {:?}", id, payload);
    let updated = CrawlerService::new(repo).update(id, payload).await?;

    let headers = entity_update_alert(ENTITY_NAME, &id_param(&updated));
    Ok((StatusCode::OK, headers, Json(updated)).into_response())
}

/// 部分更新爬虫，未出现的字段保持不变
pub async fn partial_update_crawler<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<CrawlerPatchDto>,
) -> Result<Response, AppError>
where
    R: CrawlerRepository + 'static,
{
    debug!("REST request to partially update Crawler : {}, {:?}", id, payload);
    let updated = CrawlerService::new(repo).partial_update(id, payload).await?;

    let headers = entity_update_alert(ENTITY_NAME, &id_param(&updated));
    Ok((StatusCode::OK, headers, Json(updated)).into_response())
}

/// 按条件查询爬虫
///
/// 请求中出现 `page`、`size` 或 `sort` 时分页返回，并附带分页响应头；
/// 否则返回全部匹配的记录
pub async fn get_all_crawlers<R>(
    Extension(repo): Extension<Arc<R>>,
    Extension(pagination): Extension<PaginationSettings>,
    OriginalUri(uri): OriginalUri,
    query: QueryPairs,
) -> Result<Response, AppError>
where
    R: CrawlerRepository + 'static,
{
    let criteria = CrawlerCriteria::from_query_pairs(query.iter())?;
    debug!("REST request to get Crawlers by criteria: {:?}", criteria);
    let page = PageRequest::from_query_pairs(
        query.iter(),
        pagination.default_page_size,
        pagination.max_page_size,
    )?;

    let service = CrawlerQueryService::new(repo);
    match page {
        Some(page) => {
            let page = service.find_page_by_criteria(&criteria, &page).await?;
            let headers = pagination_headers(&uri, &page);
            Ok((StatusCode::OK, headers, Json(page.content)).into_response())
        }
        None => {
            let crawlers = service.find_by_criteria(&criteria).await?;
            Ok((StatusCode::OK, Json(crawlers)).into_response())
        }
    }
}

/// 统计匹配条件的爬虫数量
pub async fn count_crawlers<R>(
    Extension(repo): Extension<Arc<R>>,
    query: QueryPairs,
) -> Result<Json<u64>, AppError>
where
    R: CrawlerRepository + 'static,
{
    let criteria = CrawlerCriteria::from_query_pairs(query.iter())?;
    debug!("REST request to count Crawlers by criteria: {:?}", criteria);
    let count = CrawlerQueryService::new(repo)
        .count_by_criteria(&criteria)
        .await?;
    Ok(Json(count))
}

pub async fn get_crawler<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<CrawlerDto>, AppError>
where
    R: CrawlerRepository + 'static,
{
    debug!("REST request to get Crawler : {}", id);
    let crawler = CrawlerService::new(repo).find_one(id).await?;
    Ok(Json(crawler))
}

pub async fn delete_crawler<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Response, AppError>
where
    R: CrawlerRepository + 'static,
{
    debug!("REST request to delete Crawler : {}", id);
    CrawlerService::new(repo).delete(id).await?;

    let headers = entity_deletion_alert(ENTITY_NAME, &id.to_string());
    Ok((StatusCode::NO_CONTENT, headers).into_response())
}
