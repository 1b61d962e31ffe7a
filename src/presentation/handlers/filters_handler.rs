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
        dto::filters_dto::{FiltersDto, FiltersPatchDto},
        use_cases::{
            filters_query_service::FiltersQueryService,
            filters_service::{FiltersService, ENTITY_NAME},
        },
    },
    config::settings::PaginationSettings,
    domain::{
        criteria::{FiltersCriteria, Criteria, PageRequest},
        repositories::filters_repository::FiltersRepository,
    },
    presentation::{
        errors::AppError,
        extractors::{AppJson, QueryPairs},
        headers::{entity_creation_alert, entity_deletion_alert, entity_update_alert, insert},
        pagination::pagination_headers,
    },
};

fn id_param(dto: &FiltersDto) -> String {
    dto.id.map(|id| id.to_string()).unwrap_or_default()
}

/// 创建过滤器，引用的爬虫必须存在
pub async fn create_filters<R>(
    Extension(repo): Extension<Arc<R>>,
    AppJson(payload): AppJson<FiltersDto>,
) -> Result<Response, AppError>
where
    R: FiltersRepository + 'static,
{
    debug!("REST request to save Filters : {:?}", payload);
    let created = FiltersService::new(repo).create(payload).await?;

    let id = id_param(&created);
    let mut headers = entity_creation_alert(ENTITY_NAME, &id);
    insert(&mut headers, header::LOCATION, format!("/api/filters/{}", id));
    Ok((StatusCode::CREATED, headers, Json(created)).into_response())
}

pub async fn update_filters<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<FiltersDto>,
) -> Result<Response, AppError>
where
    R: FiltersRepository + 'static,
{
    debug!("REST request to update Filters : {}, {:?}", id, payload);
    let updated = FiltersService::new(repo).update(id, payload).await?;

    let headers = entity_update_alert(ENTITY_NAME, &id_param(&updated));
    Ok((StatusCode::OK, headers, Json(updated)).into_response())
}

/// 部分更新过滤器，未出现的字段保持不变
pub async fn partial_update_filters<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<FiltersPatchDto>,
) -> Result<Response, AppError>
where
    R: FiltersRepository + 'static,
{
    debug!("REST request to partially update Filters : {}, {:?}", id, payload);
    let updated = FiltersService::new(repo).partial_update(id, payload).await?;

    let headers = entity_update_alert(ENTITY_NAME, &id_param(&updated));
    Ok((StatusCode::OK, headers, Json(updated)).into_response())
}

/// 按条件查询过滤器，分页规则与爬虫列表相同
pub async fn get_all_filters<R>(
    Extension(repo): Extension<Arc<R>>,
    Extension(pagination): Extension<PaginationSettings>,
    OriginalUri(uri): OriginalUri,
    query: QueryPairs,
) -> Result<Response, AppError>
where
    R: FiltersRepository + 'static,
{
    let criteria = FiltersCriteria::from_query_pairs(query.iter())?;
    debug!("REST request to get Filters by criteria: {:?}", criteria);
    let page = PageRequest::from_query_pairs(
        query.iter(),
        pagination.default_page_size,
        pagination.max_page_size,
    )?;

    let service = FiltersQueryService::new(repo);
    match page {
        Some(page) => {
            let page = service.find_page_by_criteria(&criteria, &page).await?;
            let headers = pagination_headers(&uri, &page);
            Ok((StatusCode::OK, headers, Json(page.content)).into_response())
        }
        None => {
            let filters = service.find_by_criteria(&criteria).await?;
            Ok((StatusCode::OK, Json(filters)).into_response())
        }
    }
}

/// 统计匹配条件的过滤器数量
pub async fn count_filters<R>(
    Extension(repo): Extension<Arc<R>>,
    query: QueryPairs,
) -> Result<Json<u64>, AppError>
where
    R: FiltersRepository + 'static,
{
    let criteria = FiltersCriteria::from_query_pairs(query.iter())?;
    debug!("REST request to count Filters by criteria: {:?}", criteria);
    let count = FiltersQueryService::new(repo)
        .count_by_criteria(&criteria)
        .await?;
    Ok(Json(count))
}

pub async fn get_filters<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<FiltersDto>, AppError>
where
    R: FiltersRepository + 'static,
{
    debug!("REST request to get Filters : {}", id);
    let filters = FiltersService::new(repo).find_one(id).await?;
    Ok(Json(filters))
}

pub async fn delete_filters<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Response, AppError>
where
    R: FiltersRepository + 'static,
{
    debug!("REST request to delete Filters : {}", id);
    FiltersService::new(repo).delete(id).await?;

    let headers = entity_deletion_alert(ENTITY_NAME, &id.to_string());
    Ok((StatusCode::NO_CONTENT, headers).into_response())
}
