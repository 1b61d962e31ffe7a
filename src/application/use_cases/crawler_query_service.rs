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

use crate::{
    application::dto::crawler_dto::CrawlerDto,
    domain::{
        criteria::{CrawlerCriteria, Page, PageRequest},
        repositories::crawler_repository::CrawlerRepository,
    },
    infrastructure::observability::metrics::record_criteria_query,
};
use std::sync::Arc;
use tracing::debug;

use super::crawler_service::ENTITY_NAME;
use super::service_error::ServiceError;

/// 按条件查询爬虫
pub struct CrawlerQueryService<R> {
    repo: Arc<R>,
}

impl<R> CrawlerQueryService<R>
where
    R: CrawlerRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 返回全部匹配的爬虫
    pub async fn find_by_criteria(
        &self,
        criteria: &CrawlerCriteria,
    ) -> Result<Vec<CrawlerDto>, ServiceError> {
        debug!("find by criteria : {:?}", criteria);
        let crawlers = self.repo.find_by_criteria(criteria).await?;
        record_criteria_query(ENTITY_NAME, "list");
        Ok(crawlers.into_iter().map(Into::into).collect())
    }

    /// 返回一页匹配的爬虫
    pub async fn find_page_by_criteria(
        &self,
        criteria: &CrawlerCriteria,
        page: &PageRequest,
    ) -> Result<Page<CrawlerDto>, ServiceError> {
        debug!("find by criteria : {:?}, page: {:?}", criteria, page);
        let page = self.repo.find_page_by_criteria(criteria, page).await?;
        record_criteria_query(ENTITY_NAME, "page");
        Ok(page.map(Into::into))
    }

    /// 返回匹配的爬虫数量
    pub async fn count_by_criteria(&self, criteria: &CrawlerCriteria) -> Result<u64, ServiceError> {
        debug!("count by criteria : {:?}", criteria);
        let count = self.repo.count_by_criteria(criteria).await?;
        record_criteria_query(ENTITY_NAME, "count");
        Ok(count)
    }
}
