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
    application::dto::filters_dto::FiltersDto,
    domain::{
        criteria::{FiltersCriteria, Page, PageRequest},
        repositories::filters_repository::FiltersRepository,
    },
    infrastructure::observability::metrics::record_criteria_query,
};
use std::sync::Arc;
use tracing::debug;

use super::filters_service::ENTITY_NAME;
use super::service_error::ServiceError;

/// 按条件查询过滤器
pub struct FiltersQueryService<R> {
    repo: Arc<R>,
}

impl<R> FiltersQueryService<R>
where
    R: FiltersRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn find_by_criteria(
        &self,
        criteria: &FiltersCriteria,
    ) -> Result<Vec<FiltersDto>, ServiceError> {
        debug!("find by criteria : {:?}", criteria);
        let filters = self.repo.find_by_criteria(criteria).await?;
        record_criteria_query(ENTITY_NAME, "list");
        Ok(filters.into_iter().map(Into::into).collect())
    }

    pub async fn find_page_by_criteria(
        &self,
        criteria: &FiltersCriteria,
        page: &PageRequest,
    ) -> Result<Page<FiltersDto>, ServiceError> {
        debug!("find by criteria : {:?}, page: {:?}", criteria, page);
        let page = self.repo.find_page_by_criteria(criteria, page).await?;
        record_criteria_query(ENTITY_NAME, "page");
        Ok(page.map(Into::into))
    }

    pub async fn count_by_criteria(&self, criteria: &FiltersCriteria) -> Result<u64, ServiceError> {
        debug!("count by criteria : {:?}", criteria);
        let count = self.repo.count_by_criteria(criteria).await?;
        record_criteria_query(ENTITY_NAME, "count");
        Ok(count)
    }
}
