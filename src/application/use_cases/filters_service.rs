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
    application::dto::filters_dto::{FiltersDto, FiltersPatchDto},
    domain::{models::filters::Filters, repositories::filters_repository::FiltersRepository},
    infrastructure::observability::metrics::record_entity_operation,
};
use std::sync::Arc;
use tracing::debug;

use super::service_error::{ensure_matching_id, ServiceError};

pub const ENTITY_NAME: &str = "filters";

/// 过滤器的增删改用例
///
/// 引用不存在的爬虫由存储层的外键拒绝，表现为 `RepositoryError::ConstraintViolation`
pub struct FiltersService<R> {
    repo: Arc<R>,
}

impl<R> FiltersService<R>
where
    R: FiltersRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, dto: FiltersDto) -> Result<FiltersDto, ServiceError> {
        debug!("Request to save Filters : {:?}", dto);
        if dto.id.is_some() {
            return Err(ServiceError::bad_request(
                ENTITY_NAME,
                "idexists",
                "A new filters cannot already have an ID",
            ));
        }

        let saved = self.repo.save(&Filters::from(dto)).await?;
        record_entity_operation(ENTITY_NAME, "create");
        Ok(saved.into())
    }

    pub async fn update(&self, id: i64, dto: FiltersDto) -> Result<FiltersDto, ServiceError> {
        debug!("Request to update Filters : {}, {:?}", id, dto);
        ensure_matching_id(ENTITY_NAME, id, dto.id)?;

        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::NotFound(ENTITY_NAME));
        }

        let saved = self.repo.save(&Filters::from(dto)).await?;
        record_entity_operation(ENTITY_NAME, "update");
        Ok(saved.into())
    }

    pub async fn partial_update(
        &self,
        id: i64,
        patch: FiltersPatchDto,
    ) -> Result<FiltersDto, ServiceError> {
        debug!("Request to partially update Filters : {}, {:?}", id, patch);
        ensure_matching_id(ENTITY_NAME, id, patch.id)?;

        let mut filters = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(ENTITY_NAME))?;
        patch.apply_to(&mut filters);

        let saved = self.repo.save(&filters).await?;
        record_entity_operation(ENTITY_NAME, "partial_update");
        Ok(saved.into())
    }

    pub async fn find_one(&self, id: i64) -> Result<FiltersDto, ServiceError> {
        debug!("Request to get Filters : {}", id);
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or(ServiceError::NotFound(ENTITY_NAME))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        debug!("Request to delete Filters : {}", id);
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::NotFound(ENTITY_NAME));
        }
        record_entity_operation(ENTITY_NAME, "delete");
        Ok(())
    }
}
