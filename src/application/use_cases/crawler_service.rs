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
    application::dto::crawler_dto::{CrawlerDto, CrawlerPatchDto},
    domain::{models::crawler::Crawler, repositories::crawler_repository::CrawlerRepository},
    infrastructure::observability::metrics::record_entity_operation,
};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use super::service_error::{ensure_matching_id, ServiceError};

pub const ENTITY_NAME: &str = "crawler";

/// 爬虫的增删改用例
pub struct CrawlerService<R> {
    repo: Arc<R>,
}

impl<R> CrawlerService<R>
where
    R: CrawlerRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 创建爬虫，请求中不能携带 `id`
    pub async fn create(&self, dto: CrawlerDto) -> Result<CrawlerDto, ServiceError> {
        debug!("Request to save Crawler : {:?}", dto);
        if dto.id.is_some() {
            return Err(ServiceError::bad_request(
                ENTITY_NAME,
                "idexists",
                "A new crawler cannot already have an ID",
            ));
        }
        dto.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let saved = self.repo.save(&Crawler::from(dto)).await?;
        record_entity_operation(ENTITY_NAME, "create");
        Ok(saved.into())
    }

    /// 整体替换已有爬虫的全部字段
    ///
    /// # 参数
    ///
    /// * `id` - 路径中的ID
    /// * `dto` - 请求体，`id` 必须与路径一致
    ///
    /// # 返回值
    ///
    /// * `Ok(CrawlerDto)` - 更新后的爬虫
    /// * `Err(ServiceError::BadRequest)` - `id` 缺失或不一致
    /// * `Err(ServiceError::NotFound)` - 爬虫不存在
    pub async fn update(&self, id: i64, dto: CrawlerDto) -> Result<CrawlerDto, ServiceError> {
        debug!("Request to update Crawler : {}, {:?}", id, dto);
        ensure_matching_id(ENTITY_NAME, id, dto.id)?;
        dto.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::NotFound(ENTITY_NAME));
        }

        let saved = self.repo.save(&Crawler::from(dto)).await?;
        record_entity_operation(ENTITY_NAME, "update");
        Ok(saved.into())
    }

    /// 只覆盖请求中出现的字段
    pub async fn partial_update(
        &self,
        id: i64,
        patch: CrawlerPatchDto,
    ) -> Result<CrawlerDto, ServiceError> {
        debug!("Request to partially update Crawler : {}, {:?}", id, patch);
        ensure_matching_id(ENTITY_NAME, id, patch.id)?;
        patch
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let mut crawler = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(ENTITY_NAME))?;
        patch.apply_to(&mut crawler);

        let saved = self.repo.save(&crawler).await?;
        record_entity_operation(ENTITY_NAME, "partial_update");
        Ok(saved.into())
    }

    pub async fn find_one(&self, id: i64) -> Result<CrawlerDto, ServiceError> {
        debug!("Request to get Crawler : {}", id);
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or(ServiceError::NotFound(ENTITY_NAME))
    }

    /// 删除爬虫，引用它的过滤器会被解除关联
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        debug!("Request to delete Crawler : {}", id);
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::NotFound(ENTITY_NAME));
        }
        record_entity_operation(ENTITY_NAME, "delete");
        Ok(())
    }
}
