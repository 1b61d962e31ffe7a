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

use super::crawler_repo_impl::to_order;
use crate::domain::criteria::{FiltersCriteria, Page, PageRequest};
use crate::domain::models::filters::Filters;
use crate::domain::repositories::filters_repository::FiltersRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::filters as filters_entity;
use crate::infrastructure::query::ToSpecification;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 过滤器仓库实现
pub struct FiltersRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl FiltersRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: filters_entity::Model) -> Filters {
        Filters {
            id: Some(model.id),
            crawler_id: model.crawler_id,
        }
    }

    fn sort_column(property: &str) -> Result<filters_entity::Column, RepositoryError> {
        match property {
            "id" => Ok(filters_entity::Column::Id),
            "crawlerId" | "crawler.id" => Ok(filters_entity::Column::CrawlerId),
            other => Err(RepositoryError::InvalidSort(other.to_string())),
        }
    }
}

#[async_trait]
impl FiltersRepository for FiltersRepositoryImpl {
    async fn save(&self, filters: &Filters) -> Result<Filters, RepositoryError> {
        let model = filters_entity::ActiveModel {
            id: filters.id.map(Set).unwrap_or(NotSet),
            crawler_id: Set(filters.crawler_id),
        };

        let saved = match filters.id {
            None => model.insert(self.db.as_ref()).await?,
            Some(_) => model.update(self.db.as_ref()).await?,
        };

        Ok(Self::to_domain(saved))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Filters>, RepositoryError> {
        let model = filters_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Self::to_domain))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let count = filters_entity::Entity::find_by_id(id)
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = filters_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_by_criteria(
        &self,
        criteria: &FiltersCriteria,
    ) -> Result<Vec<Filters>, RepositoryError> {
        let models = criteria
            .to_specification()
            .into_select()
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Self::to_domain).collect())
    }

    async fn find_page_by_criteria(
        &self,
        criteria: &FiltersCriteria,
        page: &PageRequest,
    ) -> Result<Page<Filters>, RepositoryError> {
        let mut select = criteria.to_specification().into_select();
        let mut ordered_by_id = false;
        for order in &page.sort {
            let column = Self::sort_column(&order.property)?;
            ordered_by_id |= matches!(column, filters_entity::Column::Id);
            select = select.order_by(column, to_order(order.direction));
        }
        if !ordered_by_id {
            select = select.order_by_asc(filters_entity::Column::Id);
        }

        let txn = self.db.begin().await?;

        let total = criteria.to_specification().into_select().count(&txn).await?;
        let models = select
            .offset(page.offset())
            .limit(page.size)
            .all(&txn)
            .await?;

        txn.commit().await?;

        let content = models.into_iter().map(Self::to_domain).collect();
        Ok(Page::new(content, page, total))
    }

    async fn count_by_criteria(&self, criteria: &FiltersCriteria) -> Result<u64, RepositoryError> {
        let count = criteria
            .to_specification()
            .into_select()
            .count(self.db.as_ref())
            .await?;

        Ok(count)
    }
}
