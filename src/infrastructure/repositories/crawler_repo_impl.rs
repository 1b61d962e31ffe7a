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

use crate::domain::criteria::{CrawlerCriteria, Direction, Page, PageRequest};
use crate::domain::models::crawler::Crawler;
use crate::domain::repositories::crawler_repository::CrawlerRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::crawler as crawler_entity;
use crate::infrastructure::query::ToSpecification;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 爬虫仓库实现
pub struct CrawlerRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CrawlerRepositoryImpl {
    /// 创建新的爬虫仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: crawler_entity::Model) -> Crawler {
        Crawler {
            id: Some(model.id),
            name: model.name,
            fetch: model.fetch,
            source: model.source,
        }
    }

    fn sort_column(property: &str) -> Result<crawler_entity::Column, RepositoryError> {
        match property {
            "id" => Ok(crawler_entity::Column::Id),
            "name" => Ok(crawler_entity::Column::Name),
            "fetch" => Ok(crawler_entity::Column::Fetch),
            "source" => Ok(crawler_entity::Column::Source),
            other => Err(RepositoryError::InvalidSort(other.to_string())),
        }
    }
}

#[async_trait]
impl CrawlerRepository for CrawlerRepositoryImpl {
    async fn save(&self, crawler: &Crawler) -> Result<Crawler, RepositoryError> {
        let model = crawler_entity::ActiveModel {
            id: crawler.id.map(Set).unwrap_or(NotSet),
            name: Set(crawler.name.clone()),
            fetch: Set(crawler.fetch),
            source: Set(crawler.source.clone()),
        };

        let saved = match crawler.id {
            None => model.insert(self.db.as_ref()).await?,
            Some(_) => model.update(self.db.as_ref()).await?,
        };

        Ok(Self::to_domain(saved))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Crawler>, RepositoryError> {
        let model = crawler_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Self::to_domain))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let count = crawler_entity::Entity::find_by_id(id)
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = crawler_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_by_criteria(
        &self,
        criteria: &CrawlerCriteria,
    ) -> Result<Vec<Crawler>, RepositoryError> {
        let models = criteria
            .to_specification()
            .into_select()
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Self::to_domain).collect())
    }

    async fn find_page_by_criteria(
        &self,
        criteria: &CrawlerCriteria,
        page: &PageRequest,
    ) -> Result<Page<Crawler>, RepositoryError> {
        let mut select = criteria.to_specification().into_select();
        let mut ordered_by_id = false;
        for order in &page.sort {
            let column = Self::sort_column(&order.property)?;
            ordered_by_id |= matches!(column, crawler_entity::Column::Id);
            select = select.order_by(column, to_order(order.direction));
        }
        // id 作为最后的排序键，保证逐页遍历时结果稳定
        if !ordered_by_id {
            select = select.order_by_asc(crawler_entity::Column::Id);
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

    async fn count_by_criteria(&self, criteria: &CrawlerCriteria) -> Result<u64, RepositoryError> {
        let count = criteria
            .to_specification()
            .into_select()
            .count(self.db.as_ref())
            .await?;

        Ok(count)
    }
}

pub(crate) fn to_order(direction: Direction) -> Order {
    match direction {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    }
}
