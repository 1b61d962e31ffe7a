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

use sea_orm::{EntityTrait, RelationTrait};

use super::specification::{range_condition, string_condition, Specification};
use crate::domain::criteria::{CrawlerCriteria, FiltersCriteria};
use crate::infrastructure::database::entities::{crawler, filters};

/// 将领域查询条件翻译为实体上的查询规格
pub trait ToSpecification<E: EntityTrait> {
    fn to_specification(&self) -> Specification<E>;
}

impl ToSpecification<crawler::Entity> for CrawlerCriteria {
    fn to_specification(&self) -> Specification<crawler::Entity> {
        let mut query = Specification::new().distinct(self.distinct.unwrap_or(false));

        if let Some(filter) = &self.id {
            query = query.and(range_condition(crawler::Column::Id, filter));
        }
        if let Some(filter) = &self.name {
            query = query.and(string_condition(crawler::Column::Name, filter));
        }
        if let Some(filter) = &self.fetch {
            query = query.and(range_condition(crawler::Column::Fetch, filter));
        }
        if let Some(filter) = &self.source {
            query = query.and(string_condition(crawler::Column::Source, filter));
        }

        query
    }
}

impl ToSpecification<filters::Entity> for FiltersCriteria {
    fn to_specification(&self) -> Specification<filters::Entity> {
        let mut query = Specification::new().distinct(self.distinct.unwrap_or(false));

        if let Some(filter) = &self.id {
            query = query.and(range_condition(filters::Column::Id, filter));
        }
        // 关系字段：连接被引用的爬虫，在其主键上求值
        if let Some(filter) = &self.crawler_id {
            query = query
                .left_join(filters::Relation::Crawler.def())
                .and(range_condition(crawler::Column::Id, filter));
        }

        query
    }
}
