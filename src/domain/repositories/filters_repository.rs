// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::error::RepositoryError;
use crate::domain::criteria::{FiltersCriteria, Page, PageRequest};
use crate::domain::models::filters::Filters;
use async_trait::async_trait;

/// 过滤器仓库特质
///
/// 与 [`CrawlerRepository`](super::crawler_repository::CrawlerRepository) 对称；
/// `crawler_id` 指向不存在的爬虫时，保存返回 `RepositoryError::ConstraintViolation`。
#[async_trait]
pub trait FiltersRepository: Send + Sync {
    /// 保存过滤器，`id` 为空时插入
    async fn save(&self, filters: &Filters) -> Result<Filters, RepositoryError>;
    /// 根据ID查找过滤器
    async fn find_by_id(&self, id: i64) -> Result<Option<Filters>, RepositoryError>;
    /// 检查ID是否存在
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;
    /// 根据ID删除过滤器，返回是否删除了记录
    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError>;
    /// 查询所有匹配条件的过滤器
    async fn find_by_criteria(
        &self,
        criteria: &FiltersCriteria,
    ) -> Result<Vec<Filters>, RepositoryError>;
    /// 分页查询匹配条件的过滤器
    async fn find_page_by_criteria(
        &self,
        criteria: &FiltersCriteria,
        page: &PageRequest,
    ) -> Result<Page<Filters>, RepositoryError>;
    /// 统计匹配条件的过滤器数量
    async fn count_by_criteria(&self, criteria: &FiltersCriteria) -> Result<u64, RepositoryError>;
}
