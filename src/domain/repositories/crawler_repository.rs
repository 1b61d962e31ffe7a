// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::error::RepositoryError;
use crate::domain::criteria::{CrawlerCriteria, Page, PageRequest};
use crate::domain::models::crawler::Crawler;
use async_trait::async_trait;

/// 爬虫仓库特质
///
/// 定义爬虫配置的数据访问接口。按条件查询的三个方法共享同一套过滤语义：
/// 对同一个条件，`count_by_criteria` 等于 `find_by_criteria` 的结果数，
/// 也等于逐页遍历 `find_page_by_criteria` 得到的记录总数。
#[async_trait]
pub trait CrawlerRepository: Send + Sync {
    /// 保存爬虫
    ///
    /// # 参数
    ///
    /// * `crawler` - `id` 为空时插入新记录，否则整体替换已有记录
    ///
    /// # 返回值
    ///
    /// * `Ok(Crawler)` - 保存后的实体，包含分配的ID
    /// * `Err(RepositoryError::NotFound)` - 要替换的记录不存在
    async fn save(&self, crawler: &Crawler) -> Result<Crawler, RepositoryError>;

    /// 根据ID查找爬虫
    async fn find_by_id(&self, id: i64) -> Result<Option<Crawler>, RepositoryError>;

    /// 检查ID是否存在
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    /// 根据ID删除爬虫
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 删除了一条记录
    /// * `Ok(false)` - 记录不存在
    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    /// 查询所有匹配条件的爬虫，不分页
    async fn find_by_criteria(
        &self,
        criteria: &CrawlerCriteria,
    ) -> Result<Vec<Crawler>, RepositoryError>;

    /// 查询一页匹配条件的爬虫，并返回匹配总数
    ///
    /// # 返回值
    ///
    /// * `Ok(Page<Crawler>)` - 当前页内容和总数
    /// * `Err(RepositoryError::InvalidSort)` - 排序属性不存在
    async fn find_page_by_criteria(
        &self,
        criteria: &CrawlerCriteria,
        page: &PageRequest,
    ) -> Result<Page<Crawler>, RepositoryError>;

    /// 统计匹配条件的爬虫数量
    async fn count_by_criteria(&self, criteria: &CrawlerCriteria) -> Result<u64, RepositoryError>;
}
