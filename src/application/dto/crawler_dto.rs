// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::crawler::Crawler;

/// 爬虫的完整表示，用于创建、整体更新和响应
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
pub struct CrawlerDto {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(range(min = -1, message = "must be greater than or equal to -1"))]
    pub fetch: i32,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub source: String,
}

/// 爬虫的部分更新，只覆盖出现的字段
///
/// 三个字段都不可为空，因此 `null` 与未提及等价。
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CrawlerPatchDto {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = -1, message = "must be greater than or equal to -1"))]
    pub fetch: Option<i32>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub source: Option<String>,
}

impl CrawlerPatchDto {
    pub fn apply_to(self, crawler: &mut Crawler) {
        if let Some(name) = self.name {
            crawler.name = name;
        }
        if let Some(fetch) = self.fetch {
            crawler.fetch = fetch;
        }
        if let Some(source) = self.source {
            crawler.source = source;
        }
    }
}

/// 对爬虫的引用，只携带 `id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CrawlerRefDto {
    pub id: i64,
}

impl From<Crawler> for CrawlerDto {
    fn from(crawler: Crawler) -> Self {
        Self {
            id: crawler.id,
            name: crawler.name,
            fetch: crawler.fetch,
            source: crawler.source,
        }
    }
}

impl From<CrawlerDto> for Crawler {
    fn from(dto: CrawlerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            fetch: dto.fetch,
            source: dto.source,
        }
    }
}
