// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::crawler_dto::CrawlerRefDto;
use super::patch::Patch;
use crate::domain::models::filters::Filters;

/// 过滤器的完整表示
///
/// 被引用的爬虫只以 `{"id": n}` 的形式出现。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FiltersDto {
    pub id: Option<i64>,
    #[serde(default)]
    pub crawler: Option<CrawlerRefDto>,
}

/// 过滤器的部分更新
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FiltersPatchDto {
    pub id: Option<i64>,
    /// `null` 解除与爬虫的关联，缺失则保持不变
    #[serde(default)]
    pub crawler: Patch<CrawlerRefDto>,
}

impl FiltersPatchDto {
    pub fn apply_to(self, filters: &mut Filters) {
        self.crawler
            .map(|crawler| crawler.id)
            .apply_to(&mut filters.crawler_id);
    }
}

impl From<Filters> for FiltersDto {
    fn from(filters: Filters) -> Self {
        Self {
            id: filters.id,
            crawler: filters.crawler_id.map(|id| CrawlerRefDto { id }),
        }
    }
}

impl From<FiltersDto> for Filters {
    fn from(dto: FiltersDto) -> Self {
        Self {
            id: dto.id,
            crawler_id: dto.crawler.map(|crawler| crawler.id),
        }
    }
}
