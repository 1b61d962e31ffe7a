// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::condition::{FieldFilter, Operator, RangeFilter, StringFilter};
use super::{Criteria, CriteriaError};

/// 爬虫查询条件
///
/// 例如 `/api/crawlers?fetch.greaterThan=0&name.contains=news&source.specified=true`。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlerCriteria {
    pub id: Option<RangeFilter<i64>>,
    pub name: Option<StringFilter>,
    pub fetch: Option<RangeFilter<i32>>,
    pub source: Option<StringFilter>,
    pub distinct: Option<bool>,
}

impl CrawlerCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回 `id` 过滤器，不存在时创建
    pub fn id(&mut self) -> &mut RangeFilter<i64> {
        self.id.get_or_insert_with(FieldFilter::default)
    }

    pub fn name(&mut self) -> &mut StringFilter {
        self.name.get_or_insert_with(FieldFilter::default)
    }

    pub fn fetch(&mut self) -> &mut RangeFilter<i32> {
        self.fetch.get_or_insert_with(FieldFilter::default)
    }

    pub fn source(&mut self) -> &mut StringFilter {
        self.source.get_or_insert_with(FieldFilter::default)
    }
}

impl Criteria for CrawlerCriteria {
    const FIELDS: &'static [&'static str] = &["id", "name", "fetch", "source"];

    fn bind(&mut self, field: &str, operator: Operator, raw: &str) -> Result<(), CriteriaError> {
        match field {
            "id" => FieldFilter::bind(&mut self.id, field, operator, raw),
            "name" => FieldFilter::bind(&mut self.name, field, operator, raw),
            "fetch" => FieldFilter::bind(&mut self.fetch, field, operator, raw),
            "source" => FieldFilter::bind(&mut self.source, field, operator, raw),
            _ => Ok(()),
        }
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }
}
