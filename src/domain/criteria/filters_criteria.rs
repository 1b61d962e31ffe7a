// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::condition::{FieldFilter, Operator, RangeFilter};
use super::{Criteria, CriteriaError};

/// 过滤器查询条件
///
/// `crawlerId` 是关系字段：条件作用于被引用爬虫的 `id`，而不是本表的列。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FiltersCriteria {
    pub id: Option<RangeFilter<i64>>,
    pub crawler_id: Option<RangeFilter<i64>>,
    pub distinct: Option<bool>,
}

impl FiltersCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self) -> &mut RangeFilter<i64> {
        self.id.get_or_insert_with(FieldFilter::default)
    }

    pub fn crawler_id(&mut self) -> &mut RangeFilter<i64> {
        self.crawler_id.get_or_insert_with(FieldFilter::default)
    }
}

impl Criteria for FiltersCriteria {
    const FIELDS: &'static [&'static str] = &["id", "crawlerId"];

    fn bind(&mut self, field: &str, operator: Operator, raw: &str) -> Result<(), CriteriaError> {
        match field {
            "id" => FieldFilter::bind(&mut self.id, field, operator, raw),
            "crawlerId" => FieldFilter::bind(&mut self.crawler_id, field, operator, raw),
            _ => Ok(()),
        }
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }
}
