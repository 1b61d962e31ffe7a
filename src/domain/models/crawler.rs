// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 爬虫配置实体
///
/// 描述一个爬虫的名称、抓取策略和来源。`id` 在创建时由存储层分配，
/// 之后不再改变；实体的相等性只由 `id` 决定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crawler {
    /// 唯一标识符，未持久化时为空
    pub id: Option<i64>,
    /// 爬虫名称，不能为空
    pub name: String,
    /// 抓取深度或模式，取值不小于 -1
    pub fetch: i32,
    /// 来源标识，不能为空
    pub source: String,
}

impl Crawler {
    /// 创建一个尚未持久化的爬虫配置
    pub fn new(name: impl Into<String>, fetch: i32, source: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            fetch,
            source: source.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// 两个没有 `id` 的实体互不相等，即使是同一个值
impl PartialEq for Crawler {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}
