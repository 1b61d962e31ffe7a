// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 过滤器实体
///
/// 通过外键 `crawler_id` 单向引用所属的爬虫，不持有反向集合。
/// 引用可以为空；引用存在时必须指向已存在的爬虫，由存储层的外键约束保证。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filters {
    /// 唯一标识符，未持久化时为空
    pub id: Option<i64>,
    /// 所属爬虫的ID
    pub crawler_id: Option<i64>,
}

impl Filters {
    pub fn new(crawler_id: Option<i64>) -> Self {
        Self {
            id: None,
            crawler_id,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl PartialEq for Filters {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}
