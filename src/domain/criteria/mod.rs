// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 查询条件模块
///
/// 将请求中的 `field.operator=value` 参数绑定为强类型的查询条件：
/// - 条件（condition）：操作符与各字段类型可用的条件枚举
/// - 爬虫条件（crawler_criteria）：`id`、`name`、`fetch`、`source`
/// - 过滤器条件（filters_criteria）：`id`、`crawlerId`
/// - 分页（page）：分页请求、排序和分页结果
///
/// 条件本身不访问存储，只描述“哪些记录应当匹配”，
/// 由基础设施层翻译为具体的查询。
pub mod condition;
pub mod crawler_criteria;
pub mod filters_criteria;
pub mod page;

use std::fmt::Debug;

use thiserror::Error;

pub use condition::{
    FieldFilter, Operator, RangeCondition, RangeFilter, StringCondition, StringFilter,
};
pub use crawler_criteria::CrawlerCriteria;
pub use filters_criteria::FiltersCriteria;
pub use page::{Direction, Page, PageRequest, SortOrder};

/// 查询条件解析错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CriteriaError {
    /// 无法识别的操作符
    #[error("invalid filter: unknown operator '{operator}' on field '{field}'")]
    UnknownOperator { field: String, operator: String },
    /// 操作符不适用于该字段类型
    #[error("invalid filter: operator '{operator}' is not supported on field '{field}'")]
    UnsupportedOperator { field: String, operator: String },
    /// 操作数无法解析
    #[error("invalid filter: cannot parse '{value}' for {field}.{operator}")]
    InvalidValue {
        field: String,
        operator: String,
        value: String,
    },
    /// 分页或其他普通参数无效
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter { name: String, value: String },
}

impl CriteriaError {
    pub(crate) fn invalid_value(field: &str, operator: Operator, value: &str) -> Self {
        CriteriaError::InvalidValue {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_parameter(name: &str, value: &str) -> Self {
        CriteriaError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// 实体查询条件
///
/// 每个实现列出自身可过滤的字段，并把单个参数绑定到对应的字段槽位。
/// 未出现的字段不产生任何约束。
pub trait Criteria: Default + Debug + Send + Sync {
    /// 可过滤的字段名（请求参数中的写法）
    const FIELDS: &'static [&'static str];

    /// 将一个已识别字段上的条件绑定到自身
    fn bind(&mut self, field: &str, operator: Operator, raw: &str) -> Result<(), CriteriaError>;

    /// 设置结果去重标志
    fn set_distinct(&mut self, distinct: bool);

    /// 从查询参数构造条件
    ///
    /// 不属于本实体的参数（如 `page`、`size`、`sort`）被忽略；
    /// 已识别字段上的未知操作符或无法解析的值会立即返回错误。
    ///
    /// # 参数
    ///
    /// * `pairs` - 解码后的查询参数键值对
    ///
    /// # 返回值
    ///
    /// * `Ok(Self)` - 绑定完成的查询条件
    /// * `Err(CriteriaError)` - 参数无效
    fn from_query_pairs<'a, I>(pairs: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = Self::default();

        for (key, raw) in pairs {
            if key == "distinct" {
                let distinct = condition::parse_bool(key, Operator::Equals, raw)
                    .map_err(|_| CriteriaError::invalid_parameter(key, raw))?;
                criteria.set_distinct(distinct);
                continue;
            }

            let Some((field, operator)) = key.split_once('.') else {
                continue;
            };
            if !Self::FIELDS.contains(&field) {
                continue;
            }

            let operator =
                operator
                    .parse::<Operator>()
                    .map_err(|_| CriteriaError::UnknownOperator {
                        field: field.to_string(),
                        operator: operator.to_string(),
                    })?;
            criteria.bind(field, operator, raw)?;
        }

        Ok(criteria)
    }
}
