// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::str::FromStr;

use super::CriteriaError;

/// 查询参数中可用的操作符
///
/// 以 `field.operator=value` 的形式出现在请求中，例如 `fetch.greaterThan=3`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equals,
    NotEquals,
    In,
    NotIn,
    Specified,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Contains,
    DoesNotContain,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "notEquals",
            Operator::In => "in",
            Operator::NotIn => "notIn",
            Operator::Specified => "specified",
            Operator::GreaterThan => "greaterThan",
            Operator::GreaterThanOrEqual => "greaterThanOrEqual",
            Operator::LessThan => "lessThan",
            Operator::LessThanOrEqual => "lessThanOrEqual",
            Operator::Contains => "contains",
            Operator::DoesNotContain => "doesNotContain",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(Operator::Equals),
            "notEquals" => Ok(Operator::NotEquals),
            "in" => Ok(Operator::In),
            "notIn" => Ok(Operator::NotIn),
            "specified" => Ok(Operator::Specified),
            "greaterThan" => Ok(Operator::GreaterThan),
            "greaterThanOrEqual" => Ok(Operator::GreaterThanOrEqual),
            "lessThan" => Ok(Operator::LessThan),
            "lessThanOrEqual" => Ok(Operator::LessThanOrEqual),
            "contains" => Ok(Operator::Contains),
            "doesNotContain" => Ok(Operator::DoesNotContain),
            _ => Err(()),
        }
    }
}

/// 从查询参数解析出的单个过滤条件
pub trait ParseCondition: Sized {
    /// 按操作符解析原始字符串
    ///
    /// # 参数
    ///
    /// * `field` - 字段名，仅用于错误信息
    /// * `operator` - 操作符
    /// * `raw` - 查询参数中的原始值
    ///
    /// # 返回值
    ///
    /// * `Ok(Self)` - 解析成功
    /// * `Err(CriteriaError)` - 操作符不适用于该字段类型或值无法解析
    fn parse(field: &str, operator: Operator, raw: &str) -> Result<Self, CriteriaError>;
}

/// 有序字段（数值、ID）的过滤条件
#[derive(Debug, Clone, PartialEq)]
pub enum RangeCondition<T> {
    Equals(T),
    NotEquals(T),
    In(Vec<T>),
    NotIn(Vec<T>),
    Specified(bool),
    GreaterThan(T),
    GreaterThanOrEqual(T),
    LessThan(T),
    LessThanOrEqual(T),
}

impl<T: FromStr> ParseCondition for RangeCondition<T> {
    fn parse(field: &str, operator: Operator, raw: &str) -> Result<Self, CriteriaError> {
        let value = |raw: &str| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| CriteriaError::invalid_value(field, operator, raw))
        };
        let values = |raw: &str| raw.split(',').map(value).collect::<Result<Vec<_>, _>>();

        Ok(match operator {
            Operator::Equals => RangeCondition::Equals(value(raw)?),
            Operator::NotEquals => RangeCondition::NotEquals(value(raw)?),
            Operator::In => RangeCondition::In(values(raw)?),
            Operator::NotIn => RangeCondition::NotIn(values(raw)?),
            Operator::Specified => RangeCondition::Specified(parse_bool(field, operator, raw)?),
            Operator::GreaterThan => RangeCondition::GreaterThan(value(raw)?),
            Operator::GreaterThanOrEqual => RangeCondition::GreaterThanOrEqual(value(raw)?),
            Operator::LessThan => RangeCondition::LessThan(value(raw)?),
            Operator::LessThanOrEqual => RangeCondition::LessThanOrEqual(value(raw)?),
            Operator::Contains | Operator::DoesNotContain => {
                return Err(CriteriaError::UnsupportedOperator {
                    field: field.to_string(),
                    operator: operator.to_string(),
                })
            }
        })
    }
}

/// 文本字段的过滤条件
///
/// 子串匹配的大小写敏感性由存储层的排序规则决定。
#[derive(Debug, Clone, PartialEq)]
pub enum StringCondition {
    Equals(String),
    NotEquals(String),
    In(Vec<String>),
    NotIn(Vec<String>),
    Specified(bool),
    Contains(String),
    DoesNotContain(String),
}

impl ParseCondition for StringCondition {
    fn parse(field: &str, operator: Operator, raw: &str) -> Result<Self, CriteriaError> {
        let values = || raw.split(',').map(str::to_string).collect::<Vec<_>>();

        Ok(match operator {
            Operator::Equals => StringCondition::Equals(raw.to_string()),
            Operator::NotEquals => StringCondition::NotEquals(raw.to_string()),
            Operator::In => StringCondition::In(values()),
            Operator::NotIn => StringCondition::NotIn(values()),
            Operator::Specified => StringCondition::Specified(parse_bool(field, operator, raw)?),
            Operator::Contains => StringCondition::Contains(raw.to_string()),
            Operator::DoesNotContain => StringCondition::DoesNotContain(raw.to_string()),
            Operator::GreaterThan
            | Operator::GreaterThanOrEqual
            | Operator::LessThan
            | Operator::LessThanOrEqual => {
                return Err(CriteriaError::UnsupportedOperator {
                    field: field.to_string(),
                    operator: operator.to_string(),
                })
            }
        })
    }
}

/// 单个字段上的全部过滤条件，条件之间为逻辑与
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter<C> {
    conditions: Vec<C>,
}

/// 有序字段的过滤器
pub type RangeFilter<T> = FieldFilter<RangeCondition<T>>;

/// 文本字段的过滤器
pub type StringFilter = FieldFilter<StringCondition>;

impl<C> Default for FieldFilter<C> {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }
}

impl<C> FieldFilter<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加条件并返回自身，便于链式构造
    pub fn with(mut self, condition: C) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn push(&mut self, condition: C) -> &mut Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(&self) -> &[C] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl<C: ParseCondition> FieldFilter<C> {
    /// 解析一个条件并绑定到字段槽位上，槽位为空时先创建过滤器
    pub(crate) fn bind(
        slot: &mut Option<Self>,
        field: &str,
        operator: Operator,
        raw: &str,
    ) -> Result<(), CriteriaError> {
        let condition = C::parse(field, operator, raw)?;
        slot.get_or_insert_with(Self::default).push(condition);
        Ok(())
    }
}

pub(crate) fn parse_bool(field: &str, operator: Operator, raw: &str) -> Result<bool, CriteriaError> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(CriteriaError::invalid_value(field, operator, raw)),
    }
}
