// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::marker::PhantomData;

use sea_orm::sea_query::{LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationDef, Select,
    Value,
};

use crate::domain::criteria::{RangeCondition, RangeFilter, StringCondition, StringFilter};

/// 可在存储层求值的查询规格
///
/// 由若干以逻辑与组合的条件片段、可选的左连接和去重标志组成。
/// 新建的规格匹配所有记录。
pub struct Specification<E: EntityTrait> {
    condition: Condition,
    distinct: bool,
    joins: Vec<RelationDef>,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Default for Specification<E> {
    fn default() -> Self {
        Self {
            condition: Condition::all(),
            distinct: false,
            joins: Vec::new(),
            _entity: PhantomData,
        }
    }
}

impl<E: EntityTrait> Specification<E> {
    /// 创建匹配所有记录的规格
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置结果去重，只影响结果形态，不影响过滤
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// 以逻辑与追加一个条件片段
    pub fn and(mut self, fragment: Condition) -> Self {
        self.condition = self.condition.add(fragment);
        self
    }

    /// 左连接一个关联表，使后续片段可以引用其列
    pub fn left_join(mut self, relation: RelationDef) -> Self {
        self.joins.push(relation);
        self
    }

    /// 生成可执行的查询
    pub fn into_select(self) -> Select<E> {
        let mut select = E::find();
        for relation in self.joins {
            select = select.join(JoinType::LeftJoin, relation);
        }
        if self.distinct {
            select = select.distinct();
        }
        select.filter(self.condition)
    }
}

/// 将有序字段的过滤器翻译为条件片段
///
/// 否定类条件（`notEquals`、`notIn`）同时匹配空值，
/// 因此 `equals(v)` 与 `notEquals(v)` 恰好划分全部记录。
pub fn range_condition<C, T>(column: C, filter: &RangeFilter<T>) -> Condition
where
    C: ColumnTrait,
    T: Into<Value> + Clone,
{
    filter
        .conditions()
        .iter()
        .fold(Condition::all(), |acc, condition| {
            acc.add(match condition {
                RangeCondition::Equals(v) => Condition::all().add(column.eq(v.clone())),
                RangeCondition::NotEquals(v) => or_null(column, column.ne(v.clone())),
                RangeCondition::In(values) => {
                    Condition::all().add(column.is_in(values.iter().cloned()))
                }
                RangeCondition::NotIn(values) => {
                    or_null(column, column.is_not_in(values.iter().cloned()))
                }
                RangeCondition::Specified(specified) => specified_condition(column, *specified),
                RangeCondition::GreaterThan(v) => Condition::all().add(column.gt(v.clone())),
                RangeCondition::GreaterThanOrEqual(v) => {
                    Condition::all().add(column.gte(v.clone()))
                }
                RangeCondition::LessThan(v) => Condition::all().add(column.lt(v.clone())),
                RangeCondition::LessThanOrEqual(v) => Condition::all().add(column.lte(v.clone())),
            })
        })
}

/// 将文本字段的过滤器翻译为条件片段
///
/// `contains` 与 `doesNotContain` 按字面子串匹配，`%`、`_` 会被转义。
pub fn string_condition<C>(column: C, filter: &StringFilter) -> Condition
where
    C: ColumnTrait,
{
    filter
        .conditions()
        .iter()
        .fold(Condition::all(), |acc, condition| {
            acc.add(match condition {
                StringCondition::Equals(v) => Condition::all().add(column.eq(v.as_str())),
                StringCondition::NotEquals(v) => or_null(column, column.ne(v.as_str())),
                StringCondition::In(values) => {
                    Condition::all().add(column.is_in(values.iter().map(String::as_str)))
                }
                StringCondition::NotIn(values) => or_null(
                    column,
                    column.is_not_in(values.iter().map(String::as_str)),
                ),
                StringCondition::Specified(specified) => specified_condition(column, *specified),
                StringCondition::Contains(v) => Condition::all().add(column.like(substring(v))),
                StringCondition::DoesNotContain(v) => {
                    or_null(column, column.not_like(substring(v)))
                }
            })
        })
}

fn specified_condition<C: ColumnTrait>(column: C, specified: bool) -> Condition {
    if specified {
        Condition::all().add(column.is_not_null())
    } else {
        Condition::all().add(column.is_null())
    }
}

fn or_null<C: ColumnTrait>(column: C, expr: SimpleExpr) -> Condition {
    Condition::any().add(expr).add(column.is_null())
}

fn substring(value: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape('\\')
}
