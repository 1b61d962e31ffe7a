// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use super::CriteriaError;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// 单个排序项，例如 `sort=name,desc`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }

    /// 解析一个 `sort` 参数
    ///
    /// 支持 `prop`、`prop,asc`、`prop,desc` 以及 `a,b,desc`（方向作用于前面所有属性）。
    pub fn parse_param(raw: &str) -> Result<Vec<Self>, CriteriaError> {
        let mut parts: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let direction = match parts.last().map(|p| p.to_ascii_lowercase()) {
            Some(last) if last == "asc" => {
                parts.pop();
                Direction::Asc
            }
            Some(last) if last == "desc" => {
                parts.pop();
                Direction::Desc
            }
            _ => Direction::Asc,
        };

        if parts.is_empty() {
            return Err(CriteriaError::invalid_parameter("sort", raw));
        }

        Ok(parts
            .into_iter()
            .map(|property| SortOrder {
                property: property.to_string(),
                direction,
            })
            .collect())
    }
}

/// 分页请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 页码，从 0 开始
    pub page: u64,
    /// 每页大小，至少为 1
    pub size: u64,
    /// 排序项，为空时按 `id` 升序
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: Vec::new(),
        }
    }

    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort.push(order);
        self
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// 从查询参数中提取分页请求
    ///
    /// 只有出现 `page`、`size` 或 `sort` 之一时才视为分页请求。
    ///
    /// # 参数
    ///
    /// * `pairs` - 解码后的查询参数键值对
    /// * `default_size` - 未给出 `size` 时的页大小
    /// * `max_size` - 页大小上限，超出时截断
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(PageRequest))` - 请求了分页
    /// * `Ok(None)` - 未请求分页
    /// * `Err(CriteriaError)` - 分页参数无效
    pub fn from_query_pairs<'a, I>(
        pairs: I,
        default_size: u64,
        max_size: u64,
    ) -> Result<Option<Self>, CriteriaError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut requested = false;
        let mut page = 0;
        let mut size = default_size;
        let mut sort = Vec::new();

        for (key, raw) in pairs {
            match key {
                "page" => {
                    page = raw
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| CriteriaError::invalid_parameter(key, raw))?;
                    requested = true;
                }
                "size" => {
                    size = raw
                        .trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|s| *s > 0)
                        .ok_or_else(|| CriteriaError::invalid_parameter(key, raw))?;
                    requested = true;
                }
                "sort" => {
                    sort.extend(SortOrder::parse_param(raw)?);
                    requested = true;
                }
                _ => {}
            }
        }

        if !requested {
            return Ok(None);
        }

        // 偏移量最终以有符号 64 位整数绑定到查询
        let size = size.clamp(1, max_size.max(1));
        let offset_fits = page
            .checked_mul(size)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !offset_fits {
            return Err(CriteriaError::invalid_parameter("page", &page.to_string()));
        }

        Ok(Some(Self { page, size, sort }))
    }
}

/// 一页查询结果及总数信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// 当前页码，从 0 开始
    pub number: u64,
    pub size: u64,
    /// 匹配条件的记录总数
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.size)
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
