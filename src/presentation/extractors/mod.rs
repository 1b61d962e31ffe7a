// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// 提供从HTTP请求中提取数据的工具
/// 用于解析请求体和查询参数，失败时返回统一的错误响应
pub mod json;
pub mod query_pairs;

pub use json::AppJson;
pub use query_pairs::QueryPairs;
