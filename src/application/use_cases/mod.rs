// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 每个实体一个写用例（创建、更新、部分更新、删除）和一个条件查询用例
pub mod crawler_query_service;
pub mod crawler_service;
pub mod filters_query_service;
pub mod filters_service;
pub mod service_error;

pub use service_error::ServiceError;
