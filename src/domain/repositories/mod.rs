// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 爬虫仓库（crawler_repository）：管理爬虫配置的持久化和条件查询
/// - 过滤器仓库（filters_repository）：管理过滤器的持久化和条件查询
pub mod crawler_repository;
pub mod error;
pub mod filters_repository;

pub use error::RepositoryError;
