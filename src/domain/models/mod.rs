// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 爬虫（crawler）：名称、抓取策略和来源组成的爬虫配置
/// - 过滤器（filters）：通过外键引用爬虫的过滤器记录
pub mod crawler;
pub mod filters;
