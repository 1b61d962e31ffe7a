// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 定义数据库表对应的实体结构
/// 使用SeaORM框架进行对象关系映射
/// 包含 crawler 与 filters 两张表，filters 通过可空外键引用 crawler
pub mod crawler;
pub mod filters;
