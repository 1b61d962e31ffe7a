// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 包含各个API端点的具体处理逻辑
/// 每个处理器对仓库类型泛型，仓库通过 `Extension` 注入
pub mod crawler_handler;
pub mod filters_handler;
