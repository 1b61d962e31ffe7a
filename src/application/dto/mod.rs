// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 请求与响应的 JSON 形态，以及它们和领域模型之间的转换
pub mod crawler_dto;
pub mod filters_dto;
pub mod patch;

pub use crawler_dto::{CrawlerDto, CrawlerPatchDto, CrawlerRefDto};
pub use filters_dto::{FiltersDto, FiltersPatchDto};
pub use patch::Patch;
