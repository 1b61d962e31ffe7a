// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::{HeaderMap, Uri};

use super::headers::insert;
use crate::domain::criteria::Page;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// 生成分页响应头
///
/// `X-Total-Count` 为匹配总数；`Link` 按 RFC 5988 给出 `next`、`prev`、`last`、`first`
/// 四个链接，链接保留原请求中除 `page`、`size` 以外的全部参数
pub fn pagination_headers<T>(uri: &Uri, page: &Page<T>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(
        &mut headers,
        TOTAL_COUNT_HEADER,
        page.total_elements.to_string(),
    );

    let last_page = page.total_pages().saturating_sub(1);
    let mut links = Vec::new();
    if page.has_next() {
        links.push(link(uri, page.number + 1, page.size, "next"));
    }
    if page.has_previous() {
        links.push(link(uri, page.number - 1, page.size, "prev"));
    }
    links.push(link(uri, last_page, page.size, "last"));
    links.push(link(uri, 0, page.size, "first"));

    insert(&mut headers, "link", links.join(","));
    headers
}

fn link(uri: &Uri, page: u64, size: u64, rel: &str) -> String {
    let mut params: Vec<(String, String)> = uri
        .query()
        .and_then(|query| serde_urlencoded::from_str::<Vec<(String, String)>>(query).ok())
        .unwrap_or_default()
        .into_iter()
        .filter(|(key, _)| key != "page" && key != "size")
        .collect();
    params.push(("page".to_string(), page.to_string()));
    params.push(("size".to_string(), size.to_string()));

    let query = serde_urlencoded::to_string(&params).unwrap_or_default();
    format!("<{}?{}>; rel=\"{}\"", uri.path(), query, rel)
}
