// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::header::IntoHeaderName;
use axum::http::{HeaderMap, HeaderValue};

/// 操作结果提示
pub const ALERT_HEADER: &str = "x-crawlcfg-alert";
/// 提示或错误涉及的参数，通常是实体ID或实体名
pub const PARAMS_HEADER: &str = "x-crawlcfg-params";
/// 错误键，例如 `error.idexists`
pub const ERROR_HEADER: &str = "x-crawlcfg-error";

fn alert(message: String, param: String) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, ALERT_HEADER, message);
    insert(&mut headers, PARAMS_HEADER, param);
    headers
}

pub fn entity_creation_alert(entity: &str, id: &str) -> HeaderMap {
    alert(
        format!("A new {} is created with identifier {}", entity, id),
        id.to_string(),
    )
}

pub fn entity_update_alert(entity: &str, id: &str) -> HeaderMap {
    alert(
        format!("A {} is updated with identifier {}", entity, id),
        id.to_string(),
    )
}

pub fn entity_deletion_alert(entity: &str, id: &str) -> HeaderMap {
    alert(
        format!("A {} is deleted with identifier {}", entity, id),
        id.to_string(),
    )
}

pub fn failure_alert(entity: Option<&str>, error_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, ERROR_HEADER, format!("error.{}", error_key));
    if let Some(entity) = entity {
        insert(&mut headers, PARAMS_HEADER, entity.to_string());
    }
    headers
}

// Values that are not valid header text are dropped
pub(crate) fn insert<K: IntoHeaderName>(headers: &mut HeaderMap, name: K, value: String) {
    if let Ok(value) = HeaderValue::from_str(&value) {
        headers.insert(name, value);
    }
}
