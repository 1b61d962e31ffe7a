// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::repositories::RepositoryError;
use thiserror::Error;

/// 用例层错误
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),
    /// 标识符相关的请求错误，`key` 如 `idexists`、`idnull`、`idinvalid`
    #[error("{message}")]
    BadRequest {
        entity: &'static str,
        key: &'static str,
        message: String,
    },
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn bad_request(entity: &'static str, key: &'static str, message: impl Into<String>) -> Self {
        ServiceError::BadRequest {
            entity,
            key,
            message: message.into(),
        }
    }
}

/// 检查更新请求中的 `id`
///
/// 请求体必须携带 `id`，且与路径中的 `id` 一致
pub(crate) fn ensure_matching_id(
    entity: &'static str,
    path_id: i64,
    body_id: Option<i64>,
) -> Result<(), ServiceError> {
    match body_id {
        None => Err(ServiceError::bad_request(entity, "idnull", "Invalid id")),
        Some(id) if id != path_id => Err(ServiceError::bad_request(entity, "idinvalid", "Invalid ID")),
        Some(_) => Ok(()),
    }
}
