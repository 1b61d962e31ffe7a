// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use super::headers::failure_alert;
use crate::application::use_cases::ServiceError;
use crate::domain::criteria::CriteriaError;
use crate::domain::repositories::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 响应体为 `{"error", "entityName", "errorKey"}`，同时写入错误提示头
#[derive(Debug)]
pub struct AppError(anyhow::Error);

struct ErrorKind {
    status: StatusCode,
    entity: Option<&'static str>,
    key: &'static str,
}

impl ErrorKind {
    fn new(status: StatusCode, entity: Option<&'static str>, key: &'static str) -> Self {
        Self {
            status,
            entity,
            key,
        }
    }
}

fn repository_kind(err: &RepositoryError, entity: Option<&'static str>) -> ErrorKind {
    match err {
        RepositoryError::NotFound => ErrorKind::new(StatusCode::NOT_FOUND, entity, "notfound"),
        RepositoryError::ConstraintViolation(_) => {
            ErrorKind::new(StatusCode::BAD_REQUEST, entity, "constraint")
        }
        RepositoryError::InvalidSort(_) => {
            ErrorKind::new(StatusCode::BAD_REQUEST, entity, "invalidsort")
        }
        RepositoryError::Database(_) => {
            ErrorKind::new(StatusCode::INTERNAL_SERVER_ERROR, entity, "internal")
        }
    }
}

impl AppError {
    fn kind(&self) -> ErrorKind {
        if let Some(err) = self.0.downcast_ref::<ServiceError>() {
            return match err {
                ServiceError::Validation(_) => {
                    ErrorKind::new(StatusCode::BAD_REQUEST, None, "validation")
                }
                ServiceError::BadRequest { entity, key, .. } => {
                    ErrorKind::new(StatusCode::BAD_REQUEST, Some(*entity), *key)
                }
                ServiceError::NotFound(entity) => {
                    ErrorKind::new(StatusCode::NOT_FOUND, Some(*entity), "notfound")
                }
                ServiceError::Repository(err) => repository_kind(err, None),
            };
        }
        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return repository_kind(err, None);
        }
        if self.0.downcast_ref::<CriteriaError>().is_some() {
            return ErrorKind::new(StatusCode::BAD_REQUEST, None, "invalidcriteria");
        }
        if self.0.downcast_ref::<JsonRejection>().is_some()
            || self.0.downcast_ref::<serde_urlencoded::de::Error>().is_some()
        {
            return ErrorKind::new(StatusCode::BAD_REQUEST, None, "badrequest");
        }
        ErrorKind::new(StatusCode::INTERNAL_SERVER_ERROR, None, "internal")
    }

    pub fn status(&self) -> StatusCode {
        self.kind().status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let error_message = self.0.to_string();

        if kind.status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({
            "error": error_message,
            "entityName": kind.entity,
            "errorKey": kind.key,
        }));
        (kind.status, failure_alert(kind.entity, kind.key), body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
