//! API error responses and error codes

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard API error codes
pub mod error_codes {
    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const MALFORMED_BODY: i32 = 1002;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const DEPENDENCY_UNAVAILABLE: i32 = 5001;
}

/// Error body: `{code, msg}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = 1002)]
    pub code: i32,
    #[schema(example = "expected value at line 1 column 1")]
    pub msg: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

/// Handler result: status + JSON payload, or an [`ApiError`]
pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl ToString) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_PARAMETER,
            msg.to_string(),
        )
    }

    pub fn malformed_body(msg: impl ToString) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::MALFORMED_BODY,
            msg.to_string(),
        )
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    pub fn into_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code,
            msg: self.msg,
        };
        (self.status, Json(body)).into_response()
    }
}

pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_status_and_code() {
        let err = ApiError::malformed_body("EOF while parsing");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::MALFORMED_BODY);
        assert_eq!(err.msg, "EOF while parsing");
    }

    #[test]
    fn test_into_response_keeps_status() {
        let resp = ApiError::internal("boom").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
