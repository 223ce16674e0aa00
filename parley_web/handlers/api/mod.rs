pub mod configs;
pub mod profile;
pub mod transcripts;
pub mod voice_records;

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use parley_types::{
    common::User,
    errors::{AppError, ApplicationError, DbError},
    pagination::PageRequest,
};

use crate::{
    handlers::{SessionError, session_user},
    http::AppState,
};

/// Errors of the JSON API, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    /// Maps an application error, logging the unexpected ones. `failure` is
    /// the message shown when the error is not the client's fault.
    pub fn from_app(err: ApplicationError, failure: &str) -> Self {
        match err {
            ApplicationError::App(AppError::MissingField(field)) => {
                ApiError::BadRequest(t!("api.errors.missing_field", field = field).to_string())
            }
            ApplicationError::Db(DbError::InterviewConfigNotFound(_)) => {
                ApiError::NotFound(t!("api.errors.config_not_found").to_string())
            }
            ApplicationError::Db(DbError::VoiceRecordNotFound(_)) => {
                ApiError::NotFound(t!("api.errors.record_not_found").to_string())
            }
            ApplicationError::Db(DbError::TranscriptNotFound(_)) => {
                ApiError::NotFound(t!("api.errors.transcript_not_found").to_string())
            }
            e => {
                tracing::error!("{}: {}", failure, e);
                ApiError::Internal(failure.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                t!("api.errors.unauthorized").to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The logged in user of an API request. Requests without a valid session
/// get a 401 instead of a redirect.
pub struct ApiUser(pub User);

impl FromRequestParts<AppState> for ApiUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match session_user(parts, state).await {
            Ok(user) => Ok(ApiUser(user)),
            Err(SessionError::Anonymous(_)) => Err(ApiError::Unauthorized),
            Err(SessionError::Failed(e)) => {
                Err(ApiError::from_app(e, "Failed to load the session user"))
            }
        }
    }
}

/// `?page=&per_page=` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageParams {
    pub fn to_request(&self, default_per_page: u32) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(default_per_page),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(MessageResponse {
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_page_params_defaults() {
        let params = PageParams::default();
        let req = params.to_request(10);
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 10);

        let params = PageParams {
            page: Some(0),
            per_page: Some(500),
        };
        let req = params.to_request(10);
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 100);
    }

    #[test]
    fn test_api_error_mapping() {
        let err = ApiError::from_app(AppError::MissingField("name").into(), "boom");
        assert!(matches!(err, ApiError::BadRequest(msg) if msg == "name is required"));

        let err = ApiError::from_app(DbError::TranscriptNotFound(Uuid::new_v4()).into(), "boom");
        assert!(matches!(err, ApiError::NotFound(_)));

        let err = ApiError::from_app(ApplicationError::Unknown("x".to_string()), "boom");
        assert!(matches!(err, ApiError::Internal(msg) if msg == "boom"));
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("gone".to_string()).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
