use crate::utils::error::SignupError;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Signup(#[from] SignupError),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Unknown activity and membership conflicts share one status code.
            ApiError::Signup(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Signup(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found: ApiError = SignupError::ActivityNotFound {
            name: "Knitting".to_string(),
        }
        .into();
        assert_eq!(not_found.status(), StatusCode::BAD_REQUEST);

        let duplicate: ApiError = SignupError::AlreadyRegistered {
            activity: "Chess Club".to_string(),
            email: "a@x.edu".to_string(),
        }
        .into();
        assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

        let config: ApiError = SignupError::ConfigError {
            message: "broken".to_string(),
        }
        .into();
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_carries_status() {
        let response = ApiError::from(SignupError::NotRegistered {
            activity: "Chess Club".to_string(),
            email: "noone@example.com".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
