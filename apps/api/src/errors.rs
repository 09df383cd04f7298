use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Store and upstream failures collapse to a generic 500 body; the detail is
/// logged server-side and never returned to the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// No Authorization header on a protected route.
    #[error("No token provided")]
    Unauthorized,

    /// Bearer token present but malformed, tampered, or expired.
    #[error("Invalid token")]
    InvalidToken,

    /// Login failed. Unknown email and wrong password share this variant so
    /// the response cannot be used for account enumeration.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated but the wrong role for this route.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Email error: {0}")]
    Email(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "No token provided".to_string()),
            AppError::InvalidToken => (StatusCode::FORBIDDEN, "Invalid token".to_string()),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AppError::Email(msg) => {
                tracing::error!("Email error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}

/// True when a store error is the unique-constraint violation raised by a
/// duplicate email at signup.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_400_with_static_message() {
        let response =
            AppError::Validation("Email already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "Email already exists" }));
    }

    #[tokio::test]
    async fn upstream_failures_collapse_to_generic_500() {
        for err in [
            AppError::Llm("model unreachable".to_string()),
            AppError::Email("dispatch refused".to_string()),
            AppError::Internal(anyhow::anyhow!("boom")),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = body_json(response).await;
            assert_eq!(body, json!({ "message": "Server error" }));
        }
    }

    #[tokio::test]
    async fn missing_token_is_401_and_bad_token_is_403() {
        let missing = AppError::Unauthorized.into_response();
        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(missing).await,
            json!({ "message": "No token provided" })
        );

        let invalid = AppError::InvalidToken.into_response();
        assert_eq!(invalid.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(invalid).await, json!({ "message": "Invalid token" }));
    }
}
