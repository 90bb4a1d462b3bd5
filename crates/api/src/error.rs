use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::models::library::BOOK_SOURCE_REQUIRED;
use domain::models::video::VIDEO_SOURCE_REQUIRED;
use domain::services::MediaStoreError;
use domain::DomainError;
use serde::Serialize;
use shared::pagination::PaginationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Validation failure carrying per-field messages.
    #[error("Validation error: {message}")]
    InvalidFields {
        message: String,
        details: Vec<ValidationDetail>,
    },

    #[error("Rate limited")]
    RateLimited,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl ApiError {
    /// Not-found error for a resource looked up by key.
    pub fn not_found(resource: &str) -> Self {
        ApiError::NotFound(format!("{} not found", resource))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg, None)
            }
            ApiError::InvalidFields { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                Some(details),
            ),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                "Too many requests. Please try again later.".into(),
                None,
            ),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                    None,
                )
            }
            ApiError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                msg,
                None,
            ),
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Conflict message for a unique constraint.
fn unique_violation_message(constraint: Option<&str>) -> String {
    let constraint = constraint.unwrap_or_default();
    let what = if constraint.ends_with("slug_unique") {
        "slug"
    } else if constraint.ends_with("email_unique") {
        "email"
    } else if constraint.ends_with("name_unique") {
        "name"
    } else if constraint.ends_with("key_unique") {
        "key"
    } else {
        return "Resource already exists".into();
    };
    format!("A record with this {} already exists", what)
}

/// Validation message for a CHECK constraint.
fn check_violation_message(constraint: Option<&str>) -> String {
    match constraint.unwrap_or_default() {
        "videos_source_present" => VIDEO_SOURCE_REQUIRED.into(),
        "library_entries_source_present" => BOOK_SOURCE_REQUIRED.into(),
        c if c.ends_with("slug_not_empty") => "Slug must not be empty".into(),
        _ => "Value violates a data constraint".into(),
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".into()),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => ApiError::Conflict(unique_violation_message(db_err.constraint())),
                Some("23503") => {
                    ApiError::Validation("Referenced record does not exist".into())
                }
                Some("23514") => {
                    ApiError::Validation(check_violation_message(db_err.constraint()))
                }
                _ => ApiError::Internal(format!("Database error: {}", db_err)),
            },
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<ValidationDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| ValidationDetail {
                    field: field.to_string(),
                    message: e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field));

        let message = if details.len() == 1 {
            details[0].message.clone()
        } else {
            format!("{} validation errors", details.len())
        };

        ApiError::InvalidFields { message, details }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        ApiError::NotFound(err.to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Validation(format!("Invalid multipart body: {}", err.body_text()))
    }
}

impl From<MediaStoreError> for ApiError {
    fn from(err: MediaStoreError) -> Self {
        match err {
            MediaStoreError::InvalidFileName(_) => ApiError::Validation(err.to_string()),
            MediaStoreError::Io(_) => ApiError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use validator::Validate;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_api_error_not_found() {
        let response = ApiError::not_found("News").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_conflict() {
        let error = ApiError::Conflict("already exists".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_api_error_validation() {
        let error = ApiError::Validation("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_rate_limited() {
        let response = ApiError::RateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("database connection failed".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_internal_error_body_is_generic() {
        let response = ApiError::Internal("password=secret".into()).into_response();
        let json = body_json(response).await;
        assert_eq!(json["error"], "internal_error");
        assert_eq!(json["message"], "An internal error occurred");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            format!("{}", ApiError::NotFound("test".to_string())),
            "Not found: test"
        );
        assert_eq!(
            format!("{}", ApiError::Conflict("test".to_string())),
            "Conflict: test"
        );
        assert_eq!(
            format!("{}", ApiError::Validation("test".to_string())),
            "Validation error: test"
        );
        assert_eq!(format!("{}", ApiError::RateLimited), "Rate limited");
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        match error {
            ApiError::NotFound(msg) => assert_eq!(msg, "Resource not found"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_unique_violation_messages() {
        assert_eq!(
            unique_violation_message(Some("news_slug_unique")),
            "A record with this slug already exists"
        );
        assert_eq!(
            unique_violation_message(Some("newsletter_subscriptions_email_unique")),
            "A record with this email already exists"
        );
        assert_eq!(
            unique_violation_message(Some("site_text_snippets_key_unique")),
            "A record with this key already exists"
        );
        assert_eq!(unique_violation_message(None), "Resource already exists");
    }

    #[test]
    fn test_check_violation_messages() {
        assert_eq!(
            check_violation_message(Some("videos_source_present")),
            VIDEO_SOURCE_REQUIRED
        );
        assert_eq!(
            check_violation_message(Some("library_entries_source_present")),
            BOOK_SOURCE_REQUIRED
        );
    }

    #[test]
    fn test_pagination_error_is_not_found() {
        let error: ApiError = PaginationError::InvalidPage.into();
        match error {
            ApiError::NotFound(msg) => assert_eq!(msg, "Invalid page."),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_domain_error_is_validation() {
        let error: ApiError = DomainError::invalid_query("year", "must be a whole number").into();
        assert!(matches!(error, ApiError::Validation(_)));
    }

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Enter a valid email address"))]
        email: String,
    }

    #[tokio::test]
    async fn test_validation_errors_carry_details() {
        let errors = Probe {
            email: "nope".into(),
        }
        .validate()
        .unwrap_err();
        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "validation_error");
        assert_eq!(json["message"], "Enter a valid email address");
        assert_eq!(json["details"][0]["field"], "email");
    }
}
