//! JSON body extractor that runs `validator` rules.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// A JSON body that deserialized and passed its field validation.
///
/// Malformed JSON is reported as a validation error rather than axum's
/// plain-text rejection.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait::async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    fn request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let ValidJson(probe) = ValidJson::<Probe>::from_request(request(r#"{"name":"x"}"#), &())
            .await
            .unwrap();
        assert_eq!(probe.name, "x");
    }

    #[tokio::test]
    async fn test_rule_violation_rejected() {
        let err = ValidJson::<Probe>::from_request(request(r#"{"name":""}"#), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidFields { .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let err = ValidJson::<Probe>::from_request(request("{"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
