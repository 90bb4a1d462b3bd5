//! Headline statistic shown on the home page ("120 Pirivenas").

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub id: i64,
    pub label: String,
    pub label_si: String,
    pub value: String,
    pub value_si: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStatRequest {
    #[validate(length(min = 1, max = 100, message = "Label must be 1-100 characters"))]
    pub label: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Label must be at most 100 characters"))]
    pub label_si: String,

    #[validate(length(min = 1, max = 50, message = "Value must be 1-50 characters"))]
    pub value: String,

    #[serde(default)]
    #[validate(length(max = 50, message = "Value must be at most 50 characters"))]
    pub value_si: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStatRequest {
    #[validate(length(min = 1, max = 100, message = "Label must be 1-100 characters"))]
    pub label: Option<String>,

    #[validate(length(max = 100, message = "Label must be at most 100 characters"))]
    pub label_si: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Value must be 1-50 characters"))]
    pub value: Option<String>,

    #[validate(length(max = 50, message = "Value must be at most 50 characters"))]
    pub value_si: Option<String>,
}
