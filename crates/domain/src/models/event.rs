//! Calendar event domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An upcoming or past event. Listed by `start_date`.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub description: String,
    pub description_si: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating an event.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub description_si: String,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,
}

/// Request payload for updating an event (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: Option<String>,

    pub description: Option<String>,

    pub description_si: Option<String>,

    pub start_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub end_date: Option<Option<NaiveDate>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_start_date() {
        let result: Result<CreateEventRequest, _> =
            serde_json::from_value(serde_json::json!({"title": "Poson"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_parses_dates() {
        let req: CreateEventRequest = serde_json::from_value(serde_json::json!({
            "title": "Poson",
            "start_date": "2025-06-10",
            "end_date": "2025-06-12"
        }))
        .unwrap();
        assert_eq!(req.start_date, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        assert!(req.validate().is_ok());
    }
}
