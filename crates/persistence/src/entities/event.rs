//! Event entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use domain::models::Event;

#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
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

impl From<EventEntity> for Event {
    fn from(entity: EventEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            title_si: entity.title_si,
            description: entity.description,
            description_si: entity.description_si,
            start_date: entity.start_date,
            end_date: entity.end_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
