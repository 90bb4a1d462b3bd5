//! Stat entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Stat;

#[derive(Debug, Clone, FromRow)]
pub struct StatEntity {
    pub id: i64,
    pub label: String,
    pub label_si: String,
    pub value: String,
    pub value_si: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StatEntity> for Stat {
    fn from(entity: StatEntity) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
            label_si: entity.label_si,
            value: entity.value,
            value_si: entity.value_si,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
