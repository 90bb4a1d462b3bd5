//! External and footer link entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::{ExternalLink, FooterLink};

/// Database row mapping for the external_links table.
#[derive(Debug, Clone, FromRow)]
pub struct ExternalLinkEntity {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ExternalLinkEntity> for ExternalLink {
    fn from(entity: ExternalLinkEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            name_si: entity.name_si,
            url: entity.url,
            position: entity.position,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the footer_links table.
#[derive(Debug, Clone, FromRow)]
pub struct FooterLinkEntity {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub url: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FooterLinkEntity> for FooterLink {
    fn from(entity: FooterLinkEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            name_si: entity.name_si,
            url: entity.url,
            position: entity.position,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
