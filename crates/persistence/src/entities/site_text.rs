//! About section, text snippet and footer about entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::{AboutSection, FooterAbout, SiteTextSnippet};

/// Database row mapping for the about_sections table.
#[derive(Debug, Clone, FromRow)]
pub struct AboutSectionEntity {
    pub id: i64,
    pub slug: String,
    pub nav_label: String,
    pub nav_label_si: String,
    pub title: String,
    pub title_si: String,
    pub body: String,
    pub body_si: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AboutSectionEntity> for AboutSection {
    fn from(entity: AboutSectionEntity) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            nav_label: entity.nav_label,
            nav_label_si: entity.nav_label_si,
            title: entity.title,
            title_si: entity.title_si,
            body: entity.body,
            body_si: entity.body_si,
            position: entity.position,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the site_text_snippets table.
#[derive(Debug, Clone, FromRow)]
pub struct SiteTextSnippetEntity {
    pub id: i64,
    pub key: String,
    pub title: String,
    pub text: String,
    pub text_si: String,
    pub notes: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteTextSnippetEntity> for SiteTextSnippet {
    fn from(entity: SiteTextSnippetEntity) -> Self {
        Self {
            id: entity.id,
            key: entity.key,
            title: entity.title,
            text: entity.text,
            text_si: entity.text_si,
            notes: entity.notes,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the footer_abouts table.
#[derive(Debug, Clone, FromRow)]
pub struct FooterAboutEntity {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub body: String,
    pub body_si: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FooterAboutEntity> for FooterAbout {
    fn from(entity: FooterAboutEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            title_si: entity.title_si,
            body: entity.body,
            body_si: entity.body_si,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
