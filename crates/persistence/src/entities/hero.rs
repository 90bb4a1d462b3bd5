//! Hero slide and hero intro entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::{HeroIntro, HeroSlide};

/// Database row mapping for the hero_slides table.
#[derive(Debug, Clone, FromRow)]
pub struct HeroSlideEntity {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub subtitle: String,
    pub subtitle_si: String,
    pub image: String,
    pub button_label: String,
    pub button_label_si: String,
    pub button_url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HeroSlideEntity> for HeroSlide {
    fn from(entity: HeroSlideEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            title_si: entity.title_si,
            subtitle: entity.subtitle,
            subtitle_si: entity.subtitle_si,
            image: entity.image,
            button_label: entity.button_label,
            button_label_si: entity.button_label_si,
            button_url: entity.button_url,
            position: entity.position,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the hero_intros table.
#[derive(Debug, Clone, FromRow)]
pub struct HeroIntroEntity {
    pub id: i64,
    pub heading: String,
    pub heading_si: String,
    pub highlight: String,
    pub highlight_si: String,
    pub description: String,
    pub description_si: String,
    pub primary_label: String,
    pub primary_label_si: String,
    pub primary_url: String,
    pub secondary_label: String,
    pub secondary_label_si: String,
    pub secondary_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HeroIntroEntity> for HeroIntro {
    fn from(entity: HeroIntroEntity) -> Self {
        Self {
            id: entity.id,
            heading: entity.heading,
            heading_si: entity.heading_si,
            highlight: entity.highlight,
            highlight_si: entity.highlight_si,
            description: entity.description,
            description_si: entity.description_si,
            primary_label: entity.primary_label,
            primary_label_si: entity.primary_label_si,
            primary_url: entity.primary_url,
            secondary_label: entity.secondary_label,
            secondary_label_si: entity.secondary_label_si,
            secondary_url: entity.secondary_url,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
