//! News entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::News;

/// Database row mapping for the news table.
#[derive(Debug, Clone, FromRow)]
pub struct NewsEntity {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub slug: String,
    pub image: Option<String>,
    pub excerpt: String,
    pub excerpt_si: String,
    pub content: String,
    pub content_si: String,
    pub published_at: DateTime<Utc>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NewsEntity> for News {
    fn from(entity: NewsEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            title_si: entity.title_si,
            slug: entity.slug,
            image: entity.image,
            excerpt: entity.excerpt,
            excerpt_si: entity.excerpt_si,
            content: entity.content,
            content_si: entity.content_si,
            published_at: entity.published_at,
            is_featured: entity.is_featured,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_entity_to_domain() {
        let now = Utc::now();
        let entity = NewsEntity {
            id: 5,
            title: "Sports meet".to_string(),
            title_si: String::new(),
            slug: "sports-meet".to_string(),
            image: None,
            excerpt: String::new(),
            excerpt_si: String::new(),
            content: "Results".to_string(),
            content_si: String::new(),
            published_at: now,
            is_featured: true,
            created_at: now,
            updated_at: now,
        };

        let news: News = entity.clone().into();
        assert_eq!(news.id, entity.id);
        assert_eq!(news.slug, entity.slug);
        assert!(news.is_featured);
        assert!(news.image.is_none());
    }
}
