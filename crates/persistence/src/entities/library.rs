//! Library category, entry and image entities.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use domain::models::library::CategorySummary;
use domain::models::{BookImage, LibraryCategory, LibraryEntry};

/// Database row mapping for the library_categories table, with the number
/// of linked entries.
#[derive(Debug, Clone, FromRow)]
pub struct LibraryCategoryEntity {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub slug: String,
    pub description: String,
    pub description_si: String,
    pub position: i32,
    pub publications_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LibraryCategoryEntity> for LibraryCategory {
    fn from(entity: LibraryCategoryEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            name_si: entity.name_si,
            slug: entity.slug,
            description: entity.description,
            description_si: entity.description_si,
            position: entity.position,
            publications_count: entity.publications_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for library_entries joined with its category.
#[derive(Debug, Clone, FromRow)]
pub struct LibraryEntryEntity {
    pub id: i64,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub category_name_si: Option<String>,
    pub category_slug: Option<String>,
    pub title: String,
    pub title_si: String,
    pub subtitle: String,
    pub subtitle_si: String,
    pub authors: String,
    pub authors_si: String,
    pub year: Option<i32>,
    pub description: String,
    pub description_si: String,
    pub cover: Option<String>,
    pub pdf_file: Option<String>,
    pub external_url: String,
    pub published_at: Option<NaiveDate>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LibraryEntryEntity> for LibraryEntry {
    fn from(entity: LibraryEntryEntity) -> Self {
        let category = match (entity.category_id, entity.category_name, entity.category_slug) {
            (Some(id), Some(name), Some(slug)) => Some(CategorySummary {
                id,
                name,
                name_si: entity.category_name_si.unwrap_or_default(),
                slug,
            }),
            _ => None,
        };

        Self {
            id: entity.id,
            category,
            title: entity.title,
            title_si: entity.title_si,
            subtitle: entity.subtitle,
            subtitle_si: entity.subtitle_si,
            authors: entity.authors,
            authors_si: entity.authors_si,
            year: entity.year,
            description: entity.description,
            description_si: entity.description_si,
            cover: entity.cover,
            pdf_file: entity.pdf_file,
            external_url: entity.external_url,
            published_at: entity.published_at,
            is_active: entity.is_active,
            is_featured: entity.is_featured,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the library_entry_images table.
#[derive(Debug, Clone, FromRow)]
pub struct BookImageEntity {
    pub id: i64,
    pub entry_id: i64,
    pub image: String,
    pub caption: String,
    pub caption_si: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookImageEntity> for BookImage {
    fn from(entity: BookImageEntity) -> Self {
        Self {
            id: entity.id,
            entry_id: entity.entry_id,
            image: entity.image,
            caption: entity.caption,
            caption_si: entity.caption_si,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry_entity() -> LibraryEntryEntity {
        let now = Utc::now();
        LibraryEntryEntity {
            id: 1,
            category_id: Some(3),
            category_name: Some("Pali Texts".to_string()),
            category_name_si: Some(String::new()),
            category_slug: Some("pali-texts".to_string()),
            title: "Dhammapada".to_string(),
            title_si: String::new(),
            subtitle: String::new(),
            subtitle_si: String::new(),
            authors: String::new(),
            authors_si: String::new(),
            year: Some(2020),
            description: String::new(),
            description_si: String::new(),
            cover: None,
            pdf_file: None,
            external_url: "https://example.org/dhammapada.pdf".to_string(),
            published_at: NaiveDate::from_ymd_opt(2020, 5, 1),
            is_active: true,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_entry_entity_embeds_category() {
        let entry: LibraryEntry = create_test_entry_entity().into();
        let category = entry.category.unwrap();
        assert_eq!(category.id, 3);
        assert_eq!(category.slug, "pali-texts");
    }

    #[test]
    fn test_entry_entity_without_category() {
        let mut entity = create_test_entry_entity();
        entity.category_id = None;
        entity.category_name = None;
        entity.category_name_si = None;
        entity.category_slug = None;

        let entry: LibraryEntry = entity.into();
        assert!(entry.category.is_none());
    }
}
