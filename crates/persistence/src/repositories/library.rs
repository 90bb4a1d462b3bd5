//! Library category, entry and entry image repositories.

use sqlx::PgPool;

use domain::models::library::{
    BookFilter, CreateBookImageRequest, CreateLibraryCategoryRequest, CreateLibraryEntryRequest,
    UpdateLibraryCategoryRequest, UpdateLibraryEntryRequest,
};
use domain::services::CategoryRef;

use crate::entities::{BookImageEntity, LibraryCategoryEntity, LibraryEntryEntity};
use crate::metrics::QueryTimer;

/// Category columns plus the number of linked entries.
const CATEGORY_COLUMNS: &str = r#"
    c.*,
    (SELECT COUNT(*) FROM library_entries e WHERE e.category_id = c.id) AS publications_count
"#;

/// Entries joined with their category. Wrapped in a CTE so filters and
/// ORDER BY can use bare column names.
const ENTRY_ROWS: &str = r#"
    WITH entries AS (
        SELECT e.*, c.name AS category_name, c.name_si AS category_name_si,
               c.slug AS category_slug
        FROM library_entries e
        LEFT JOIN library_categories c ON c.id = e.category_id
    )
"#;

const ENTRY_FILTER: &str = r#"
    WHERE ($1 = false OR is_active = true)
      AND ($2::boolean IS NULL OR is_featured = $2)
      AND ($3::bigint IS NULL OR category_id = $3)
      AND ($4::text IS NULL OR category_slug = $4)
      AND ($5::bigint IS NULL OR year = $5)
      AND ($6::text IS NULL OR title ILIKE $6 OR subtitle ILIKE $6
           OR authors ILIKE $6 OR description ILIKE $6)
"#;

const ENTRY_DEFAULT_ORDER: &str = "published_at DESC NULLS LAST, created_at DESC";

/// Joins a written entry row back to its category.
const WRITTEN_ENTRY: &str = r#"
    SELECT w.*, c.name AS category_name, c.name_si AS category_name_si,
           c.slug AS category_slug
    FROM written w
    LEFT JOIN library_categories c ON c.id = w.category_id
"#;

/// Repository for library category database operations.
#[derive(Clone)]
pub struct LibraryCategoryRepository {
    pool: PgPool,
}

impl LibraryCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List one page of categories. `search` is an ILIKE pattern over name
    /// and description.
    pub async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<LibraryCategoryEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_library_categories");
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM library_categories
            WHERE ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1)
            "#,
        )
        .bind(search)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        let sql = format!(
            r#"
            SELECT {CATEGORY_COLUMNS}
            FROM library_categories c
            WHERE ($1::text IS NULL OR c.name ILIKE $1 OR c.description ILIKE $1)
            ORDER BY c.position, c.name, c.id
            LIMIT $2 OFFSET $3
            "#
        );

        let timer = QueryTimer::new("list_library_categories");
        let result = sqlx::query_as::<_, LibraryCategoryEntity>(&sql)
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        Ok((result?, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<LibraryCategoryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_library_category_by_id");
        let result = sqlx::query_as::<_, LibraryCategoryEntity>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM library_categories c WHERE c.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        request: &CreateLibraryCategoryRequest,
        slug: &str,
    ) -> Result<LibraryCategoryEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_library_category");
        let result = sqlx::query_as::<_, LibraryCategoryEntity>(
            r#"
            INSERT INTO library_categories (name, name_si, slug, description, description_si, position)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *, 0::bigint AS publications_count
            "#,
        )
        .bind(&request.name)
        .bind(&request.name_si)
        .bind(slug)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(request.position)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateLibraryCategoryRequest,
        slug: Option<&str>,
    ) -> Result<Option<LibraryCategoryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_library_category");
        let result = sqlx::query_as::<_, LibraryCategoryEntity>(
            r#"
            UPDATE library_categories c SET
                name = COALESCE($2, name),
                name_si = COALESCE($3, name_si),
                slug = COALESCE($4, slug),
                description = COALESCE($5, description),
                description_si = COALESCE($6, description_si),
                position = COALESCE($7, position),
                updated_at = NOW()
            WHERE c.id = $1
            RETURNING c.*,
                (SELECT COUNT(*) FROM library_entries e WHERE e.category_id = c.id) AS publications_count
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.name_si)
        .bind(slug)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(request.position)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a category. Its entries are kept with no category.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_library_category");
        let result = sqlx::query("DELETE FROM library_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

/// Repository for library entry (book) database operations.
#[derive(Clone)]
pub struct LibraryEntryRepository {
    pool: PgPool,
}

fn category_binds(category: &Option<CategoryRef>) -> (Option<i64>, Option<&str>) {
    match category {
        Some(c) => (c.id(), c.slug()),
        None => (None, None),
    }
}

impl LibraryEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List one page of entries matching `filter`.
    pub async fn list(
        &self,
        filter: &BookFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<LibraryEntryEntity>, i64), sqlx::Error> {
        let (category_id, category_slug) = category_binds(&filter.category);

        let timer = QueryTimer::new("count_library_entries");
        let total: i64 =
            sqlx::query_scalar(&format!("{ENTRY_ROWS} SELECT COUNT(*) FROM entries {ENTRY_FILTER}"))
                .bind(filter.active_only)
                .bind(filter.featured.as_flag())
                .bind(category_id)
                .bind(category_slug)
                .bind(filter.year)
                .bind(&filter.search)
                .fetch_one(&self.pool)
                .await?;
        timer.record();

        let order = filter
            .ordering
            .map(|o| o.to_sql())
            .unwrap_or_else(|| ENTRY_DEFAULT_ORDER.to_string());
        let sql = format!(
            "{ENTRY_ROWS} SELECT * FROM entries {ENTRY_FILTER} ORDER BY {order}, id DESC LIMIT $7 OFFSET $8"
        );

        let timer = QueryTimer::new("list_library_entries");
        let result = sqlx::query_as::<_, LibraryEntryEntity>(&sql)
            .bind(filter.active_only)
            .bind(filter.featured.as_flag())
            .bind(category_id)
            .bind(category_slug)
            .bind(filter.year)
            .bind(&filter.search)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        Ok((result?, total))
    }

    /// The `limit` most recent entries matching `filter`, newest published
    /// first. Any client ordering is ignored.
    pub async fn latest(
        &self,
        filter: &BookFilter,
        limit: i64,
    ) -> Result<Vec<LibraryEntryEntity>, sqlx::Error> {
        let (category_id, category_slug) = category_binds(&filter.category);
        let sql = format!(
            "{ENTRY_ROWS} SELECT * FROM entries {ENTRY_FILTER} ORDER BY {ENTRY_DEFAULT_ORDER}, id DESC LIMIT $7"
        );

        let timer = QueryTimer::new("latest_library_entries");
        let result = sqlx::query_as::<_, LibraryEntryEntity>(&sql)
            .bind(filter.active_only)
            .bind(filter.featured.as_flag())
            .bind(category_id)
            .bind(category_slug)
            .bind(filter.year)
            .bind(&filter.search)
            .bind(limit.max(0))
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(
        &self,
        id: i64,
        active_only: bool,
    ) -> Result<Option<LibraryEntryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_library_entry_by_id");
        let result = sqlx::query_as::<_, LibraryEntryEntity>(&format!(
            "{ENTRY_ROWS} SELECT * FROM entries WHERE id = $1 AND ($2 = false OR is_active = true)"
        ))
        .bind(id)
        .bind(active_only)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        request: &CreateLibraryEntryRequest,
    ) -> Result<LibraryEntryEntity, sqlx::Error> {
        let sql = format!(
            r#"
            WITH written AS (
                INSERT INTO library_entries (category_id, title, title_si, subtitle, subtitle_si,
                                             authors, authors_si, year, description, description_si,
                                             cover, pdf_file, external_url, published_at,
                                             is_active, is_featured)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
                RETURNING *
            )
            {WRITTEN_ENTRY}
            "#
        );

        let timer = QueryTimer::new("create_library_entry");
        let result = sqlx::query_as::<_, LibraryEntryEntity>(&sql)
            .bind(request.category_id)
            .bind(&request.title)
            .bind(&request.title_si)
            .bind(&request.subtitle)
            .bind(&request.subtitle_si)
            .bind(&request.authors)
            .bind(&request.authors_si)
            .bind(request.year)
            .bind(&request.description)
            .bind(&request.description_si)
            .bind(&request.cover)
            .bind(&request.pdf_file)
            .bind(&request.external_url)
            .bind(request.published_at)
            .bind(request.is_active)
            .bind(request.is_featured)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Update an entry (partial update). Reaches inactive rows too.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateLibraryEntryRequest,
    ) -> Result<Option<LibraryEntryEntity>, sqlx::Error> {
        let sql = format!(
            r#"
            WITH written AS (
                UPDATE library_entries SET
                    category_id = CASE WHEN $2::boolean THEN $3 ELSE category_id END,
                    title = COALESCE($4, title),
                    title_si = COALESCE($5, title_si),
                    subtitle = COALESCE($6, subtitle),
                    subtitle_si = COALESCE($7, subtitle_si),
                    authors = COALESCE($8, authors),
                    authors_si = COALESCE($9, authors_si),
                    year = CASE WHEN $10::boolean THEN $11 ELSE year END,
                    description = COALESCE($12, description),
                    description_si = COALESCE($13, description_si),
                    cover = CASE WHEN $14::boolean THEN $15 ELSE cover END,
                    pdf_file = CASE WHEN $16::boolean THEN $17 ELSE pdf_file END,
                    external_url = COALESCE($18, external_url),
                    published_at = CASE WHEN $19::boolean THEN $20 ELSE published_at END,
                    is_active = COALESCE($21, is_active),
                    is_featured = COALESCE($22, is_featured),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
            )
            {WRITTEN_ENTRY}
            "#
        );

        let timer = QueryTimer::new("update_library_entry");
        let result = sqlx::query_as::<_, LibraryEntryEntity>(&sql)
            .bind(id)
            .bind(request.category_id.is_some())
            .bind(request.category_id.flatten())
            .bind(&request.title)
            .bind(&request.title_si)
            .bind(&request.subtitle)
            .bind(&request.subtitle_si)
            .bind(&request.authors)
            .bind(&request.authors_si)
            .bind(request.year.is_some())
            .bind(request.year.flatten())
            .bind(&request.description)
            .bind(&request.description_si)
            .bind(request.cover.is_some())
            .bind(request.cover.clone().flatten())
            .bind(request.pdf_file.is_some())
            .bind(request.pdf_file.clone().flatten())
            .bind(&request.external_url)
            .bind(request.published_at.is_some())
            .bind(request.published_at.flatten())
            .bind(request.is_active)
            .bind(request.is_featured)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_library_entry");
        let result = sqlx::query("DELETE FROM library_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

/// Repository for images attached to library entries.
#[derive(Clone)]
pub struct BookImageRepository {
    pool: PgPool,
}

impl BookImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Images of several entries, oldest first.
    pub async fn list_for_many(
        &self,
        entry_ids: &[i64],
    ) -> Result<Vec<BookImageEntity>, sqlx::Error> {
        if entry_ids.is_empty() {
            return Ok(Vec::new());
        }
        let timer = QueryTimer::new("list_book_images");
        let result = sqlx::query_as::<_, BookImageEntity>(
            r#"
            SELECT * FROM library_entry_images
            WHERE entry_id = ANY($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(entry_ids)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        entry_id: i64,
        request: &CreateBookImageRequest,
    ) -> Result<BookImageEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_book_image");
        let result = sqlx::query_as::<_, BookImageEntity>(
            r#"
            INSERT INTO library_entry_images (entry_id, image, caption, caption_si)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(entry_id)
        .bind(&request.image)
        .bind(&request.caption)
        .bind(&request.caption_si)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an image only if it belongs to `entry_id`.
    pub async fn delete(&self, entry_id: i64, image_id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_book_image");
        let result = sqlx::query("DELETE FROM library_entry_images WHERE id = $1 AND entry_id = $2")
            .bind(image_id)
            .bind(entry_id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_binds() {
        assert_eq!(category_binds(&None), (None, None));
        assert_eq!(category_binds(&Some(CategoryRef::Id(4))), (Some(4), None));
        assert_eq!(
            category_binds(&Some(CategoryRef::Slug("pali".into()))),
            (None, Some("pali"))
        );
    }

    #[test]
    fn test_entry_filter_placeholders_line_up() {
        for n in 1..=6 {
            assert!(ENTRY_FILTER.contains(&format!("${n}")));
        }
        assert!(!ENTRY_FILTER.contains("$7"));
    }
}
