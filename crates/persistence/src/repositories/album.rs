//! Album and gallery image repositories.

use sqlx::PgPool;

use domain::models::album::{
    AlbumFilter, CreateAlbumRequest, CreateGalleryImageRequest, GalleryFilter, UpdateAlbumRequest,
    UpdateGalleryImageRequest,
};

use crate::entities::{AlbumEntity, GalleryImageEntity};
use crate::metrics::QueryTimer;

const ALBUM_DEFAULT_ORDER: &str = "position, published_at DESC NULLS LAST, created_at DESC";
const GALLERY_DEFAULT_ORDER: &str = "position, created_at";

const ALBUM_FILTER: &str = r#"
    WHERE ($1::boolean IS NULL OR is_active = $1)
      AND ($2::text IS NULL OR slug = $2)
      AND ($3::text IS NULL OR title ILIKE $3 OR description ILIKE $3)
"#;

/// Repository for album database operations.
#[derive(Clone)]
pub struct AlbumRepository {
    pool: PgPool,
}

impl AlbumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List one page of albums matching `filter`.
    pub async fn list(
        &self,
        filter: &AlbumFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<AlbumEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_albums");
        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM albums {ALBUM_FILTER}"))
            .bind(filter.is_active)
            .bind(&filter.slug)
            .bind(&filter.search)
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let order = filter
            .ordering
            .map(|o| o.to_sql())
            .unwrap_or_else(|| ALBUM_DEFAULT_ORDER.to_string());
        let sql = format!(
            "SELECT * FROM albums {ALBUM_FILTER} ORDER BY {order}, id LIMIT $4 OFFSET $5"
        );

        let timer = QueryTimer::new("list_albums");
        let result = sqlx::query_as::<_, AlbumEntity>(&sql)
            .bind(filter.is_active)
            .bind(&filter.slug)
            .bind(&filter.search)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        Ok((result?, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<AlbumEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_album_by_id");
        let result = sqlx::query_as::<_, AlbumEntity>("SELECT * FROM albums WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        request: &CreateAlbumRequest,
        slug: &str,
    ) -> Result<AlbumEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_album");
        let result = sqlx::query_as::<_, AlbumEntity>(
            r#"
            INSERT INTO albums (title, title_si, slug, description, description_si, cover,
                                is_active, position, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(slug)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(&request.cover)
        .bind(request.is_active)
        .bind(request.position)
        .bind(request.published_at)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update an album (partial update). `slug` is the already resolved new
    /// slug, if any.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateAlbumRequest,
        slug: Option<&str>,
    ) -> Result<Option<AlbumEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_album");
        let result = sqlx::query_as::<_, AlbumEntity>(
            r#"
            UPDATE albums SET
                title = COALESCE($2, title),
                title_si = COALESCE($3, title_si),
                slug = COALESCE($4, slug),
                description = COALESCE($5, description),
                description_si = COALESCE($6, description_si),
                cover = CASE WHEN $7::boolean THEN $8 ELSE cover END,
                is_active = COALESCE($9, is_active),
                position = COALESCE($10, position),
                published_at = CASE WHEN $11::boolean THEN $12 ELSE published_at END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(slug)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(request.cover.is_some())
        .bind(request.cover.clone().flatten())
        .bind(request.is_active)
        .bind(request.position)
        .bind(request.published_at.is_some())
        .bind(request.published_at.flatten())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an album together with its gallery images.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_album");
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

/// Repository for gallery image database operations.
#[derive(Clone)]
pub struct GalleryImageRepository {
    pool: PgPool,
}

impl GalleryImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        filter: &GalleryFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<GalleryImageEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_gallery_images");
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM gallery_images WHERE ($1::bigint IS NULL OR album_id = $1)",
        )
        .bind(filter.album_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        let order = filter
            .ordering
            .map(|o| o.to_sql())
            .unwrap_or_else(|| GALLERY_DEFAULT_ORDER.to_string());
        let sql = format!(
            r#"
            SELECT * FROM gallery_images
            WHERE ($1::bigint IS NULL OR album_id = $1)
            ORDER BY {order}, id
            LIMIT $2 OFFSET $3
            "#
        );

        let timer = QueryTimer::new("list_gallery_images");
        let result = sqlx::query_as::<_, GalleryImageEntity>(&sql)
            .bind(filter.album_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        Ok((result?, total))
    }

    /// Images of several albums in display order, for embedding.
    pub async fn list_for_albums(
        &self,
        album_ids: &[i64],
    ) -> Result<Vec<GalleryImageEntity>, sqlx::Error> {
        if album_ids.is_empty() {
            return Ok(Vec::new());
        }
        let timer = QueryTimer::new("list_gallery_images_for_albums");
        let result = sqlx::query_as::<_, GalleryImageEntity>(
            r#"
            SELECT * FROM gallery_images
            WHERE album_id = ANY($1)
            ORDER BY position, created_at, id
            "#,
        )
        .bind(album_ids)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<GalleryImageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_gallery_image_by_id");
        let result =
            sqlx::query_as::<_, GalleryImageEntity>("SELECT * FROM gallery_images WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        request: &CreateGalleryImageRequest,
    ) -> Result<GalleryImageEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_gallery_image");
        let result = sqlx::query_as::<_, GalleryImageEntity>(
            r#"
            INSERT INTO gallery_images (album_id, image, caption, caption_si, position)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(request.album)
        .bind(&request.image)
        .bind(&request.caption)
        .bind(&request.caption_si)
        .bind(request.position)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateGalleryImageRequest,
    ) -> Result<Option<GalleryImageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_gallery_image");
        let result = sqlx::query_as::<_, GalleryImageEntity>(
            r#"
            UPDATE gallery_images SET
                album_id = COALESCE($2, album_id),
                image = COALESCE($3, image),
                caption = COALESCE($4, caption),
                caption_si = COALESCE($5, caption_si),
                position = COALESCE($6, position),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.album)
        .bind(&request.image)
        .bind(&request.caption)
        .bind(&request.caption_si)
        .bind(request.position)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_gallery_image");
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
