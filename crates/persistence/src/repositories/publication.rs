//! Publication and download category repositories.

use sqlx::PgPool;

use domain::models::publication::{
    CreateDownloadCategoryRequest, CreatePublicationRequest, UpdateDownloadCategoryRequest,
    UpdatePublicationRequest,
};

use crate::entities::{DownloadCategoryEntity, PublicationEntity};
use crate::metrics::QueryTimer;

/// Repository for publication database operations.
#[derive(Clone)]
pub struct PublicationRepository {
    pool: PgPool,
}

impl PublicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List one page of publications, newest first.
    ///
    /// With `active_only` inactive publications are hidden.
    pub async fn list(
        &self,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<PublicationEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_publications");
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM publications WHERE ($1 = false OR is_active = true)",
        )
        .bind(active_only)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        let timer = QueryTimer::new("list_publications");
        let result = sqlx::query_as::<_, PublicationEntity>(
            r#"
            SELECT * FROM publications
            WHERE ($1 = false OR is_active = true)
            ORDER BY published_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(active_only)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok((result?, total))
    }

    pub async fn find_by_id(
        &self,
        id: i64,
        active_only: bool,
    ) -> Result<Option<PublicationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_publication_by_id");
        let result = sqlx::query_as::<_, PublicationEntity>(
            "SELECT * FROM publications WHERE id = $1 AND ($2 = false OR is_active = true)",
        )
        .bind(id)
        .bind(active_only)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Active publications of the given categories, newest first.
    pub async fn list_active_for_categories(
        &self,
        category_ids: &[i64],
    ) -> Result<Vec<PublicationEntity>, sqlx::Error> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }
        let timer = QueryTimer::new("list_publications_for_categories");
        let result = sqlx::query_as::<_, PublicationEntity>(
            r#"
            SELECT * FROM publications
            WHERE category_id = ANY($1) AND is_active = true
            ORDER BY published_at DESC, created_at DESC, id DESC
            "#,
        )
        .bind(category_ids)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        request: &CreatePublicationRequest,
    ) -> Result<PublicationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_publication");
        let result = sqlx::query_as::<_, PublicationEntity>(
            r#"
            INSERT INTO publications (title, title_si, description, description_si, file,
                                      external_url, cover, published_at, is_active,
                                      department, department_si, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW()), $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(&request.file)
        .bind(&request.external_url)
        .bind(&request.cover)
        .bind(request.published_at)
        .bind(request.is_active)
        .bind(&request.department)
        .bind(&request.department_si)
        .bind(request.category)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a publication (partial update). Reaches inactive rows too.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdatePublicationRequest,
    ) -> Result<Option<PublicationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_publication");
        let result = sqlx::query_as::<_, PublicationEntity>(
            r#"
            UPDATE publications SET
                title = COALESCE($2, title),
                title_si = COALESCE($3, title_si),
                description = COALESCE($4, description),
                description_si = COALESCE($5, description_si),
                file = CASE WHEN $6::boolean THEN $7 ELSE file END,
                external_url = COALESCE($8, external_url),
                cover = CASE WHEN $9::boolean THEN $10 ELSE cover END,
                published_at = COALESCE($11, published_at),
                is_active = COALESCE($12, is_active),
                department = COALESCE($13, department),
                department_si = COALESCE($14, department_si),
                category_id = CASE WHEN $15::boolean THEN $16 ELSE category_id END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(request.file.is_some())
        .bind(request.file.clone().flatten())
        .bind(&request.external_url)
        .bind(request.cover.is_some())
        .bind(request.cover.clone().flatten())
        .bind(request.published_at)
        .bind(request.is_active)
        .bind(&request.department)
        .bind(&request.department_si)
        .bind(request.category.is_some())
        .bind(request.category.flatten())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_publication");
        let result = sqlx::query("DELETE FROM publications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

/// Repository for download category database operations.
#[derive(Clone)]
pub struct DownloadCategoryRepository {
    pool: PgPool,
}

impl DownloadCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<DownloadCategoryEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_download_categories");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM download_categories")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_download_categories");
        let result = sqlx::query_as::<_, DownloadCategoryEntity>(
            r#"
            SELECT * FROM download_categories
            ORDER BY position, name, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok((result?, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<DownloadCategoryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_download_category_by_id");
        let result = sqlx::query_as::<_, DownloadCategoryEntity>(
            "SELECT * FROM download_categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        request: &CreateDownloadCategoryRequest,
    ) -> Result<DownloadCategoryEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_download_category");
        let result = sqlx::query_as::<_, DownloadCategoryEntity>(
            r#"
            INSERT INTO download_categories (name, name_si, description, description_si, position)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.name_si)
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
        request: &UpdateDownloadCategoryRequest,
    ) -> Result<Option<DownloadCategoryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_download_category");
        let result = sqlx::query_as::<_, DownloadCategoryEntity>(
            r#"
            UPDATE download_categories SET
                name = COALESCE($2, name),
                name_si = COALESCE($3, name_si),
                description = COALESCE($4, description),
                description_si = COALESCE($5, description_si),
                position = COALESCE($6, position),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.name_si)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(request.position)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a category. Its publications are kept with no category.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_download_category");
        let result = sqlx::query("DELETE FROM download_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
