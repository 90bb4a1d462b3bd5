//! External link and footer link repositories.

use sqlx::PgPool;

use domain::models::link::{CreateLinkRequest, UpdateLinkRequest};

use crate::entities::{ExternalLinkEntity, FooterLinkEntity};
use crate::metrics::QueryTimer;

/// Repository for external link database operations.
#[derive(Clone)]
pub struct ExternalLinkRepository {
    pool: PgPool,
}

impl ExternalLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ExternalLinkEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_external_links");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM external_links")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_external_links");
        let result = sqlx::query_as::<_, ExternalLinkEntity>(
            "SELECT * FROM external_links ORDER BY position, name, id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok((result?, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ExternalLinkEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_external_link_by_id");
        let result =
            sqlx::query_as::<_, ExternalLinkEntity>("SELECT * FROM external_links WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await;
        timer.record();
        result
    }

    /// Insert a link. `is_active` is ignored; external links are always shown.
    pub async fn create(&self, request: &CreateLinkRequest) -> Result<ExternalLinkEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_external_link");
        let result = sqlx::query_as::<_, ExternalLinkEntity>(
            r#"
            INSERT INTO external_links (name, name_si, url, position)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.name_si)
        .bind(&request.url)
        .bind(request.position)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateLinkRequest,
    ) -> Result<Option<ExternalLinkEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_external_link");
        let result = sqlx::query_as::<_, ExternalLinkEntity>(
            r#"
            UPDATE external_links SET
                name = COALESCE($2, name),
                name_si = COALESCE($3, name_si),
                url = COALESCE($4, url),
                position = COALESCE($5, position),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.name_si)
        .bind(&request.url)
        .bind(request.position)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_external_link");
        let result = sqlx::query("DELETE FROM external_links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

/// Repository for footer link database operations.
///
/// Reads take an `active_only` flag; writes reach every row.
#[derive(Clone)]
pub struct FooterLinkRepository {
    pool: PgPool,
}

impl FooterLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<FooterLinkEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_footer_links");
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM footer_links WHERE ($1 = false OR is_active = true)",
        )
        .bind(active_only)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        let timer = QueryTimer::new("list_footer_links");
        let result = sqlx::query_as::<_, FooterLinkEntity>(
            r#"
            SELECT * FROM footer_links
            WHERE ($1 = false OR is_active = true)
            ORDER BY position, name, id
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
    ) -> Result<Option<FooterLinkEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_footer_link_by_id");
        let result = sqlx::query_as::<_, FooterLinkEntity>(
            "SELECT * FROM footer_links WHERE id = $1 AND ($2 = false OR is_active = true)",
        )
        .bind(id)
        .bind(active_only)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(&self, request: &CreateLinkRequest) -> Result<FooterLinkEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_footer_link");
        let result = sqlx::query_as::<_, FooterLinkEntity>(
            r#"
            INSERT INTO footer_links (name, name_si, url, position, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.name_si)
        .bind(&request.url)
        .bind(request.position)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateLinkRequest,
    ) -> Result<Option<FooterLinkEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_footer_link");
        let result = sqlx::query_as::<_, FooterLinkEntity>(
            r#"
            UPDATE footer_links SET
                name = COALESCE($2, name),
                name_si = COALESCE($3, name_si),
                url = COALESCE($4, url),
                position = COALESCE($5, position),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.name_si)
        .bind(&request.url)
        .bind(request.position)
        .bind(request.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_footer_link");
        let result = sqlx::query("DELETE FROM footer_links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
