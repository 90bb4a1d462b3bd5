//! Notice repository for database operations.

use sqlx::PgPool;

use domain::models::notice::{CreateNoticeRequest, UpdateNoticeRequest};

use crate::entities::NoticeEntity;
use crate::metrics::QueryTimer;

/// Repository for notice-related database operations.
#[derive(Clone)]
pub struct NoticeRepository {
    pool: PgPool,
}

impl NoticeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List one page of notices: newest first, then by priority.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<NoticeEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_notices");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notices")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_notices");
        let result = sqlx::query_as::<_, NoticeEntity>(
            r#"
            SELECT * FROM notices
            ORDER BY published_at DESC, priority DESC, id DESC
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

    pub async fn find_by_id(&self, id: i64) -> Result<Option<NoticeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_notice_by_id");
        let result = sqlx::query_as::<_, NoticeEntity>("SELECT * FROM notices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn create(&self, request: &CreateNoticeRequest) -> Result<NoticeEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_notice");
        let result = sqlx::query_as::<_, NoticeEntity>(
            r#"
            INSERT INTO notices (title, title_si, content, content_si, image,
                                 published_at, expires_at, priority)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()), $7, $8)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.content)
        .bind(&request.content_si)
        .bind(&request.image)
        .bind(request.published_at)
        .bind(request.expires_at)
        .bind(request.priority)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a notice (partial update).
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateNoticeRequest,
    ) -> Result<Option<NoticeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_notice");
        let result = sqlx::query_as::<_, NoticeEntity>(
            r#"
            UPDATE notices SET
                title = COALESCE($2, title),
                title_si = COALESCE($3, title_si),
                content = COALESCE($4, content),
                content_si = COALESCE($5, content_si),
                image = CASE WHEN $6::boolean THEN $7 ELSE image END,
                published_at = COALESCE($8, published_at),
                expires_at = CASE WHEN $9::boolean THEN $10 ELSE expires_at END,
                priority = COALESCE($11, priority),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.content)
        .bind(&request.content_si)
        .bind(request.image.is_some())
        .bind(request.image.clone().flatten())
        .bind(request.published_at)
        .bind(request.expires_at.is_some())
        .bind(request.expires_at.flatten())
        .bind(request.priority)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_notice");
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
