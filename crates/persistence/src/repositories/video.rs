//! Video repository for database operations.

use sqlx::PgPool;

use domain::models::video::{CreateVideoRequest, UpdateVideoRequest};

use crate::entities::VideoEntity;
use crate::metrics::QueryTimer;

/// Repository for video database operations.
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<VideoEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_videos");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_videos");
        let result = sqlx::query_as::<_, VideoEntity>(
            r#"
            SELECT * FROM videos
            ORDER BY published_at DESC, id DESC
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

    pub async fn find_by_id(&self, id: i64) -> Result<Option<VideoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_video_by_id");
        let result = sqlx::query_as::<_, VideoEntity>("SELECT * FROM videos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn create(&self, request: &CreateVideoRequest) -> Result<VideoEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_video");
        let result = sqlx::query_as::<_, VideoEntity>(
            r#"
            INSERT INTO videos (title, title_si, url, file, thumbnail, description,
                                description_si, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW()))
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.url)
        .bind(&request.file)
        .bind(&request.thumbnail)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(request.published_at)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateVideoRequest,
    ) -> Result<Option<VideoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_video");
        let result = sqlx::query_as::<_, VideoEntity>(
            r#"
            UPDATE videos SET
                title = COALESCE($2, title),
                title_si = COALESCE($3, title_si),
                url = COALESCE($4, url),
                file = CASE WHEN $5::boolean THEN $6 ELSE file END,
                thumbnail = CASE WHEN $7::boolean THEN $8 ELSE thumbnail END,
                description = COALESCE($9, description),
                description_si = COALESCE($10, description_si),
                published_at = COALESCE($11, published_at),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.url)
        .bind(request.file.is_some())
        .bind(request.file.clone().flatten())
        .bind(request.thumbnail.is_some())
        .bind(request.thumbnail.clone().flatten())
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(request.published_at)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_video");
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
