//! News repository for database operations.

use sqlx::PgPool;

use domain::models::news::{CreateNewsRequest, UpdateNewsRequest};

use crate::entities::NewsEntity;
use crate::metrics::QueryTimer;

/// Repository for news-related database operations.
#[derive(Clone)]
pub struct NewsRepository {
    pool: PgPool,
}

impl NewsRepository {
    /// Creates a new NewsRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List one page of news, newest first. Returns the page and the total count.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<NewsEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_news");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_news");
        let result = sqlx::query_as::<_, NewsEntity>(
            r#"
            SELECT * FROM news
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

    /// Featured news in default order, at most `limit` items.
    pub async fn list_featured(&self, limit: i64) -> Result<Vec<NewsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_featured_news");
        let result = sqlx::query_as::<_, NewsEntity>(
            r#"
            SELECT * FROM news
            WHERE is_featured = true
            ORDER BY published_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a news item by slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<NewsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_news_by_slug");
        let result = sqlx::query_as::<_, NewsEntity>("SELECT * FROM news WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Find a news item by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<NewsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_news_by_id");
        let result = sqlx::query_as::<_, NewsEntity>("SELECT * FROM news WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Create a news item with an already resolved slug.
    pub async fn create(
        &self,
        request: &CreateNewsRequest,
        slug: &str,
    ) -> Result<NewsEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_news");
        let result = sqlx::query_as::<_, NewsEntity>(
            r#"
            INSERT INTO news (title, title_si, slug, image, excerpt, excerpt_si,
                              content, content_si, published_at, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, NOW()), $10)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(slug)
        .bind(&request.image)
        .bind(&request.excerpt)
        .bind(&request.excerpt_si)
        .bind(&request.content)
        .bind(&request.content_si)
        .bind(request.published_at)
        .bind(request.is_featured)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a news item (partial update).
    /// Only provided fields are updated; an explicit null clears `image`.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateNewsRequest,
        slug: Option<&str>,
    ) -> Result<Option<NewsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_news");
        let result = sqlx::query_as::<_, NewsEntity>(
            r#"
            UPDATE news SET
                title = COALESCE($2, title),
                title_si = COALESCE($3, title_si),
                slug = COALESCE($4, slug),
                image = CASE WHEN $5::boolean THEN $6 ELSE image END,
                excerpt = COALESCE($7, excerpt),
                excerpt_si = COALESCE($8, excerpt_si),
                content = COALESCE($9, content),
                content_si = COALESCE($10, content_si),
                published_at = COALESCE($11, published_at),
                is_featured = COALESCE($12, is_featured),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(slug)
        .bind(request.image.is_some())
        .bind(request.image.clone().flatten())
        .bind(&request.excerpt)
        .bind(&request.excerpt_si)
        .bind(&request.content)
        .bind(&request.content_si)
        .bind(request.published_at)
        .bind(request.is_featured)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a news item and its gallery images.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_news");
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
