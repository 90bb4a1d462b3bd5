//! Event and stat repositories.

use sqlx::PgPool;

use domain::models::event::{CreateEventRequest, UpdateEventRequest};
use domain::models::stat::{CreateStatRequest, UpdateStatRequest};

use crate::entities::{EventEntity, StatEntity};
use crate::metrics::QueryTimer;

/// Repository for event database operations.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<EventEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_events");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_events");
        let result = sqlx::query_as::<_, EventEntity>(
            "SELECT * FROM events ORDER BY start_date, id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok((result?, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_event_by_id");
        let result = sqlx::query_as::<_, EventEntity>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn create(&self, request: &CreateEventRequest) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_event");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            INSERT INTO events (title, title_si, description, description_si, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(request.start_date)
        .bind(request.end_date)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateEventRequest,
    ) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_event");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            UPDATE events SET
                title = COALESCE($2, title),
                title_si = COALESCE($3, title_si),
                description = COALESCE($4, description),
                description_si = COALESCE($5, description_si),
                start_date = COALESCE($6, start_date),
                end_date = CASE WHEN $7::boolean THEN $8 ELSE end_date END,
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
        .bind(request.start_date)
        .bind(request.end_date.is_some())
        .bind(request.end_date.flatten())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_event");
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

/// Repository for the home page counters.
#[derive(Clone)]
pub struct StatRepository {
    pool: PgPool,
}

impl StatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<StatEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_stats");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stats")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_stats");
        let result = sqlx::query_as::<_, StatEntity>(
            "SELECT * FROM stats ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok((result?, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<StatEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_stat_by_id");
        let result = sqlx::query_as::<_, StatEntity>("SELECT * FROM stats WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn create(&self, request: &CreateStatRequest) -> Result<StatEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_stat");
        let result = sqlx::query_as::<_, StatEntity>(
            r#"
            INSERT INTO stats (label, label_si, value, value_si)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&request.label)
        .bind(&request.label_si)
        .bind(&request.value)
        .bind(&request.value_si)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateStatRequest,
    ) -> Result<Option<StatEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_stat");
        let result = sqlx::query_as::<_, StatEntity>(
            r#"
            UPDATE stats SET
                label = COALESCE($2, label),
                label_si = COALESCE($3, label_si),
                value = COALESCE($4, value),
                value_si = COALESCE($5, value_si),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.label)
        .bind(&request.label_si)
        .bind(&request.value)
        .bind(&request.value_si)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_stat");
        let result = sqlx::query("DELETE FROM stats WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
