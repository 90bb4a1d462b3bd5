//! Hero slide and hero intro repositories.

use sqlx::PgPool;

use domain::models::hero::{
    CreateHeroIntroRequest, CreateHeroSlideRequest, UpdateHeroIntroRequest, UpdateHeroSlideRequest,
};

use crate::entities::{HeroIntroEntity, HeroSlideEntity};
use crate::metrics::QueryTimer;

/// Repository for hero slide database operations.
#[derive(Clone)]
pub struct HeroSlideRepository {
    pool: PgPool,
}

impl HeroSlideRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<HeroSlideEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_hero_slides");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hero_slides")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_hero_slides");
        let result = sqlx::query_as::<_, HeroSlideEntity>(
            "SELECT * FROM hero_slides ORDER BY position, created_at DESC, id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok((result?, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<HeroSlideEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_hero_slide_by_id");
        let result =
            sqlx::query_as::<_, HeroSlideEntity>("SELECT * FROM hero_slides WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        request: &CreateHeroSlideRequest,
    ) -> Result<HeroSlideEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_hero_slide");
        let result = sqlx::query_as::<_, HeroSlideEntity>(
            r#"
            INSERT INTO hero_slides (title, title_si, subtitle, subtitle_si, image, button_label,
                                     button_label_si, button_url, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.subtitle)
        .bind(&request.subtitle_si)
        .bind(&request.image)
        .bind(&request.button_label)
        .bind(&request.button_label_si)
        .bind(&request.button_url)
        .bind(request.position)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateHeroSlideRequest,
    ) -> Result<Option<HeroSlideEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_hero_slide");
        let result = sqlx::query_as::<_, HeroSlideEntity>(
            r#"
            UPDATE hero_slides SET
                title = COALESCE($2, title),
                title_si = COALESCE($3, title_si),
                subtitle = COALESCE($4, subtitle),
                subtitle_si = COALESCE($5, subtitle_si),
                image = COALESCE($6, image),
                button_label = COALESCE($7, button_label),
                button_label_si = COALESCE($8, button_label_si),
                button_url = COALESCE($9, button_url),
                position = COALESCE($10, position),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.subtitle)
        .bind(&request.subtitle_si)
        .bind(&request.image)
        .bind(&request.button_label)
        .bind(&request.button_label_si)
        .bind(&request.button_url)
        .bind(request.position)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_hero_slide");
        let result = sqlx::query("DELETE FROM hero_slides WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

/// Repository for hero intro database operations.
#[derive(Clone)]
pub struct HeroIntroRepository {
    pool: PgPool,
}

impl HeroIntroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Most recently edited first.
    pub async fn list(
        &self,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<HeroIntroEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_hero_intros");
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM hero_intros WHERE ($1 = false OR is_active = true)",
        )
        .bind(active_only)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        let timer = QueryTimer::new("list_hero_intros");
        let result = sqlx::query_as::<_, HeroIntroEntity>(
            r#"
            SELECT * FROM hero_intros
            WHERE ($1 = false OR is_active = true)
            ORDER BY updated_at DESC, id DESC
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
    ) -> Result<Option<HeroIntroEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_hero_intro_by_id");
        let result = sqlx::query_as::<_, HeroIntroEntity>(
            "SELECT * FROM hero_intros WHERE id = $1 AND ($2 = false OR is_active = true)",
        )
        .bind(id)
        .bind(active_only)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        request: &CreateHeroIntroRequest,
    ) -> Result<HeroIntroEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_hero_intro");
        let result = sqlx::query_as::<_, HeroIntroEntity>(
            r#"
            INSERT INTO hero_intros (heading, heading_si, highlight, highlight_si, description,
                                     description_si, primary_label, primary_label_si, primary_url,
                                     secondary_label, secondary_label_si, secondary_url, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&request.heading)
        .bind(&request.heading_si)
        .bind(&request.highlight)
        .bind(&request.highlight_si)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(&request.primary_label)
        .bind(&request.primary_label_si)
        .bind(&request.primary_url)
        .bind(&request.secondary_label)
        .bind(&request.secondary_label_si)
        .bind(&request.secondary_url)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateHeroIntroRequest,
    ) -> Result<Option<HeroIntroEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_hero_intro");
        let result = sqlx::query_as::<_, HeroIntroEntity>(
            r#"
            UPDATE hero_intros SET
                heading = COALESCE($2, heading),
                heading_si = COALESCE($3, heading_si),
                highlight = COALESCE($4, highlight),
                highlight_si = COALESCE($5, highlight_si),
                description = COALESCE($6, description),
                description_si = COALESCE($7, description_si),
                primary_label = COALESCE($8, primary_label),
                primary_label_si = COALESCE($9, primary_label_si),
                primary_url = COALESCE($10, primary_url),
                secondary_label = COALESCE($11, secondary_label),
                secondary_label_si = COALESCE($12, secondary_label_si),
                secondary_url = COALESCE($13, secondary_url),
                is_active = COALESCE($14, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.heading)
        .bind(&request.heading_si)
        .bind(&request.highlight)
        .bind(&request.highlight_si)
        .bind(&request.description)
        .bind(&request.description_si)
        .bind(&request.primary_label)
        .bind(&request.primary_label_si)
        .bind(&request.primary_url)
        .bind(&request.secondary_label)
        .bind(&request.secondary_label_si)
        .bind(&request.secondary_url)
        .bind(request.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_hero_intro");
        let result = sqlx::query("DELETE FROM hero_intros WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
