//! About section, text snippet and footer about repositories.
//!
//! All three tables carry `is_active`; reads take an `active_only` flag and
//! writes reach every row.

use sqlx::PgPool;

use domain::models::site_text::{
    CreateAboutSectionRequest, CreateFooterAboutRequest, CreateSiteTextSnippetRequest,
    UpdateAboutSectionRequest, UpdateFooterAboutRequest, UpdateSiteTextSnippetRequest,
};
use domain::services::Ordering;

use crate::entities::{AboutSectionEntity, FooterAboutEntity, SiteTextSnippetEntity};
use crate::metrics::QueryTimer;

/// Repository for about page sections.
#[derive(Clone)]
pub struct AboutSectionRepository {
    pool: PgPool,
}

impl AboutSectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        active_only: bool,
        ordering: Option<Ordering>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<AboutSectionEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_about_sections");
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM about_sections WHERE ($1 = false OR is_active = true)",
        )
        .bind(active_only)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        let order = ordering
            .map(|o| o.to_sql())
            .unwrap_or_else(|| "position, created_at".to_string());
        let sql = format!(
            r#"
            SELECT * FROM about_sections
            WHERE ($1 = false OR is_active = true)
            ORDER BY {order}, id
            LIMIT $2 OFFSET $3
            "#
        );

        let timer = QueryTimer::new("list_about_sections");
        let result = sqlx::query_as::<_, AboutSectionEntity>(&sql)
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
    ) -> Result<Option<AboutSectionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_about_section_by_id");
        let result = sqlx::query_as::<_, AboutSectionEntity>(
            "SELECT * FROM about_sections WHERE id = $1 AND ($2 = false OR is_active = true)",
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
        request: &CreateAboutSectionRequest,
    ) -> Result<AboutSectionEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_about_section");
        let result = sqlx::query_as::<_, AboutSectionEntity>(
            r#"
            INSERT INTO about_sections (slug, nav_label, nav_label_si, title, title_si, body,
                                        body_si, position, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&request.slug)
        .bind(&request.nav_label)
        .bind(&request.nav_label_si)
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.body)
        .bind(&request.body_si)
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
        request: &UpdateAboutSectionRequest,
    ) -> Result<Option<AboutSectionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_about_section");
        let result = sqlx::query_as::<_, AboutSectionEntity>(
            r#"
            UPDATE about_sections SET
                slug = COALESCE($2, slug),
                nav_label = COALESCE($3, nav_label),
                nav_label_si = COALESCE($4, nav_label_si),
                title = COALESCE($5, title),
                title_si = COALESCE($6, title_si),
                body = COALESCE($7, body),
                body_si = COALESCE($8, body_si),
                position = COALESCE($9, position),
                is_active = COALESCE($10, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.slug)
        .bind(&request.nav_label)
        .bind(&request.nav_label_si)
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.body)
        .bind(&request.body_si)
        .bind(request.position)
        .bind(request.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_about_section");
        let result = sqlx::query("DELETE FROM about_sections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

/// Repository for keyed site text snippets.
#[derive(Clone)]
pub struct SiteTextSnippetRepository {
    pool: PgPool,
}

impl SiteTextSnippetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List snippets by key. `search` is an ILIKE pattern over key, title and text.
    pub async fn list(
        &self,
        active_only: bool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<SiteTextSnippetEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_site_text_snippets");
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM site_text_snippets
            WHERE ($1 = false OR is_active = true)
              AND ($2::text IS NULL OR key ILIKE $2 OR title ILIKE $2 OR text ILIKE $2)
            "#,
        )
        .bind(active_only)
        .bind(search)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        let timer = QueryTimer::new("list_site_text_snippets");
        let result = sqlx::query_as::<_, SiteTextSnippetEntity>(
            r#"
            SELECT * FROM site_text_snippets
            WHERE ($1 = false OR is_active = true)
              AND ($2::text IS NULL OR key ILIKE $2 OR title ILIKE $2 OR text ILIKE $2)
            ORDER BY key, id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(active_only)
        .bind(search)
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
    ) -> Result<Option<SiteTextSnippetEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_site_text_snippet_by_id");
        let result = sqlx::query_as::<_, SiteTextSnippetEntity>(
            "SELECT * FROM site_text_snippets WHERE id = $1 AND ($2 = false OR is_active = true)",
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
        request: &CreateSiteTextSnippetRequest,
    ) -> Result<SiteTextSnippetEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_site_text_snippet");
        let result = sqlx::query_as::<_, SiteTextSnippetEntity>(
            r#"
            INSERT INTO site_text_snippets (key, title, text, text_si, notes, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.key)
        .bind(&request.title)
        .bind(&request.text)
        .bind(&request.text_si)
        .bind(&request.notes)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateSiteTextSnippetRequest,
    ) -> Result<Option<SiteTextSnippetEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_site_text_snippet");
        let result = sqlx::query_as::<_, SiteTextSnippetEntity>(
            r#"
            UPDATE site_text_snippets SET
                key = COALESCE($2, key),
                title = COALESCE($3, title),
                text = COALESCE($4, text),
                text_si = COALESCE($5, text_si),
                notes = COALESCE($6, notes),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.key)
        .bind(&request.title)
        .bind(&request.text)
        .bind(&request.text_si)
        .bind(&request.notes)
        .bind(request.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_site_text_snippet");
        let result = sqlx::query("DELETE FROM site_text_snippets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

/// Repository for the footer about block.
#[derive(Clone)]
pub struct FooterAboutRepository {
    pool: PgPool,
}

impl FooterAboutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<FooterAboutEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_footer_abouts");
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM footer_abouts WHERE ($1 = false OR is_active = true)",
        )
        .bind(active_only)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        let timer = QueryTimer::new("list_footer_abouts");
        let result = sqlx::query_as::<_, FooterAboutEntity>(
            r#"
            SELECT * FROM footer_abouts
            WHERE ($1 = false OR is_active = true)
            ORDER BY updated_at DESC, created_at DESC, id DESC
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
    ) -> Result<Option<FooterAboutEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_footer_about_by_id");
        let result = sqlx::query_as::<_, FooterAboutEntity>(
            "SELECT * FROM footer_abouts WHERE id = $1 AND ($2 = false OR is_active = true)",
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
        request: &CreateFooterAboutRequest,
    ) -> Result<FooterAboutEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_footer_about");
        let result = sqlx::query_as::<_, FooterAboutEntity>(
            r#"
            INSERT INTO footer_abouts (title, title_si, body, body_si, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.body)
        .bind(&request.body_si)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateFooterAboutRequest,
    ) -> Result<Option<FooterAboutEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_footer_about");
        let result = sqlx::query_as::<_, FooterAboutEntity>(
            r#"
            UPDATE footer_abouts SET
                title = COALESCE($2, title),
                title_si = COALESCE($3, title_si),
                body = COALESCE($4, body),
                body_si = COALESCE($5, body_si),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.title_si)
        .bind(&request.body)
        .bind(&request.body_si)
        .bind(request.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_footer_about");
        let result = sqlx::query("DELETE FROM footer_abouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
