//! Contact message and contact info repositories.

use sqlx::PgPool;

use domain::models::contact::{
    CreateContactInfoRequest, CreateContactMessageRequest, UpdateContactInfoRequest,
};

use crate::entities::{ContactInfoEntity, ContactMessageEntity};
use crate::metrics::QueryTimer;

/// Repository for contact form messages. Create and list only.
#[derive(Clone)]
pub struct ContactMessageRepository {
    pool: PgPool,
}

impl ContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ContactMessageEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_contact_messages");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_contact_messages");
        let result = sqlx::query_as::<_, ContactMessageEntity>(
            r#"
            SELECT * FROM contact_messages
            ORDER BY created_at DESC, id DESC
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

    pub async fn create(
        &self,
        request: &CreateContactMessageRequest,
    ) -> Result<ContactMessageEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_contact_message");
        let result = sqlx::query_as::<_, ContactMessageEntity>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(request.name.trim())
        .bind(request.email.trim())
        .bind(request.subject.trim())
        .bind(&request.message)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}

/// Repository for the organization's contact details.
#[derive(Clone)]
pub struct ContactInfoRepository {
    pool: PgPool,
}

impl ContactInfoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ContactInfoEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_contact_infos");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_infos")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_contact_infos");
        let result = sqlx::query_as::<_, ContactInfoEntity>(
            "SELECT * FROM contact_infos ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok((result?, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ContactInfoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_contact_info_by_id");
        let result =
            sqlx::query_as::<_, ContactInfoEntity>("SELECT * FROM contact_infos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        request: &CreateContactInfoRequest,
    ) -> Result<ContactInfoEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_contact_info");
        let result = sqlx::query_as::<_, ContactInfoEntity>(
            r#"
            INSERT INTO contact_infos (organization, organization_si, phone, email, address,
                                       address_si, map_url, map_embed, latitude, longitude,
                                       map_zoom)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&request.organization)
        .bind(&request.organization_si)
        .bind(&request.phone)
        .bind(&request.email)
        .bind(&request.address)
        .bind(&request.address_si)
        .bind(&request.map_url)
        .bind(&request.map_embed)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(request.map_zoom)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateContactInfoRequest,
    ) -> Result<Option<ContactInfoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_contact_info");
        let result = sqlx::query_as::<_, ContactInfoEntity>(
            r#"
            UPDATE contact_infos SET
                organization = COALESCE($2, organization),
                organization_si = COALESCE($3, organization_si),
                phone = COALESCE($4, phone),
                email = COALESCE($5, email),
                address = COALESCE($6, address),
                address_si = COALESCE($7, address_si),
                map_url = COALESCE($8, map_url),
                map_embed = COALESCE($9, map_embed),
                latitude = CASE WHEN $10::boolean THEN $11 ELSE latitude END,
                longitude = CASE WHEN $12::boolean THEN $13 ELSE longitude END,
                map_zoom = COALESCE($14, map_zoom),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.organization)
        .bind(&request.organization_si)
        .bind(&request.phone)
        .bind(&request.email)
        .bind(&request.address)
        .bind(&request.address_si)
        .bind(&request.map_url)
        .bind(&request.map_embed)
        .bind(request.latitude.is_some())
        .bind(request.latitude.flatten())
        .bind(request.longitude.is_some())
        .bind(request.longitude.flatten())
        .bind(request.map_zoom)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_contact_info");
        let result = sqlx::query("DELETE FROM contact_infos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
