//! Repository for gallery images attached to news items and notices.

use sqlx::PgPool;

use domain::models::image::CreateAttachedImageRequest;

use crate::entities::AttachedImageEntity;
use crate::metrics::QueryTimer;

/// Tables holding attached images, keyed by their parent column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOwner {
    News,
    Notice,
}

impl ImageOwner {
    fn table(self) -> &'static str {
        match self {
            ImageOwner::News => "news_images",
            ImageOwner::Notice => "notice_images",
        }
    }

    fn parent_column(self) -> &'static str {
        match self {
            ImageOwner::News => "news_id",
            ImageOwner::Notice => "notice_id",
        }
    }

    fn columns(self) -> String {
        format!(
            "id, {} AS parent_id, image, caption, caption_si, position, created_at, updated_at",
            self.parent_column()
        )
    }
}

/// Repository for `news_images` / `notice_images`.
#[derive(Clone)]
pub struct AttachedImageRepository {
    pool: PgPool,
    owner: ImageOwner,
}

impl AttachedImageRepository {
    pub fn new(pool: PgPool, owner: ImageOwner) -> Self {
        Self { pool, owner }
    }

    /// Images for one parent, in display order.
    pub async fn list_for(&self, parent_id: i64) -> Result<Vec<AttachedImageEntity>, sqlx::Error> {
        self.list_for_many(&[parent_id]).await
    }

    /// Images for several parents in one query, in display order.
    pub async fn list_for_many(
        &self,
        parent_ids: &[i64],
    ) -> Result<Vec<AttachedImageEntity>, sqlx::Error> {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }
        let timer = QueryTimer::new(format!("list_{}", self.owner.table()));
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ANY($1) ORDER BY position, id",
            self.owner.columns(),
            self.owner.table(),
            self.owner.parent_column()
        );
        let result = sqlx::query_as::<_, AttachedImageEntity>(&sql)
            .bind(parent_ids)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Attach an image to a parent.
    pub async fn create(
        &self,
        parent_id: i64,
        request: &CreateAttachedImageRequest,
    ) -> Result<AttachedImageEntity, sqlx::Error> {
        let timer = QueryTimer::new(format!("create_{}", self.owner.table()));
        let sql = format!(
            r#"
            INSERT INTO {} ({}, image, caption, caption_si, position)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            self.owner.table(),
            self.owner.parent_column(),
            self.owner.columns()
        );
        let result = sqlx::query_as::<_, AttachedImageEntity>(&sql)
            .bind(parent_id)
            .bind(&request.image)
            .bind(&request.caption)
            .bind(&request.caption_si)
            .bind(request.position)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Delete an image belonging to `parent_id`.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, parent_id: i64, image_id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new(format!("delete_{}", self.owner.table()));
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 AND {} = $2",
            self.owner.table(),
            self.owner.parent_column()
        );
        let result = sqlx::query(&sql)
            .bind(image_id)
            .bind(parent_id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

/// Groups child rows by parent id, preserving their order.
pub fn group_by_parent<T>(
    rows: Vec<T>,
    parent_of: impl Fn(&T) -> i64,
) -> std::collections::HashMap<i64, Vec<T>> {
    let mut grouped: std::collections::HashMap<i64, Vec<T>> = std::collections::HashMap::new();
    for row in rows {
        grouped.entry(parent_of(&row)).or_default().push(row);
    }
    grouped
}
