//! Newsletter subscription repository.

use sqlx::PgPool;

use crate::entities::NewsletterSubscriptionEntity;
use crate::metrics::QueryTimer;

/// Repository for newsletter subscriptions. Create and list only.
#[derive(Clone)]
pub struct NewsletterRepository {
    pool: PgPool,
}

impl NewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Newest subscriptions first.
    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<NewsletterSubscriptionEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("count_newsletter_subscriptions");
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM newsletter_subscriptions")
            .fetch_one(&self.pool)
            .await?;
        timer.record();

        let timer = QueryTimer::new("list_newsletter_subscriptions");
        let result = sqlx::query_as::<_, NewsletterSubscriptionEntity>(
            r#"
            SELECT * FROM newsletter_subscriptions
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

    /// Insert an already normalized address. Duplicates fail with a unique
    /// violation.
    pub async fn create(&self, email: &str) -> Result<NewsletterSubscriptionEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_newsletter_subscription");
        let result = sqlx::query_as::<_, NewsletterSubscriptionEntity>(
            "INSERT INTO newsletter_subscriptions (email) VALUES ($1) RETURNING *",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
