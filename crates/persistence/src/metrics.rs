//! Query and pool metrics for the content repositories.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Records one repository query under its `query` label.
pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Connection counts of the pool at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolUsage {
    pub total: u32,
    pub idle: u32,
    pub active: u32,
}

impl PoolUsage {
    pub fn from_counts(total: u32, idle: usize) -> Self {
        let idle = u32::try_from(idle).unwrap_or(u32::MAX).min(total);
        Self {
            total,
            idle,
            active: total - idle,
        }
    }
}

/// Snapshot of pool usage, taken on each health check.
pub fn record_pool_metrics(pool: &PgPool) -> PoolUsage {
    let usage = PoolUsage::from_counts(pool.size(), pool.num_idle());

    gauge!("database_connections_active").set(f64::from(usage.active));
    gauge!("database_connections_idle").set(f64::from(usage.idle));
    gauge!("database_connections_total").set(f64::from(usage.total));
    usage
}

/// Times one repository query.
///
/// Query names follow `<verb>_<resource>`, e.g. `list_albums`:
/// ```ignore
/// let timer = QueryTimer::new("find_news_by_slug");
/// let result = sqlx::query_as::<_, NewsEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: String,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
            start: Instant::now(),
        }
    }

    /// Stops the timer and records the elapsed time.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(&self.query_name, duration);
    }
}
