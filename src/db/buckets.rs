use sqlx::PgPool;

use crate::models::{MetricKind, TimeBucket};

pub struct BucketRepo;

impl BucketRepo {
    /// Fetch the last `window_hours` of hourly buckets for one metric,
    /// oldest first. Zero rows is a valid result, not an error.
    pub async fn fetch(
        pool: &PgPool,
        kind: MetricKind,
        window_hours: u32,
    ) -> Result<Vec<TimeBucket>, sqlx::Error> {
        // Table and value column are compile-time constants per metric kind,
        // never user input.
        let sql = format!(
            r#"SELECT
                 ts AS bucket_start,
                 {value_column}::float8 AS value,
                 referrer,
                 device_type,
                 category,
                 page
               FROM {table}
               WHERE ts >= NOW() - make_interval(hours => $1)
               ORDER BY ts ASC"#,
            value_column = kind.value_column(),
            table = kind.table(),
        );

        sqlx::query_as::<_, TimeBucket>(&sql)
            .bind(window_hours as i32)
            .fetch_all(pool)
            .await
    }
}
