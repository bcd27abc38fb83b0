use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Insight;

pub struct InsightRepo;

impl InsightRepo {
    /// Persist one run's ranked insights into `insight_reports` in a single
    /// transaction. Reports are append-only; each run writes fresh rows.
    pub async fn create_batch(pool: &PgPool, insights: &[Insight]) -> Result<(), sqlx::Error> {
        if insights.is_empty() {
            return Ok(());
        }

        let mut tx = pool.begin().await?;
        for insight in insights {
            sqlx::query(
                r#"INSERT INTO insight_reports
                     (id, metric, type, page, change, possible_cause, context, score, recent_hours, baseline_hours, created_at)
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW())"#,
            )
            .bind(Uuid::new_v4())
            .bind(&insight.metric)
            .bind(insight.kind.key())
            .bind(&insight.page)
            .bind(&insight.change)
            .bind(&insight.possible_cause)
            .bind(serde_json::to_value(&insight.context).unwrap_or_default())
            .bind(insight.score)
            .bind(insight.window.recent_hours as i32)
            .bind(insight.window.baseline_hours as i32)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
