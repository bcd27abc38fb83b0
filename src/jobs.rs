use std::sync::Arc;

use sqlx::PgPool;
use tokio::time::{interval, Duration};
use tracing::{error, info};

use crate::analyzer;
use crate::cache::TtlCache;
use crate::config::{AnalyzerConfig, JobsConfig};
use crate::db::InsightRepo;
use crate::handlers::insights::INSIGHTS_CACHE_KEY;
use crate::models::Insight;

/// Periodic refresh so dashboard reads stay warm: re-run the analyzer on an
/// interval, persist the batch when enabled, and replace the cached response.
pub fn spawn_background_jobs(
    pool: PgPool,
    config: JobsConfig,
    analyzer_config: AnalyzerConfig,
    cache: Arc<TtlCache<Vec<Insight>>>,
    persist_insights: bool,
) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(config.refresh_interval_secs));
        loop {
            ticker.tick().await;
            info!("Running insight refresh job");
            match analyzer::run_analyzer(&pool, &analyzer_config).await {
                Ok(insights) => {
                    if persist_insights && !insights.is_empty() {
                        if let Err(err) = InsightRepo::create_batch(&pool, &insights).await {
                            error!("Failed to persist insights: {err}");
                        }
                    }
                    info!(count = insights.len(), "Insight refresh complete");
                    cache.insert(INSIGHTS_CACHE_KEY, insights).await;
                }
                Err(err) => {
                    error!("Insight refresh job failed: {err}");
                }
            }
        }
    });

    info!("Background jobs started");
}
