use axum::{extract::State, Json};
use tracing::error;

use crate::analyzer;
use crate::db::InsightRepo;
use crate::errors::AppError;
use crate::handlers::AppState;
use crate::models::Insight;

pub const INSIGHTS_CACHE_KEY: &str = "anomalies:v1";

/// Ranked anomaly insights for the current lookback window. Served from the
/// TTL cache when warm; otherwise runs a full analysis pass.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Insight>>, AppError> {
    if let Some(cached) = state.cache.get(INSIGHTS_CACHE_KEY).await {
        return Ok(Json(cached));
    }

    let insights = analyzer::run_analyzer(&state.pool, &state.analyzer).await?;
    state
        .cache
        .insert(INSIGHTS_CACHE_KEY, insights.clone())
        .await;

    // Persistence is fire-and-forget: the response is already final and a
    // failed write must not invalidate it.
    if state.persist_insights && !insights.is_empty() {
        let pool = state.pool.clone();
        let to_save = insights.clone();
        tokio::spawn(async move {
            if let Err(err) = InsightRepo::create_batch(&pool, &to_save).await {
                error!("Failed to persist insights: {err}");
            }
        });
    }

    Ok(Json(insights))
}
