pub mod dashboard;
pub mod health;
pub mod insights;

use std::sync::Arc;

use crate::cache::TtlCache;
use crate::config::AnalyzerConfig;
use crate::models::Insight;

/// Shared application state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub cache: Arc<TtlCache<Vec<Insight>>>,
    pub analyzer: AnalyzerConfig,
    pub persist_insights: bool,
}
