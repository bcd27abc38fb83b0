//! Batch anomaly analysis over the hourly metric tables.
//!
//! One run is a full pass over a fixed lookback window: fetch each metric's
//! buckets, partition them into context groups plus a global rollup, score
//! every group against its baseline, and rank the resulting insights by
//! deviation strength. No state survives between runs.

pub mod detect;
pub mod group;
pub mod insight;
pub mod stats;

use sqlx::PgPool;
use tracing::warn;

use crate::config::AnalyzerConfig;
use crate::db::BucketRepo;
use crate::models::{Insight, InsightWindow, MetricKind};

use detect::AnomalyDetector;

pub async fn run_analyzer(pool: &PgPool, config: &AnalyzerConfig) -> anyhow::Result<Vec<Insight>> {
    let detector = AnomalyDetector::new(config);
    let window = InsightWindow {
        recent_hours: config.recent_hours as u32,
        baseline_hours: config.baseline_hours_label,
    };

    let mut insights = Vec::new();

    for metric in MetricKind::ALL {
        let buckets = match BucketRepo::fetch(pool, metric, config.lookback_hours).await {
            Ok(buckets) => buckets,
            Err(err) => {
                // One metric failing must not abort the others.
                warn!(metric = metric.key(), error = %err, "Bucket fetch failed, skipping metric");
                continue;
            }
        };
        if buckets.is_empty() {
            continue;
        }

        for (_, group) in group::group_buckets(buckets) {
            if let Some(candidate) = detector.evaluate(metric, group) {
                insights.push(insight::compose(&candidate, window));
            }
        }
    }

    rank(&mut insights);
    Ok(insights)
}

/// Strongest deviation first. Ties keep their insertion order (stable sort),
/// which the output contract leaves unspecified.
pub fn rank(insights: &mut [Insight]) {
    insights.sort_by(|a, b| b.score.total_cmp(&a.score));
}
