use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The closed set of metrics the analyzer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    PageViews,
    UserActions,
    Performance,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [
        MetricKind::PageViews,
        MetricKind::UserActions,
        MetricKind::Performance,
    ];

    /// Stable wire key, used as the `type` field on insights.
    pub fn key(&self) -> &'static str {
        match self {
            MetricKind::PageViews => "pageviews",
            MetricKind::UserActions => "useractions",
            MetricKind::Performance => "performance",
        }
    }

    /// Human-facing label used in insight text.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::PageViews => "Page Views",
            MetricKind::UserActions => "User Actions",
            MetricKind::Performance => "Page Load Time (p95)",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            MetricKind::PageViews => "pageviews_hourly",
            MetricKind::UserActions => "useractions_hourly",
            MetricKind::Performance => "performance_hourly",
        }
    }

    pub fn value_column(&self) -> &'static str {
        match self {
            MetricKind::PageViews | MetricKind::UserActions => "count",
            MetricKind::Performance => "p95_load_time_ms",
        }
    }

    /// Latency metrics get different explanation wording than count metrics.
    pub fn is_performance(&self) -> bool {
        matches!(self, MetricKind::Performance)
    }
}

/// One hourly data point for a metric, with optional context dimensions.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TimeBucket {
    pub bucket_start: DateTime<Utc>,
    pub value: f64,
    pub referrer: Option<String>,
    pub device_type: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
}

impl TimeBucket {
    /// Copy with all context dimensions dropped, for the global rollup.
    pub fn stripped(&self) -> Self {
        Self {
            bucket_start: self.bucket_start,
            value: self.value,
            referrer: None,
            device_type: None,
            category: None,
            page: None,
        }
    }
}
