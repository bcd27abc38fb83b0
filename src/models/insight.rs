use serde::{Deserialize, Serialize};

use super::metric::{MetricKind, TimeBucket};

/// The context dimensions an anomaly was observed in. Unset fields mean the
/// dimension did not apply, or the anomaly is on the global rollup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyContext {
    pub referrer: Option<String>,
    pub device_type: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
}

impl AnomalyContext {
    pub fn from_bucket(bucket: &TimeBucket) -> Self {
        Self {
            referrer: bucket.referrer.clone(),
            device_type: bucket.device_type.clone(),
            category: bucket.category.clone(),
            page: bucket.page.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Intermediate detection result for one group. Consumed by the insight
/// composer within the same run, never serialized or stored.
#[derive(Debug, Clone)]
pub struct AnomalyCandidate {
    pub metric: MetricKind,
    pub context: AnomalyContext,
    /// Sum of the recent-window values.
    pub recent_sum: f64,
    pub recent_avg: f64,
    pub baseline_mean: f64,
    pub baseline_std: f64,
    pub z_score: f64,
    pub direction: Direction,
}

/// Window label attached to every insight. Descriptive: baseline_hours is
/// the nominal baseline length, not the observed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightWindow {
    pub recent_hours: u32,
    pub baseline_hours: u32,
}

/// One ranked, human-readable anomaly. The full set is the payload of
/// `GET /api/insights/anomalies`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Display label, e.g. "Page Views".
    pub metric: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Underlying metric key.
    #[serde(rename = "type")]
    pub kind: MetricKind,
    /// Signed percent change, e.g. "+210%" or "-45%".
    pub change: String,
    pub possible_cause: String,
    pub context: AnomalyContext,
    /// |z-score| of the detection.
    pub score: f64,
    pub window: InsightWindow,
}
