pub mod insight;
pub mod metric;

pub use insight::{AnomalyCandidate, AnomalyContext, Direction, Insight, InsightWindow};
pub use metric::{MetricKind, TimeBucket};
