use crate::analyzer::stats;
use crate::config::AnalyzerConfig;
use crate::models::{AnomalyCandidate, AnomalyContext, Direction, MetricKind, TimeBucket};

/// Z-score detector comparing a trailing recent window against the older
/// baseline portion of a group's series.
pub struct AnomalyDetector {
    pub recent_hours: usize,
    pub z_threshold: f64,
}

impl AnomalyDetector {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            recent_hours: config.recent_hours,
            z_threshold: config.z_threshold,
        }
    }

    /// Evaluate one group. Returns `None` when the group is too short, has a
    /// flat baseline, or deviates less than the threshold.
    pub fn evaluate(
        &self,
        metric: MetricKind,
        mut buckets: Vec<TimeBucket>,
    ) -> Option<AnomalyCandidate> {
        buckets.sort_by_key(|b| b.bucket_start);

        // A baseline of zero length cannot support a variance estimate.
        if buckets.len() <= self.recent_hours {
            return None;
        }

        let values: Vec<f64> = buckets.iter().map(|b| b.value).collect();
        let (baseline, recent) = values.split_at(values.len() - self.recent_hours);

        let baseline_mean = stats::mean(baseline);
        let baseline_std = stats::stddev(baseline);
        if baseline_std == 0.0 {
            // no variation, nothing to detect
            return None;
        }

        let recent_avg = stats::mean(recent);
        let z = (recent_avg - baseline_mean) / baseline_std;
        if z.abs() < self.z_threshold {
            return None;
        }

        // All members of a context group share the same context, so the
        // latest bucket is representative. For the global group it is empty.
        let latest = buckets.last()?;

        Some(AnomalyCandidate {
            metric,
            context: AnomalyContext::from_bucket(latest),
            recent_sum: stats::sum(recent),
            recent_avg,
            baseline_mean,
            baseline_std,
            z_score: z,
            direction: if z >= 0.0 {
                Direction::Up
            } else {
                Direction::Down
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn series(values: &[f64]) -> Vec<TimeBucket> {
        let start = Utc.with_ymd_and_hms(2026, 8, 24, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| TimeBucket {
                bucket_start: start + Duration::hours(i as i64),
                value,
                referrer: None,
                device_type: Some("mobile".into()),
                category: None,
                page: Some("/home".into()),
            })
            .collect()
    }

    fn detector() -> AnomalyDetector {
        AnomalyDetector::new(&AnalyzerConfig::default())
    }

    #[test]
    fn test_six_points_skipped_seven_eligible() {
        // Exactly recent_hours points: no baseline, never a candidate.
        let six = series(&[100.0, 100.0, 100.0, 100.0, 100.0, 100.0]);
        assert!(detector().evaluate(MetricKind::PageViews, six).is_none());

        // One baseline point makes the group eligible, but a single-point
        // baseline has stddev 0, so it is still skipped.
        let seven = series(&[100.0; 7]);
        assert!(detector().evaluate(MetricKind::PageViews, seven).is_none());
    }

    #[test]
    fn test_flat_baseline_skipped_despite_huge_spike() {
        // 18 identical baseline points, then a massive jump.
        let mut values = vec![100.0; 18];
        values.extend([400.0, 420.0, 410.0, 430.0, 440.0, 450.0]);

        let result = detector().evaluate(MetricKind::PageViews, series(&values));
        assert!(result.is_none());
    }

    #[test]
    fn test_strong_spike_detected_upward() {
        // Baseline alternating around 100 with small variance, then a spike.
        let mut values: Vec<f64> = (0..18)
            .map(|i| [100.0, 102.0, 98.0, 101.0, 99.0, 100.0][i % 6])
            .collect();
        values.extend([500.0, 510.0, 495.0, 505.0, 515.0, 520.0]);

        let candidate = detector()
            .evaluate(MetricKind::PageViews, series(&values))
            .expect("spike should be detected");

        assert_eq!(candidate.direction, Direction::Up);
        assert!(candidate.z_score >= 2.5);
        assert!((candidate.baseline_mean - 100.0).abs() < 1.0);
        assert!(candidate.baseline_std > 0.0);
        assert!(candidate.recent_avg > 490.0);
        assert_eq!(candidate.recent_sum, 500.0 + 510.0 + 495.0 + 505.0 + 515.0 + 520.0);
    }

    #[test]
    fn test_drop_detected_downward() {
        let mut values: Vec<f64> = (0..18).map(|i| 100.0 + (i % 3) as f64).collect();
        values.extend([2.0, 1.0, 0.0, 3.0, 2.0, 1.0]);

        let candidate = detector()
            .evaluate(MetricKind::UserActions, series(&values))
            .expect("drop should be detected");

        assert_eq!(candidate.direction, Direction::Down);
        assert!(candidate.z_score < 0.0);
        assert!(candidate.z_score.abs() >= 2.5);
    }

    #[test]
    fn test_mild_deviation_below_threshold_skipped() {
        let mut values: Vec<f64> = (0..18).map(|i| 100.0 + (i % 5) as f64).collect();
        values.extend([103.0, 104.0, 103.0, 105.0, 104.0, 103.0]);

        assert!(detector()
            .evaluate(MetricKind::PageViews, series(&values))
            .is_none());
    }

    #[test]
    fn test_context_taken_from_latest_bucket() {
        let mut values: Vec<f64> = (0..18).map(|i| 50.0 + (i % 2) as f64).collect();
        values.extend([300.0; 6]);

        let candidate = detector()
            .evaluate(MetricKind::PageViews, series(&values))
            .expect("candidate");

        assert_eq!(candidate.context.page.as_deref(), Some("/home"));
        assert_eq!(candidate.context.device_type.as_deref(), Some("mobile"));
        assert!(candidate.context.referrer.is_none());
    }

    #[test]
    fn test_thresholds_come_from_config() {
        let config = AnalyzerConfig {
            z_threshold: 1.0,
            recent_hours: 2,
            ..Default::default()
        };
        let det = AnomalyDetector::new(&config);

        // Too small for the default windows, detectable with the overrides.
        let buckets = series(&[10.0, 11.0, 10.0, 11.0, 30.0, 31.0]);
        assert!(detector()
            .evaluate(MetricKind::PageViews, buckets.clone())
            .is_none());
        assert!(det.evaluate(MetricKind::PageViews, buckets).is_some());
    }

    #[test]
    fn test_unsorted_input_is_sorted_before_split() {
        // Same spike series delivered in reverse order must still detect.
        let mut values: Vec<f64> = (0..18).map(|i| 50.0 + (i % 2) as f64).collect();
        values.extend([300.0; 6]);
        let mut buckets = series(&values);
        buckets.reverse();

        assert!(detector().evaluate(MetricKind::PageViews, buckets).is_some());
    }
}
