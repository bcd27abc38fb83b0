use crate::models::{AnomalyCandidate, Direction, Insight, InsightWindow};

/// Build the ranked-output record for one detected anomaly.
pub fn compose(candidate: &AnomalyCandidate, window: InsightWindow) -> Insight {
    let change = percent_change(candidate.recent_avg, candidate.baseline_mean);

    let ctx = &candidate.context;
    let mut clauses: Vec<String> = Vec::new();
    if let Some(page) = &ctx.page {
        clauses.push(format!("on page '{page}'"));
    }
    if let Some(device) = &ctx.device_type {
        clauses.push(format!("for {device} users"));
    }
    if let Some(referrer) = &ctx.referrer {
        clauses.push(format!("from referrer '{referrer}'"));
    }
    if let Some(category) = &ctx.category {
        clauses.push(format!("in category '{category}'"));
    }

    let direction_word = match candidate.direction {
        Direction::Up => "increase",
        Direction::Down => "drop",
    };

    let mut possible_cause = format!(
        "Detected a significant {direction_word} in {}",
        candidate.metric.label().to_lowercase()
    );
    if !clauses.is_empty() {
        possible_cause.push(' ');
        possible_cause.push_str(&clauses.join(" "));
    }
    possible_cause.push('.');
    possible_cause.push(' ');
    possible_cause.push_str(closing_sentence(
        candidate.metric.is_performance(),
        candidate.direction,
    ));

    Insight {
        metric: candidate.metric.label().to_string(),
        page: ctx.page.clone(),
        kind: candidate.metric,
        change,
        possible_cause,
        context: ctx.clone(),
        score: candidate.z_score.abs(),
        window,
    }
}

/// Signed, rounded percent change of recent average vs. baseline mean.
/// A zero baseline has no defined ratio and reports "+0%" by policy.
fn percent_change(recent_avg: f64, baseline_mean: f64) -> String {
    let pct = if baseline_mean == 0.0 {
        0.0
    } else {
        (recent_avg - baseline_mean) / baseline_mean * 100.0
    };
    let rounded = pct.round() as i64;
    if pct >= 0.0 {
        format!("+{rounded}%")
    } else {
        format!("{rounded}%")
    }
}

/// The closing sentence of every explanation, keyed on whether the metric is
/// a latency metric and on the deviation direction. Exactly four variants.
fn closing_sentence(is_performance: bool, direction: Direction) -> &'static str {
    match (is_performance, direction) {
        (true, Direction::Up) => {
            "Higher p95 load time may be related to a recent deployment, backend slowdown, or third-party scripts."
        }
        (true, Direction::Down) => {
            "Lower p95 load time suggests a positive performance improvement."
        }
        (false, Direction::Up) => {
            "This could be driven by a campaign, traffic spike, or better UX for this segment."
        }
        (false, Direction::Down) => {
            "This may point to a broken flow, tracking issue, or loss of traffic for this segment."
        }
    }
}
