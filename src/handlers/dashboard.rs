use axum::response::Html;

/// Static dashboard page; all data comes from the anomalies endpoint.
pub async fn insights_page() -> Html<&'static str> {
    Html(include_str!("../../assets/insights.html"))
}
