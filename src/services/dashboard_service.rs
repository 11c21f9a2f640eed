use crate::models::{
    find_by_name, ChartPanel, DashboardView, LookupResult, RawAnalyticsPayload, SentimentLabel,
};
use crate::services::{article_service, chart_service, fundamentals_service};

/// Turn one gateway lookup into everything the dashboard renders.
pub fn build_dashboard(requested_name: &str, lookup: &LookupResult) -> DashboardView {
    let payload = RawAnalyticsPayload::from_value(&lookup.data);
    let catalog_symbol = find_by_name(requested_name).map(|c| c.symbol);

    DashboardView {
        company_name: payload
            .company_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| requested_name.to_string()),
        source: lookup.source,
        overall_sentiment: payload.overall_sentiment,
        sentiment_label: SentimentLabel::classify(payload.overall_sentiment),
        articles: article_service::zip_articles(&payload),
        chart: ChartPanel {
            view: chart_service::merge(&payload),
            forecast_window: chart_service::forecast_window(&payload),
        },
        fundamentals: fundamentals_service::fundamentals_view(&payload, catalog_symbol),
    }
}
