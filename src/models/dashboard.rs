use serde::Serialize;

use super::{ArticleItem, ChartView, ForecastWindow, LookupSource, SentimentLabel};

/// One labeled cell of the fundamentals table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundamentalStat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalsView {
    /// Symbol shown in the table header
    pub symbol: String,
    pub stats: Vec<FundamentalStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPanel {
    #[serde(flatten)]
    pub view: ChartView,
    pub forecast_window: Option<ForecastWindow>,
}

/// Everything the dashboard renders for one company lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub company_name: String,
    pub source: LookupSource,
    pub overall_sentiment: Option<f64>,
    pub sentiment_label: SentimentLabel,
    pub articles: Vec<ArticleItem>,
    pub chart: ChartPanel,
    pub fundamentals: Option<FundamentalsView>,
}
