mod article;
mod chart;
mod company;
mod dashboard;
mod lookup;
mod payload;

pub use article::{ArticleItem, SentimentLabel};
pub use chart::{ChartSample, ChartView, DisplayRange, ForecastWindow, RangeBound, SeriesPoint};
pub use company::{all_companies, find_by_name, find_by_symbol, Company, SP500_COMPANIES};
pub use dashboard::{ChartPanel, DashboardView, FundamentalStat, FundamentalsView};
pub use lookup::{CompanyDataRequest, LookupResult, LookupSource};
pub use payload::RawAnalyticsPayload;
