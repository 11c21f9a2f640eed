use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OriginError {
    /// Network failure or timeout
    #[error("origin unavailable: {0}")]
    Unavailable(String),

    #[error("origin rejected request with status {status}: {reason}")]
    Rejected { status: u16, reason: String },

    /// 2xx response whose body is not JSON
    #[error("parse error: {0}")]
    Parse(String),
}

/// The remote analytics backend, keyed by company name.
#[async_trait]
pub trait AnalyticsOrigin: Send + Sync {
    /// Fetch the raw `company-data` body for `company_name`, verbatim.
    async fn fetch_company_data(&self, company_name: &str) -> Result<Value, OriginError>;
}
