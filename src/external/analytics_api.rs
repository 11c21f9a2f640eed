use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error};

use crate::external::analytics_provider::{AnalyticsOrigin, OriginError};

/// reqwest client for the analytics origin's `POST /company-data`.
pub struct AnalyticsApiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AnalyticsApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, OriginError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OriginError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: company_data_url(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn company_data_url(base_url: &str) -> String {
    format!("{}/company-data", base_url.trim_end_matches('/'))
}

#[async_trait]
impl AnalyticsOrigin for AnalyticsApiClient {
    async fn fetch_company_data(&self, company_name: &str) -> Result<Value, OriginError> {
        debug!("POST {} for {}", self.endpoint, company_name);

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "company_name": company_name }))
            .send()
            .await
            .map_err(|e| {
                error!("Analytics origin request failed for {}: {}", company_name, e);
                OriginError::Unavailable(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
            error!("Analytics origin returned {} for {}", status, company_name);
            return Err(OriginError::Rejected {
                status: status.as_u16(),
                reason,
            });
        }

        resp.json::<Value>()
            .await
            .map_err(|e| OriginError::Parse(e.to_string()))
    }
}
