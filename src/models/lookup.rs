use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a gateway lookup was answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupSource {
    Cache,
    Origin,
}

impl std::fmt::Display for LookupSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupSource::Cache => write!(f, "cache"),
            LookupSource::Origin => write!(f, "origin"),
        }
    }
}

/// Raw origin body plus its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub data: Value,
    pub source: LookupSource,
}

/// Body of `POST /api/company-data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDataRequest {
    pub company_name: String,
}
