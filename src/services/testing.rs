use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::external::analytics_provider::{AnalyticsOrigin, OriginError};

/// Scriptable origin that counts its calls.
pub struct FakeOrigin {
    calls: AtomicUsize,
    delays: HashMap<String, Duration>,
    failures: Mutex<VecDeque<OriginError>>,
}

impl FakeOrigin {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delays: HashMap::new(),
            failures: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    /// Make the next call fail with `err`, after its delay.
    pub fn fail_next(&self, err: OriginError) {
        self.failures.lock().push_back(err);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalyticsOrigin for FakeOrigin {
    async fn fetch_company_data(&self, company_name: &str) -> Result<Value, OriginError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(company_name) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(err) = self.failures.lock().pop_front() {
            return Err(err);
        }

        Ok(json!({
            "company_name": company_name,
            "past_dates": ["2024-01-01", "2024-01-02"],
            "past_closings": [100.0, 102.5],
            "closing_timestamps": ["2024-01-03", "2024-01-04"],
            "future_closings": [103.0, 104.25],
            "overall_sentiment": 0.21,
        }))
    }
}
