use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt, Shared};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::external::analytics_provider::{AnalyticsOrigin, OriginError};
use crate::models::{LookupResult, LookupSource};
use crate::services::cache_store::CacheStore;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    #[error("analytics origin unavailable: {0}")]
    OriginUnavailable(String),

    #[error("analytics origin rejected the request ({status} {reason})")]
    OriginRejected { status: u16, reason: String },

    #[error("analytics origin sent an unreadable body: {0}")]
    OriginMalformed(String),

    /// A stored entry is not valid JSON
    #[error("cached entry for '{key}' is corrupt: {reason}")]
    CacheCorrupt { key: String, reason: String },
}

impl From<OriginError> for GatewayError {
    fn from(err: OriginError) -> Self {
        match err {
            OriginError::Unavailable(msg) => GatewayError::OriginUnavailable(msg),
            OriginError::Rejected { status, reason } => {
                GatewayError::OriginRejected { status, reason }
            }
            OriginError::Parse(msg) => GatewayError::OriginMalformed(msg),
        }
    }
}

impl GatewayError {
    /// Short message suitable for showing to the dashboard user.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::OriginRejected { reason, .. } => {
                format!("Error fetching company data: {}", reason)
            }
            GatewayError::OriginUnavailable(_) | GatewayError::OriginMalformed(_) => {
                "Failed to fetch company data.".to_string()
            }
            GatewayError::CacheCorrupt { .. } => "Cached company data is unreadable.".to_string(),
        }
    }
}

type OriginCall = Shared<BoxFuture<'static, Result<Value, GatewayError>>>;

/// Snapshot of gateway counters.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct GatewayStats {
    pub hits: u64,
    pub misses: u64,
    /// Misses that joined a call already in flight
    pub coalesced: u64,
    pub origin_failures: u64,
    pub hit_rate: f64,
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    coalesced: AtomicU64,
    origin_failures: AtomicU64,
}

/// Read-through cache in front of the analytics origin.
///
/// Keys are used verbatim. Only successful origin bodies are stored, each
/// with the gateway's TTL. Concurrent misses for one key share a single
/// origin call.
#[derive(Clone)]
pub struct CacheGateway {
    store: Arc<dyn CacheStore>,
    origin: Arc<dyn AnalyticsOrigin>,
    ttl: Duration,
    in_flight: Arc<DashMap<String, (u64, OriginCall)>>,
    next_call_id: Arc<AtomicU64>,
    counters: Arc<Counters>,
}

impl CacheGateway {
    pub fn new(store: Arc<dyn CacheStore>, origin: Arc<dyn AnalyticsOrigin>, ttl: Duration) -> Self {
        Self {
            store,
            origin,
            ttl,
            in_flight: Arc::new(DashMap::new()),
            next_call_id: Arc::new(AtomicU64::new(0)),
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    /// Resolve `key` from the store, or from the origin on a miss.
    pub async fn get(&self, key: &str) -> Result<LookupResult, GatewayError> {
        match self.store.get(key).await {
            Ok(Some(text)) => {
                let data = serde_json::from_str::<Value>(&text).map_err(|e| {
                    error!("Corrupt cache entry for {}: {}", key, e);
                    GatewayError::CacheCorrupt {
                        key: key.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for {}", key);
                return Ok(LookupResult {
                    data,
                    source: LookupSource::Cache,
                });
            }
            Ok(None) => {}
            Err(e) => warn!("Cache store read failed for {}, going to origin: {}", key, e),
        }

        self.counters.misses.fetch_add(1, Ordering::Relaxed);
        let data = self.fetch_from_origin(key).await?;

        Ok(LookupResult {
            data,
            source: LookupSource::Origin,
        })
    }

    async fn fetch_from_origin(&self, key: &str) -> Result<Value, GatewayError> {
        let (call, leader) = match self.in_flight.entry(key.to_string()) {
            Entry::Occupied(entry) => {
                self.counters.coalesced.fetch_add(1, Ordering::Relaxed);
                debug!("Joining in-flight origin call for {}", key);
                (entry.get().1.clone(), None)
            }
            Entry::Vacant(entry) => {
                let id = self.next_call_id.fetch_add(1, Ordering::Relaxed);
                let call = origin_call(
                    self.origin.clone(),
                    self.store.clone(),
                    self.counters.clone(),
                    self.slot(key, id),
                    self.ttl,
                )
                .boxed()
                .shared();
                entry.insert((id, call.clone()));
                (call, Some(id))
            }
        };

        // The call clears its own slot once the origin answers. This guard
        // only covers a leader dropped before that happens.
        let _slot = leader.map(|id| self.slot(key, id));

        call.await
    }

    fn slot(&self, key: &str, id: u64) -> InFlightSlot {
        InFlightSlot {
            map: self.in_flight.clone(),
            key: key.to_string(),
            id,
        }
    }

    /// Number of origin calls currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn stats(&self) -> GatewayStats {
        let hits = self.counters.hits.load(Ordering::Relaxed);
        let misses = self.counters.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        GatewayStats {
            hits,
            misses,
            coalesced: self.counters.coalesced.load(Ordering::Relaxed),
            origin_failures: self.counters.origin_failures.load(Ordering::Relaxed),
            hit_rate,
        }
    }
}

async fn origin_call(
    origin: Arc<dyn AnalyticsOrigin>,
    store: Arc<dyn CacheStore>,
    counters: Arc<Counters>,
    slot: InFlightSlot,
    ttl: Duration,
) -> Result<Value, GatewayError> {
    let key = slot.key.clone();
    info!("Cache miss for {}, calling analytics origin", key);

    let data = match origin.fetch_company_data(&key).await {
        Ok(data) => data,
        Err(e) => {
            counters.origin_failures.fetch_add(1, Ordering::Relaxed);
            drop(slot);
            return Err(e.into());
        }
    };

    match serde_json::to_string(&data) {
        Ok(text) => match store.set_ex(&key, &text, ttl).await {
            Ok(()) => debug!("Cached {} for {}s", key, ttl.as_secs()),
            Err(e) => warn!("Failed to cache origin response for {}: {}", key, e),
        },
        Err(e) => warn!("Failed to serialize origin response for {}: {}", key, e),
    }

    // Stored before release, so the next miss finds the entry
    drop(slot);
    Ok(data)
}

/// Removes one call's in-flight entry, leaving any newer call for the
/// same key alone.
struct InFlightSlot {
    map: Arc<DashMap<String, (u64, OriginCall)>>,
    key: String,
    id: u64,
}

impl Drop for InFlightSlot {
    fn drop(&mut self) {
        self.map.remove_if(&self.key, |_, (id, _)| *id == self.id);
    }
}
