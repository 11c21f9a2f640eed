use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::models::DashboardView;
use crate::services::cache_gateway::CacheGateway;
use crate::services::dashboard_service;

/// Identifies one company selection. Only the token of the most recent
/// selection is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionToken {
    generation: u64,
    company: String,
}

impl SelectionToken {
    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Generation counter handing out selection tokens.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    generation: Arc<AtomicU64>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new selection; every earlier token becomes stale.
    pub fn begin(&self, company: &str) -> SelectionToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        SelectionToken {
            generation,
            company: company.to_string(),
        }
    }

    pub fn is_current(&self, token: &SelectionToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading { company: String },
    Ready(Box<DashboardView>),
    Failed { company: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer selection was made; the result was thrown away
    Stale,
}

/// One viewer's dashboard: the selected company and what is shown for it.
///
/// A lookup result is applied only if its selection is still the latest,
/// so a slow response for an abandoned company never replaces the state
/// of a newer selection.
pub struct DashboardSession {
    gateway: CacheGateway,
    tracker: SelectionTracker,
    state: RwLock<SessionState>,
}

impl DashboardSession {
    pub fn new(gateway: CacheGateway) -> Self {
        Self {
            gateway,
            tracker: SelectionTracker::new(),
            state: RwLock::new(SessionState::Idle),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    /// Select `company` and mark the session as loading it.
    pub fn select(&self, company: &str) -> SelectionToken {
        let mut state = self.state.write();
        let token = self.tracker.begin(company);
        *state = SessionState::Loading {
            company: company.to_string(),
        };
        token
    }

    /// Deselect; any lookup still running is discarded when it lands.
    pub fn clear(&self) {
        let mut state = self.state.write();
        self.tracker.begin("");
        *state = SessionState::Idle;
    }

    /// Resolve the lookup for `token` and apply it if still current.
    ///
    /// The token is checked before the gateway call and again before the
    /// chart merge, so a superseded selection does neither.
    pub async fn load(&self, token: &SelectionToken) -> LoadOutcome {
        if !self.tracker.is_current(token) {
            debug!(
                "Skipping lookup for {} (generation {} superseded)",
                token.company(),
                token.generation()
            );
            return LoadOutcome::Stale;
        }

        let result = self.gateway.get(token.company()).await;

        if !self.tracker.is_current(token) {
            debug!(
                "Discarding lookup for {} (generation {})",
                token.company(),
                token.generation()
            );
            return LoadOutcome::Stale;
        }

        let next = match result {
            Ok(lookup) => SessionState::Ready(Box::new(dashboard_service::build_dashboard(
                token.company(),
                &lookup,
            ))),
            Err(e) => SessionState::Failed {
                company: token.company().to_string(),
                message: e.user_message(),
            },
        };

        self.commit(token, next)
    }

    pub async fn select_and_load(&self, company: &str) -> LoadOutcome {
        let token = self.select(company);
        self.load(&token).await
    }

    fn commit(&self, token: &SelectionToken, next: SessionState) -> LoadOutcome {
        let mut state = self.state.write();
        if !self.tracker.is_current(token) {
            return LoadOutcome::Stale;
        }
        info!("Dashboard updated for {}", token.company());
        *state = next;
        LoadOutcome::Applied
    }
}
