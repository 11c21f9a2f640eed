use crate::services::cache_gateway::CacheGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: CacheGateway,
}
