pub mod article_service;
pub mod cache_gateway;
pub mod cache_store;
pub mod chart_service;
pub mod dashboard_service;
pub mod fundamentals_service;
pub mod selection;

#[cfg(test)]
pub(crate) mod testing;
