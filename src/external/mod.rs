pub mod analytics_api;
pub mod analytics_provider;
