//! Backend for the company insight dashboard: a read-through cache in
//! front of the analytics origin, plus the transforms that turn its raw
//! payload into chart series, article lists and fundamentals.

pub mod app;
pub mod config;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
