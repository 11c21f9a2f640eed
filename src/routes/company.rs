use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{
    all_companies, find_by_symbol, Company, CompanyDataRequest, DashboardView, LookupResult,
};
use crate::services::dashboard_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/company-data", post(company_data))
        .route("/companies", get(list_companies))
        .route("/companies/:symbol/dashboard", get(company_dashboard))
        .route("/dashboard", get(dashboard_by_name))
}

/// POST /api/company-data
/// Body: {"companyName": "..."}; the name is the cache key, verbatim.
pub async fn company_data(
    State(state): State<AppState>,
    Json(request): Json<CompanyDataRequest>,
) -> Result<Json<LookupResult>, AppError> {
    let name = require_name(&request.company_name)?;
    info!("POST /company-data - Lookup for {}", name);

    let result = state.gateway.get(name).await.map_err(|e| {
        error!("Company data lookup failed for {}: {}", name, e);
        e
    })?;

    info!("Served {} from {}", name, result.source);
    Ok(Json(result))
}

/// GET /api/companies
pub async fn list_companies() -> Json<&'static [Company]> {
    Json(all_companies())
}

/// GET /api/companies/:symbol/dashboard
pub async fn company_dashboard(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, AppError> {
    let company = find_by_symbol(&symbol)
        .ok_or_else(|| AppError::NotFound(format!("Company {}", symbol)))?;
    info!("GET /companies/{}/dashboard - {}", company.symbol, company.name);

    dashboard_for(&state, company.name).await
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub company: Option<String>,
}

/// GET /api/dashboard?company=<name>
pub async fn dashboard_by_name(
    Query(query): Query<DashboardQuery>,
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, AppError> {
    let name = require_name(query.company.as_deref().unwrap_or_default())?;
    info!("GET /dashboard - {}", name);

    dashboard_for(&state, name).await
}

async fn dashboard_for(state: &AppState, name: &str) -> Result<Json<DashboardView>, AppError> {
    let lookup = state.gateway.get(name).await.map_err(|e| {
        error!("Dashboard lookup failed for {}: {}", name, e);
        e
    })?;

    Ok(Json(dashboard_service::build_dashboard(name, &lookup)))
}

fn require_name(name: &str) -> Result<&str, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("companyName is required".to_string()));
    }
    Ok(name)
}
