//! Feature modules implementing the PPR API
//!
//! Each feature is organized as a vertical slice with its own commands,
//! queries, and routes:
//!
//! - **reports**: audit export upload, report generation, report download
//!
//! Commands are write operations (POST), queries are read operations (GET);
//! both follow the `validate()` + `handle()` shape.

pub mod reports;

use crate::store::ReportStore;
use axum::Router;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// In-memory store of generated report bundles
    pub store: ReportStore,
}

/// Creates the main API router with all feature routes mounted
///
/// Each feature is mounted under its own path prefix:
/// - `/reports` - report generation and download
pub fn router(state: FeatureState) -> Router<()> {
    Router::new().nest("/reports", reports::reports_routes().with_state(state.store))
}
