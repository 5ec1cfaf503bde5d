//! HTTP API module for the wage/CPI comparison engine.
//!
//! This module provides the REST API endpoints for listing agencies,
//! comparing wage growth with CPI and projecting salaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ProjectionRequest, SeriesRequest};
pub use response::{AgencyListResponse, AgencySummary, ApiError};
pub use state::AppState;
