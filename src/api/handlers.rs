//! HTTP request handlers for the wage/CPI comparison API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    filter_classification_series, filter_series, project_salary, resolve_starting_salary,
    select_projection_mode,
};
use crate::config::AgencyDataset;
use crate::error::EngineResult;
use crate::models::{ProjectionMode, ProjectionParams, ProjectionResult, SeriesResult};

use super::request::{ProjectionRequest, SeriesRequest};
use super::response::{AgencyListResponse, AgencySummary, ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/agencies", get(agencies_handler))
        .route("/series", post(series_handler))
        .route("/projection", post(projection_handler))
        .with_state(state)
}

/// Handler for GET /agencies endpoint.
///
/// Lists every agency with the years and classification levels it has data for.
async fn agencies_handler(State(state): State<AppState>) -> Response {
    let dataset = state.dataset();

    let agencies = dataset
        .agency_codes()
        .into_iter()
        .filter_map(|code| {
            let agency = dataset.agency(code).ok()?;
            Some(AgencySummary {
                code: code.to_string(),
                name: agency.display_name.clone(),
                years: agency.years(),
                levels: dataset.levels(code),
            })
        })
        .collect();

    json_response(
        StatusCode::OK,
        &AgencyListResponse {
            agencies,
            cpi_source: state.loader().cpi_source().map(str::to_string),
        },
    )
}

/// Handler for POST /series endpoint.
///
/// Accepts a year window and returns the wage growth versus CPI series.
async fn series_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeriesRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing series request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match build_series(&request, state.dataset()) {
        Ok(mut result) => {
            result.duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                agency = %result.agency_code,
                points = result.points.len(),
                duration_us = result.duration_us,
                "Series completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Series failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /projection endpoint.
///
/// Accepts a starting point and returns the expected-versus-actual salary
/// projection.
async fn projection_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing projection request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match build_projection(&request, state.dataset()) {
        Ok(mut result) => {
            result.duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                agency = %result.agency_code,
                starting_salary = %result.starting_salary.amount,
                points = result.points.len(),
                duration_us = result.duration_us,
                "Projection completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Projection failed"
            );
            error_response(err.into())
        }
    }
}

/// Computes the comparison series for a request.
///
/// Wage growth is derived from the salary schedule when the request names a
/// classification the agency has a schedule for.
fn build_series(request: &SeriesRequest, dataset: &AgencyDataset) -> EngineResult<SeriesResult> {
    let agency = dataset.agency(&request.agency)?;
    let mode = select_projection_mode(
        dataset,
        &request.agency,
        request.level.as_deref(),
        request.step.as_deref(),
    );

    let (points, level, step) = match mode {
        ProjectionMode::SalaryTable { level, step } => {
            let points = filter_classification_series(
                dataset,
                &request.agency,
                &level,
                &step,
                request.start_year,
                request.end_year,
            )?;
            (points, Some(level), Some(step))
        }
        ProjectionMode::WageGrowth => (
            filter_series(dataset, &request.agency, request.start_year, request.end_year)?,
            None,
            None,
        ),
    };

    Ok(SeriesResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        agency_code: request.agency.clone(),
        agency_name: agency.display_name.clone(),
        level,
        step,
        points,
        duration_us: 0,
    })
}

/// Computes the salary projection for a request.
fn build_projection(
    request: &ProjectionRequest,
    dataset: &AgencyDataset,
) -> EngineResult<ProjectionResult> {
    let agency = dataset.agency(&request.agency)?;
    let level = request.level.as_deref();
    let step = request.step.as_deref();

    let starting_salary = resolve_starting_salary(
        dataset,
        &request.agency,
        request.projection_start_year,
        level,
        step,
        request.starting_salary,
    )?;

    let params = ProjectionParams {
        agency_code: request.agency.clone(),
        starting_salary: starting_salary.amount,
        projection_start_year: request.projection_start_year,
        end_year: request.end_year,
        current_year: request.current_year.unwrap_or_else(|| Utc::now().year()),
        mode: select_projection_mode(dataset, &request.agency, level, step),
    };
    let points = project_salary(dataset, &params)?;

    Ok(ProjectionResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        agency_code: params.agency_code,
        agency_name: agency.display_name.clone(),
        starting_salary,
        mode: params.mode,
        points,
        duration_us: 0,
    })
}

/// Serializes a body with an explicit JSON content type.
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Converts an engine error into its HTTP response.
fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, &error)
}
