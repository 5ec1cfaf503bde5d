//! Response types for the wage/CPI comparison API.
//!
//! This module defines the agency listing, the error response structures and
//! error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Summary of one agency for the `/agencies` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencySummary {
    /// The agency code used in requests.
    pub code: String,
    /// The agency's display name.
    pub name: String,
    /// The years with wage-growth data, ascending.
    pub years: Vec<i32>,
    /// The classification levels with salary data.
    pub levels: Vec<String>,
}

/// Response body for the `/agencies` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyListResponse {
    /// All agencies, ordered by code.
    pub agencies: Vec<AgencySummary>,
    /// Attribution for the CPI figures.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cpi_source: Option<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an agency not found error response.
    pub fn agency_not_found(code: &str) -> Self {
        Self::with_details(
            "AGENCY_NOT_FOUND",
            format!("Agency not found: {}", code),
            format!("The agency code '{}' is not in the reference data", code),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidDataset { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid reference data", message),
            },
            EngineError::UnknownAgency { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::agency_not_found(&code),
            },
            EngineError::SalaryNotFound {
                agency,
                level,
                step,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SALARY_NOT_FOUND",
                    format!(
                        "Salary not found for agency '{}' level '{}' step '{}'",
                        agency, level, step
                    ),
                    "Supply starting_salary or choose a level and step with salary data",
                ),
            },
            EngineError::SalaryOutOfRange { year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SALARY_OUT_OF_RANGE",
                    format!("Projected salary out of range in {}", year),
                    "Use a smaller starting_salary",
                ),
            },
        }
    }
}
