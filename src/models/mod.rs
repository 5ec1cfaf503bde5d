//! Core data models for the wage/CPI comparison engine.
//!
//! This module contains the value objects produced by the calculations and
//! the parameter structs that select what to compute.

mod comparison;
mod projection;

pub use comparison::{ComparisonPoint, SeriesResult};
pub use projection::{
    ProjectionMode, ProjectionParams, ProjectionPoint, ProjectionResult, SalarySource,
    StartingSalary,
};
