//! Wage Growth versus CPI Engine
//!
//! This crate compares public-sector wage growth against inflation (CPI)
//! and projects salaries forward, comparing a CPI-compounded salary with the
//! one an agency's pay outcomes actually deliver.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
