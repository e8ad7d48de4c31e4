#![forbid(unsafe_code)]

//! Core domain model and derived-value logic for the Vital health dashboard.
//!
//! This crate provides:
//! - Domain types (profile measurements, BMI results, advisories, daily activity)
//! - BMI engine and classification
//! - Duration formatting and daily status cells
//! - Advisory sinks (in-memory, tracing, JSONL log)
//! - Profile/activity loading and the dashboard state container

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod bmi;
pub mod format;
pub mod status;
pub mod advisory;
pub mod profile;
pub mod dashboard;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use bmi::{classify, compute_bmi, compute_bmi_with_limits, describe};
pub use format::{format_minutes, split_minutes};
pub use status::{status_cells, StatusCell};
pub use advisory::{read_advisories, AdvisorySink, Advisories, JsonlAdvisorySink, TracingSink};
pub use profile::{load_activity, load_profile};
pub use dashboard::Dashboard;
