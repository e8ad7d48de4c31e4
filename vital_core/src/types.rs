//! Core domain types for the Vital dashboard.
//!
//! This module defines the fundamental types used throughout the system:
//! - Profile measurements and their load state
//! - BMI results, classifications and plausibility limits
//! - Advisories emitted to the user
//! - Daily activity records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Profile Types
// ============================================================================

/// Height/weight snapshot for the current user
///
/// Height is in centimeters, weight in kilograms. Either may be absent
/// when the user has not filled in their profile.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileMeasurement {
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl ProfileMeasurement {
    pub fn new(height: f64, weight: f64) -> Self {
        Self {
            height: Some(height),
            weight: Some(weight),
        }
    }
}

/// Load state reported by the profile provider
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProfileSnapshot {
    /// Fetch has not completed yet
    NotLoaded,
    /// Fetch completed; fields may still be missing
    Loaded(ProfileMeasurement),
}

// ============================================================================
// Advisory Types
// ============================================================================

/// Severity of a user-facing advisory
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("info"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Reason a BMI could not be produced
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiIssue {
    /// Height or weight has not been provided
    MissingInput,
    /// Height or weight is zero, negative or not a number
    ZeroOrInvalidInput,
    /// Computed BMI is outside the plausible range
    ImplausibleResult,
}

impl BmiIssue {
    pub fn severity(self) -> Severity {
        match self {
            BmiIssue::MissingInput | BmiIssue::ZeroOrInvalidInput => Severity::Info,
            BmiIssue::ImplausibleResult => Severity::Error,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BmiIssue::MissingInput => {
                "height and weight have not been provided; BMI cannot be calculated"
            }
            BmiIssue::ZeroOrInvalidInput => "height or weight is zero or invalid",
            BmiIssue::ImplausibleResult => "height or weight is invalid to calculate BMI",
        }
    }
}

/// A short message for the notification sink
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Advisory {
    pub kind: BmiIssue,
    pub severity: Severity,
    pub message: String,
}

impl From<BmiIssue> for Advisory {
    fn from(kind: BmiIssue) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message: kind.message().to_string(),
        }
    }
}

// ============================================================================
// BMI Types
// ============================================================================

/// BMI classification label
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    NotAvailable,
    SevereMalnutrition,
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::NotAvailable => "N/A BMI",
            Classification::SevereMalnutrition => "Severe malnutrition",
            Classification::Underweight => "Underweight",
            Classification::NormalWeight => "Normal weight",
            Classification::Overweight => "Overweight",
            Classification::Obese => "Obese",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived BMI for one measurement
///
/// `value` is 0 exactly when no BMI could be computed, and in that case
/// `classification` is always [`Classification::NotAvailable`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BmiResult {
    pub value: u32,
    pub classification: Classification,
}

impl BmiResult {
    /// Result for a measurement that produced no BMI
    pub fn unavailable() -> Self {
        Self {
            value: 0,
            classification: Classification::NotAvailable,
        }
    }

    /// Build a result from a rounded BMI, classifying it
    pub fn from_value(value: u32) -> Self {
        Self {
            value,
            classification: crate::bmi::classify(f64::from(value)),
        }
    }

    pub fn is_available(&self) -> bool {
        self.value != 0
    }
}

impl Default for BmiResult {
    fn default() -> Self {
        Self::unavailable()
    }
}

/// Inclusive range of rounded BMI values accepted as plausible
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BmiLimits {
    #[serde(default = "default_min_plausible")]
    pub min_plausible: u32,

    #[serde(default = "default_max_plausible")]
    pub max_plausible: u32,
}

impl Default for BmiLimits {
    fn default() -> Self {
        Self {
            min_plausible: default_min_plausible(),
            max_plausible: default_max_plausible(),
        }
    }
}

impl BmiLimits {
    pub fn contains(&self, bmi: f64) -> bool {
        bmi >= f64::from(self.min_plausible) && bmi <= f64::from(self.max_plausible)
    }
}

fn default_min_plausible() -> u32 {
    10
}

fn default_max_plausible() -> u32 {
    60
}

// ============================================================================
// Daily Activity Types
// ============================================================================

/// Today's aggregated activity as reported by the backend
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DailyActivity {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Sleep duration in minutes
    #[serde(default)]
    pub sleep: f64,
    /// Energy intake in kcal
    #[serde(default)]
    pub calories: f64,
    /// Water intake in litres
    #[serde(default)]
    pub water: f64,
    /// Step count
    #[serde(default)]
    pub walking: f64,
    /// Exercise duration in minutes
    #[serde(default, alias = "activityTime")]
    pub activity_time: f64,
}
