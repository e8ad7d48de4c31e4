//! Dashboard state container.
//!
//! Owned by whichever layer drives the UI lifecycle. The fetch layer calls
//! [`Dashboard::on_profile`] when a profile load completes; nothing here
//! performs I/O.

use crate::{compute_bmi_with_limits, AdvisorySink, BmiLimits, BmiResult, ProfileSnapshot};

/// Current BMI state for the home dashboard
#[derive(Clone, Debug, Default)]
pub struct Dashboard {
    limits: BmiLimits,
    bmi: BmiResult,
}

impl Dashboard {
    pub fn new(limits: BmiLimits) -> Self {
        Self {
            limits,
            bmi: BmiResult::unavailable(),
        }
    }

    pub fn bmi(&self) -> &BmiResult {
        &self.bmi
    }

    /// Handle a completed (or pending) profile fetch
    ///
    /// `NotLoaded` leaves the current result untouched. A loaded snapshot
    /// replaces it with a fresh computation.
    pub fn on_profile<S>(&mut self, snapshot: ProfileSnapshot, sink: &mut S) -> &BmiResult
    where
        S: AdvisorySink + ?Sized,
    {
        match snapshot {
            ProfileSnapshot::NotLoaded => {
                tracing::debug!("Profile not loaded yet, keeping BMI {}", self.bmi.value);
            }
            ProfileSnapshot::Loaded(measurement) => {
                self.bmi = compute_bmi_with_limits(&measurement, &self.limits, sink);
                tracing::info!(
                    "BMI updated: {} ({})",
                    self.bmi.value,
                    self.bmi.classification
                );
            }
        }
        &self.bmi
    }
}
