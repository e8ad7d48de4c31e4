//! BMI engine: derivation, plausibility check and classification.
//!
//! Computation runs in a single pass over one measurement:
//! - Missing height or weight → info advisory, no BMI
//! - Zero, negative or non-finite height or weight → info advisory, no BMI
//! - Rounded BMI outside the plausible range → error advisory, no BMI
//!
//! Rounding is half away from zero (`f64::round`).

use crate::{
    Advisory, AdvisorySink, BmiIssue, BmiLimits, BmiResult, Classification, ProfileMeasurement,
};

/// Compute BMI with the default plausibility range of 10..=60
pub fn compute_bmi<S>(measurement: &ProfileMeasurement, sink: &mut S) -> BmiResult
where
    S: AdvisorySink + ?Sized,
{
    compute_bmi_with_limits(measurement, &BmiLimits::default(), sink)
}

/// Compute BMI for a measurement, emitting at most one advisory into `sink`
///
/// Never fails: every invalid input resolves to an unavailable result.
pub fn compute_bmi_with_limits<S>(
    measurement: &ProfileMeasurement,
    limits: &BmiLimits,
    sink: &mut S,
) -> BmiResult
where
    S: AdvisorySink + ?Sized,
{
    match evaluate(measurement, limits) {
        Ok(value) => {
            tracing::debug!("Computed BMI {} from {:?}", value, measurement);
            BmiResult::from_value(value)
        }
        Err(issue) => {
            tracing::debug!("No BMI for {:?}: {:?}", measurement, issue);
            sink.emit(&Advisory::from(issue));
            BmiResult::unavailable()
        }
    }
}

fn evaluate(measurement: &ProfileMeasurement, limits: &BmiLimits) -> Result<u32, BmiIssue> {
    let (height, weight) = match (measurement.height, measurement.weight) {
        (Some(height), Some(weight)) => (height, weight),
        _ => return Err(BmiIssue::MissingInput),
    };

    if !is_positive(height) || !is_positive(weight) {
        return Err(BmiIssue::ZeroOrInvalidInput);
    }

    let height_m = height / 100.0;
    let bmi = (weight / height_m.powi(2)).round();

    // A rounded zero is never a BMI, whatever the configured floor
    if bmi < 1.0 || !limits.contains(bmi) {
        return Err(BmiIssue::ImplausibleResult);
    }

    // In range, so the cast cannot truncate
    Ok(bmi as u32)
}

fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

/// Classify a BMI value
///
/// Boundaries belong to the upper bracket. Zero, negative values and the
/// gaps between 24.9/25 and 29.9/30 are not classified.
pub fn classify(value: f64) -> Classification {
    if value > 0.0 && value < 16.0 {
        Classification::SevereMalnutrition
    } else if (16.0..18.5).contains(&value) {
        Classification::Underweight
    } else if (18.5..=24.9).contains(&value) {
        Classification::NormalWeight
    } else if (25.0..=29.9).contains(&value) {
        Classification::Overweight
    } else if value >= 30.0 {
        Classification::Obese
    } else {
        Classification::NotAvailable
    }
}

/// Dashboard banner text for a result
///
/// The article is always "a" ("You have a Obese"), as the app shows it.
pub fn describe(result: &BmiResult) -> String {
    if result.is_available() {
        format!("You have a {}", result.classification)
    } else {
        "N/A".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Advisories, Severity};

    fn measurement(height: Option<f64>, weight: Option<f64>) -> ProfileMeasurement {
        ProfileMeasurement { height, weight }
    }

    #[test]
    fn test_missing_height_emits_info() {
        let mut sink = Advisories::new();
        let result = compute_bmi(&measurement(None, Some(70.0)), &mut sink);

        assert_eq!(result.value, 0);
        assert_eq!(result.classification, Classification::NotAvailable);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.items()[0].kind, BmiIssue::MissingInput);
        assert_eq!(sink.items()[0].severity, Severity::Info);
    }

    #[test]
    fn test_missing_both_emits_single_advisory() {
        let mut sink = Advisories::new();
        let result = compute_bmi(&measurement(None, None), &mut sink);

        assert_eq!(result.value, 0);
        assert_eq!(sink.len(), 1);
        assert_eq!(
            sink.items()[0].message,
            "height and weight have not been provided; BMI cannot be calculated"
        );
    }

    #[test]
    fn test_zero_weight_emits_info() {
        let mut sink = Advisories::new();
        let result = compute_bmi(&ProfileMeasurement::new(170.0, 0.0), &mut sink);

        assert_eq!(result.value, 0);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.items()[0].kind, BmiIssue::ZeroOrInvalidInput);
        assert_eq!(sink.items()[0].severity, Severity::Info);
        assert_eq!(sink.items()[0].message, "height or weight is zero or invalid");
    }

    #[test]
    fn test_negative_and_nan_are_invalid() {
        let mut sink = Advisories::new();
        compute_bmi(&ProfileMeasurement::new(-170.0, 70.0), &mut sink);
        compute_bmi(&ProfileMeasurement::new(170.0, f64::NAN), &mut sink);
        compute_bmi(&ProfileMeasurement::new(f64::INFINITY, 70.0), &mut sink);

        assert_eq!(sink.len(), 3);
        assert!(sink
            .items()
            .iter()
            .all(|a| a.kind == BmiIssue::ZeroOrInvalidInput));
    }

    #[test]
    fn test_normal_measurement() {
        let mut sink = Advisories::new();
        let result = compute_bmi(&ProfileMeasurement::new(170.0, 70.0), &mut sink);

        assert_eq!(result.value, 24);
        assert_eq!(result.classification, Classification::NormalWeight);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_implausible_result_emits_error() {
        let mut sink = Advisories::new();
        let result = compute_bmi(&ProfileMeasurement::new(50.0, 70.0), &mut sink);

        assert_eq!(result.value, 0);
        assert_eq!(result.classification, Classification::NotAvailable);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.items()[0].kind, BmiIssue::ImplausibleResult);
        assert_eq!(sink.items()[0].severity, Severity::Error);
        assert_eq!(
            sink.items()[0].message,
            "height or weight is invalid to calculate BMI"
        );
    }

    #[test]
    fn test_implausible_low_result() {
        let mut sink = Advisories::new();
        // 20 / 2^2 = 5
        let result = compute_bmi(&ProfileMeasurement::new(200.0, 20.0), &mut sink);

        assert_eq!(result.value, 0);
        assert_eq!(sink.items()[0].kind, BmiIssue::ImplausibleResult);
    }

    #[test]
    fn test_plausible_bounds_are_inclusive() {
        let mut sink = Advisories::new();
        // 40 / 2^2 = 10, 240 / 2^2 = 60
        assert_eq!(compute_bmi(&ProfileMeasurement::new(200.0, 40.0), &mut sink).value, 10);
        assert_eq!(compute_bmi(&ProfileMeasurement::new(200.0, 240.0), &mut sink).value, 60);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_half_rounds_up() {
        let mut sink = Advisories::new();
        // 98 / 2^2 = 24.5
        let result = compute_bmi(&ProfileMeasurement::new(200.0, 98.0), &mut sink);

        assert_eq!(result.value, 25);
        assert_eq!(result.classification, Classification::Overweight);
    }

    #[test]
    fn test_custom_limits() {
        let limits = BmiLimits {
            min_plausible: 20,
            max_plausible: 30,
        };
        let mut sink = Advisories::new();

        // 72 / 2^2 = 18
        let result = compute_bmi_with_limits(&ProfileMeasurement::new(200.0, 72.0), &limits, &mut sink);
        assert_eq!(result.value, 0);
        assert_eq!(sink.items()[0].kind, BmiIssue::ImplausibleResult);
    }

    #[test]
    fn test_rounded_zero_is_implausible_even_with_zero_floor() {
        let limits = BmiLimits {
            min_plausible: 0,
            max_plausible: 60,
        };
        let mut sink = Advisories::new();

        // 1 / 3^2 rounds to 0
        let result = compute_bmi_with_limits(&ProfileMeasurement::new(300.0, 1.0), &limits, &mut sink);

        assert_eq!(result.value, 0);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.items()[0].kind, BmiIssue::ImplausibleResult);
    }

    #[test]
    fn test_idempotent() {
        let m = ProfileMeasurement::new(182.0, 81.5);
        let mut first_sink = Advisories::new();
        let mut second_sink = Advisories::new();

        let first = compute_bmi(&m, &mut first_sink);
        let second = compute_bmi(&m, &mut second_sink);

        assert_eq!(first, second);
        assert_eq!(first_sink, second_sink);
    }

    #[test]
    fn test_idempotent_advisories_are_reemitted() {
        let m = ProfileMeasurement::new(170.0, 0.0);
        let mut sink = Advisories::new();

        let first = compute_bmi(&m, &mut sink);
        let second = compute_bmi(&m, &mut sink);

        assert_eq!(first, second);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.items()[0], sink.items()[1]);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.0), Classification::NotAvailable);
        assert_eq!(classify(15.0), Classification::SevereMalnutrition);
        assert_eq!(classify(16.0), Classification::Underweight);
        assert_eq!(classify(18.0), Classification::Underweight);
        assert_eq!(classify(18.5), Classification::NormalWeight);
        assert_eq!(classify(24.0), Classification::NormalWeight);
        assert_eq!(classify(25.0), Classification::Overweight);
        assert_eq!(classify(29.0), Classification::Overweight);
        assert_eq!(classify(30.0), Classification::Obese);
        assert_eq!(classify(60.0), Classification::Obese);
    }

    #[test]
    fn test_classify_unreachable_gaps() {
        assert_eq!(classify(-3.0), Classification::NotAvailable);
        assert_eq!(classify(24.95), Classification::NotAvailable);
        assert_eq!(classify(29.95), Classification::NotAvailable);
    }

    #[test]
    fn test_classification_labels() {
        assert_eq!(classify(0.0).to_string(), "N/A BMI");
        assert_eq!(classify(12.0).to_string(), "Severe malnutrition");
        assert_eq!(classify(30.0).to_string(), "Obese");
    }

    #[test]
    fn test_unavailable_iff_zero() {
        for value in 10..=60 {
            let result = BmiResult::from_value(value);
            assert_ne!(result.classification, Classification::NotAvailable);
        }
        assert_eq!(
            BmiResult::from_value(0).classification,
            Classification::NotAvailable
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&BmiResult::unavailable()), "N/A");
        assert_eq!(
            describe(&BmiResult::from_value(24)),
            "You have a Normal weight"
        );
        assert_eq!(describe(&BmiResult::from_value(35)), "You have a Obese");
    }
}
