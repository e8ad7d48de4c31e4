//! "Today status" cells derived from a daily activity record.

use crate::DailyActivity;

const DEFAULT_JOINER: &str = " / ";

/// One status tile: a label plus value/unit pairs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusCell {
    pub kind: &'static str,
    pub values: Vec<(String, &'static str)>,
    pub joiner: &'static str,
}

impl StatusCell {
    fn new(kind: &'static str, values: Vec<(String, &'static str)>) -> Self {
        Self {
            kind,
            values,
            joiner: DEFAULT_JOINER,
        }
    }

    fn joined_with(mut self, joiner: &'static str) -> Self {
        self.joiner = joiner;
        self
    }

    /// Render as `"{value} {unit}"` pairs separated by the joiner
    pub fn render(&self) -> String {
        self.values
            .iter()
            .map(|(value, unit)| format!("{} {}", value, unit))
            .collect::<Vec<_>>()
            .join(self.joiner)
    }
}

/// Format with a fixed number of decimals, rounding ties away from zero
///
/// Matches the dashboard's `toFixed` output; plain `{:.N}` rounds ties to even.
fn to_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals, rounded)
}

/// Whole hours and the remaining (possibly fractional) minutes
fn split_duration(total_minutes: f64) -> (f64, f64) {
    ((total_minutes / 60.0).floor(), total_minutes % 60.0)
}

/// Build the sleep, calories & water, walking and activities cells
pub fn status_cells(activity: &DailyActivity) -> Vec<StatusCell> {
    let (sleep_h, sleep_m) = split_duration(activity.sleep);
    let (active_h, active_m) = split_duration(activity.activity_time);

    vec![
        StatusCell::new(
            "Sleep",
            vec![(to_fixed(sleep_h, 0), "h"), (to_fixed(sleep_m, 0), "m")],
        )
        .joined_with(" "),
        StatusCell::new(
            "Calories & Water",
            vec![
                (to_fixed(activity.calories, 0), "kCal"),
                (to_fixed(activity.water, 2), "L"),
            ],
        ),
        // Step counts print as-is, fractions included
        StatusCell::new("Walking", vec![(activity.walking.to_string(), "step")]),
        StatusCell::new(
            "Activities",
            vec![(to_fixed(active_h, 0), "h"), (to_fixed(active_m, 0), "m")],
        )
        .joined_with(" "),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_activity() -> DailyActivity {
        DailyActivity {
            date: None,
            sleep: 485.0,
            calories: 1234.6,
            water: 1.5,
            walking: 4200.0,
            activity_time: 45.0,
        }
    }

    #[test]
    fn test_cell_order() {
        let kinds: Vec<_> = status_cells(&sample_activity())
            .iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(kinds, vec!["Sleep", "Calories & Water", "Walking", "Activities"]);
    }

    #[test]
    fn test_rendered_values() {
        let rendered: Vec<_> = status_cells(&sample_activity())
            .iter()
            .map(StatusCell::render)
            .collect();

        assert_eq!(rendered[0], "8 h 5 m");
        assert_eq!(rendered[1], "1235 kCal / 1.50 L");
        assert_eq!(rendered[2], "4200 step");
        assert_eq!(rendered[3], "0 h 45 m");
    }

    #[test]
    fn test_empty_day() {
        let cells = status_cells(&DailyActivity::default());
        assert_eq!(cells[0].render(), "0 h 0 m");
        assert_eq!(cells[1].render(), "0 kCal / 0.00 L");
        assert_eq!(cells[2].render(), "0 step");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        let activity = DailyActivity {
            calories: 1234.5,
            water: 0.125,
            ..DailyActivity::default()
        };

        let cells = status_cells(&activity);
        assert_eq!(cells[1].render(), "1235 kCal / 0.13 L");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(2.4, 0), "2");
        assert_eq!(to_fixed(1.5, 2), "1.50");
        assert_eq!(to_fixed(0.0, 2), "0.00");
    }

    #[test]
    fn test_fractional_minutes_and_steps() {
        let activity = DailyActivity {
            sleep: 485.5,
            walking: 4200.5,
            activity_time: 59.4,
            ..DailyActivity::default()
        };

        let rendered: Vec<_> = status_cells(&activity)
            .iter()
            .map(StatusCell::render)
            .collect();

        // 485.5 min = 8 h 5.5 m, the half rounds up
        assert_eq!(rendered[0], "8 h 6 m");
        assert_eq!(rendered[2], "4200.5 step");
        assert_eq!(rendered[3], "0 h 59 m");
    }
}
