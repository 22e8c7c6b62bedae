use serde::{Deserialize, Serialize};

/// Stage id treated as the terminal "fully connected" step.
pub const CONNECTED_STAGE_ID: &str = "connected";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStage {
    pub id: String,
    pub name: String,
    pub count: u64,
    pub icon: String,
    /// Background class for the stage marker, e.g. `bg-blue-500`.
    pub color_tag: String,
}

/// Funnel stages plus the customer total every percentage is taken against.
/// Stage counts are independent of each other and need not sum to the total.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySnapshot {
    pub stages: Vec<JourneyStage>,
    pub total_customers: u64,
}

impl JourneySnapshot {
    pub fn connected_count(&self) -> u64 {
        self.stages
            .iter()
            .find(|stage| stage.id == CONNECTED_STAGE_ID)
            .map(|stage| stage.count)
            .unwrap_or(0)
    }

    /// Unrounded share used for the progress bar.
    pub fn connected_share(&self) -> f64 {
        share_of_total(self.connected_count(), self.total_customers)
    }

    pub fn connected_percentage(&self) -> f64 {
        rounded_percentage(self.connected_count(), self.total_customers)
    }

    /// Each stage against the total, in the given order.
    pub fn stage_percentages(&self) -> Vec<(&JourneyStage, f64)> {
        self.stages
            .iter()
            .map(|stage| (stage, rounded_percentage(stage.count, self.total_customers)))
            .collect()
    }
}

/// `count / total * 100` with plain float semantics: a zero total yields NaN or infinity.
pub fn share_of_total(count: u64, total: u64) -> f64 {
    count as f64 / total as f64 * 100.0
}

pub fn rounded_percentage(count: u64, total: u64) -> f64 {
    share_of_total(count, total).round()
}

/// Renders a percentage number the way a browser would print it, so
/// non-finite values show up as `NaN` / `Infinity` instead of Rust's `inf`.
pub fn format_percentage(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{value}")
    }
}

/// CSS width for a progress bar. Out-of-range values are clamped and NaN draws
/// an empty bar; infinities are written through and left for the renderer to ignore.
pub fn progress_width(value: f64) -> String {
    if value.is_nan() {
        "width: 0%".to_string()
    } else if value.is_finite() {
        format!("width: {}%", value.clamp(0.0, 100.0))
    } else {
        format!("width: {}%", format_percentage(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(id: &str, name: &str, count: u64) -> JourneyStage {
        JourneyStage {
            id: id.to_string(),
            name: name.to_string(),
            count,
            icon: "•".to_string(),
            color_tag: "bg-blue-500".to_string(),
        }
    }

    fn funnel(total: u64) -> JourneySnapshot {
        JourneySnapshot {
            stages: vec![
                stage("signed-up", "Signed Up", 42),
                stage("scheduled", "Install Scheduled", 28),
                stage(CONNECTED_STAGE_ID, "Device Connected", 16),
            ],
            total_customers: total,
        }
    }

    #[test]
    fn connected_percentage_rounds_share() {
        let snapshot = funnel(86);
        assert_eq!(snapshot.connected_count(), 16);
        assert_eq!(snapshot.connected_percentage(), 19.0);
        assert!((snapshot.connected_share() - 18.604_651).abs() < 1e-5);
        assert_eq!(format_percentage(snapshot.connected_percentage()), "19");
    }

    #[test]
    fn stage_percentages_are_independent_of_each_other() {
        let snapshot = funnel(86);
        let values: Vec<_> = snapshot
            .stage_percentages()
            .into_iter()
            .map(|(stage, pct)| (stage.id.clone(), pct))
            .collect();
        assert_eq!(
            values,
            vec![
                ("signed-up".to_string(), 49.0),
                ("scheduled".to_string(), 33.0),
                ("connected".to_string(), 19.0),
            ]
        );
    }

    #[test]
    fn missing_connected_stage_counts_as_zero() {
        let snapshot = JourneySnapshot {
            stages: vec![stage("signed-up", "Signed Up", 10)],
            total_customers: 40,
        };
        assert_eq!(snapshot.connected_count(), 0);
        assert_eq!(snapshot.connected_percentage(), 0.0);
    }

    #[test]
    fn zero_total_stays_non_finite() {
        let snapshot = funnel(0);
        assert!(snapshot.connected_percentage().is_infinite());
        assert_eq!(format_percentage(snapshot.connected_percentage()), "Infinity");

        let empty = JourneySnapshot::default();
        assert!(empty.connected_percentage().is_nan());
        assert_eq!(format_percentage(empty.connected_percentage()), "NaN");
        assert_eq!(progress_width(empty.connected_share()), "width: 0%");
    }

    #[test]
    fn progress_bar_is_empty_without_a_share() {
        let no_connected = JourneySnapshot {
            stages: vec![stage("signed-up", "Signed Up", 0)],
            total_customers: 0,
        };
        assert_eq!(progress_width(no_connected.connected_share()), "width: 0%");
        assert_eq!(progress_width(funnel(0).connected_share()), "width: Infinity%");
    }

    #[test]
    fn progress_width_clamps_finite_values() {
        assert_eq!(progress_width(150.0), "width: 100%");
        assert_eq!(progress_width(12.5), "width: 12.5%");
    }
}
