use serde::{Deserialize, Serialize};

/// Headline numbers for the overview cards. Trends are signed month-over-month percentages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_subscribers: u64,
    pub pending_installations: u64,
    pub devices_online: u64,
    pub devices_offline: u64,
    pub active_zones: u64,
    #[serde(default)]
    pub subscribers_trend: f64,
    #[serde(default)]
    pub installations_trend: f64,
    #[serde(default)]
    pub devices_trend: f64,
    #[serde(default)]
    pub zones_trend: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricCardData {
    pub title: String,
    pub value: String,
    pub trend: f64,
    pub icon: &'static str,
    pub description: Option<String>,
}

impl MetricsSnapshot {
    pub fn cards(&self) -> Vec<MetricCardData> {
        let devices_total = self.devices_online + self.devices_offline;
        vec![
            MetricCardData {
                title: "Total Subscribers".to_string(),
                value: group_thousands(self.total_subscribers),
                trend: self.subscribers_trend,
                icon: "👥",
                description: None,
            },
            MetricCardData {
                title: "Pending Installations".to_string(),
                value: self.pending_installations.to_string(),
                trend: self.installations_trend,
                icon: "📅",
                description: Some("Awaiting scheduling".to_string()),
            },
            MetricCardData {
                title: "Devices Online".to_string(),
                value: format!("{} / {}", self.devices_online, group_thousands(devices_total)),
                trend: self.devices_trend,
                icon: "📶",
                description: Some("Online / Total".to_string()),
            },
            MetricCardData {
                title: "Active Zones".to_string(),
                value: self.active_zones.to_string(),
                trend: self.zones_trend,
                icon: "📍",
                description: Some("Service areas".to_string()),
            },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

/// `None` suppresses the trend row entirely.
pub fn trend_direction(trend: f64) -> Option<TrendDirection> {
    if trend == 0.0 {
        None
    } else if trend > 0.0 {
        Some(TrendDirection::Up)
    } else {
        Some(TrendDirection::Down)
    }
}

pub fn trend_label(trend: f64) -> String {
    format!("{}% from last month", trend.abs())
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MetricsSnapshot {
        MetricsSnapshot {
            total_subscribers: 1248,
            pending_installations: 42,
            devices_online: 876,
            devices_offline: 124,
            active_zones: 16,
            subscribers_trend: 12.5,
            installations_trend: -4.2,
            devices_trend: 8.7,
            zones_trend: 0.0,
        }
    }

    #[test]
    fn cards_render_overview_values() {
        let cards = snapshot().cards();
        let values: Vec<_> = cards.iter().map(|card| card.value.as_str()).collect();
        assert_eq!(values, vec!["1,248", "42", "876 / 1,000", "16"]);
        assert_eq!(cards[0].description, None);
        assert_eq!(cards[3].description.as_deref(), Some("Service areas"));
    }

    #[test]
    fn trend_sign_picks_direction_and_zero_hides_it() {
        assert_eq!(trend_direction(12.5), Some(TrendDirection::Up));
        assert_eq!(trend_direction(-4.2), Some(TrendDirection::Down));
        assert_eq!(trend_direction(0.0), None);
        assert_eq!(trend_label(-4.2), "4.2% from last month");
        assert_eq!(trend_label(8.0), "8% from last month");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
