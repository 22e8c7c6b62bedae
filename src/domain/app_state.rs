use serde::{Deserialize, Serialize};

use super::{journey::JourneySnapshot, metrics::MetricsSnapshot, subscriber::Subscriber};

/// Page sizes offered on the settings page.
pub const PAGE_SIZE_CHOICES: [usize; 3] = [5, 10, 25];

/// Colour scheme for the whole portal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn name(&self) -> &'static str {
        match self {
            Appearance::Light => "Light",
            Appearance::Dark => "Dark",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Appearance::Light => "☀️",
            Appearance::Dark => "🌙",
        }
    }
}

/// User preferences persisted between sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_sidebar_open() -> bool {
    true
}

fn default_page_size() -> usize {
    10
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            appearance: Appearance::default(),
            sidebar_open: default_sidebar_open(),
            page_size: default_page_size(),
        }
    }
}

impl Preferences {
    /// Falls back to the default page size when a stored value is not one of the offered choices.
    pub fn normalized(mut self) -> Self {
        if !PAGE_SIZE_CHOICES.contains(&self.page_size) {
            self.page_size = default_page_size();
        }
        self
    }
}

/// Everything the dashboard displays, fetched once from a data source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub subscribers: Vec<Subscriber>,
    /// Rows on the dashboard's recent-subscriber card, in source order.
    pub recent_subscribers: Vec<Subscriber>,
    pub journey: JourneySnapshot,
    pub metrics: MetricsSnapshot,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub preferences: Preferences,
    /// Current sidebar visibility; starts from the preference, toggled per session.
    pub sidebar_open: bool,
    pub data: DashboardData,
}

impl AppState {
    pub fn new(preferences: Preferences) -> Self {
        let preferences = preferences.normalized();
        Self {
            sidebar_open: preferences.sidebar_open,
            preferences,
            data: DashboardData::default(),
        }
    }

    pub fn appearance(&self) -> Appearance {
        self.preferences.appearance
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"appearance":"Dark"}"#).unwrap();
        assert_eq!(prefs.appearance, Appearance::Dark);
        assert!(prefs.sidebar_open);
        assert_eq!(prefs.page_size, 10);
    }

    #[test]
    fn unsupported_page_size_is_normalized() {
        let state = AppState::new(Preferences {
            page_size: 7,
            sidebar_open: false,
            ..Preferences::default()
        });
        assert_eq!(state.preferences.page_size, 10);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn sidebar_toggle_does_not_touch_preference() {
        let mut state = AppState::new(Preferences::default());
        state.toggle_sidebar();
        assert!(!state.sidebar_open);
        assert!(state.preferences.sidebar_open);
    }
}
