use serde::{Deserialize, Serialize};

use super::table::{RowId, TableRecord};

/// Where a subscriber currently sits in the onboarding pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriberStatus {
    #[serde(rename = "Signed Up")]
    SignedUp,
    #[serde(rename = "Install Scheduled")]
    InstallScheduled,
    Connected,
}

impl SubscriberStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubscriberStatus::SignedUp => "Signed Up",
            SubscriberStatus::InstallScheduled => "Install Scheduled",
            SubscriberStatus::Connected => "Connected",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Signed Up" => Some(SubscriberStatus::SignedUp),
            "Install Scheduled" => Some(SubscriberStatus::InstallScheduled),
            "Connected" => Some(SubscriberStatus::Connected),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: RowId,
    pub name: String,
    pub address: String,
    pub status: SubscriberStatus,
    /// ISO date as captured at signup, displayed verbatim.
    pub signup_date: String,
    pub zone: String,
    /// Absent from the dashboard's recent list, which folds the city into the address.
    #[serde(default)]
    pub city: String,
}

impl Subscriber {
    /// Case-insensitive match against the fields an operator searches by.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.name, &self.address, &self.city, &self.zone]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl TableRecord for Subscriber {
    fn row_id(&self) -> RowId {
        self.id
    }

    fn field(&self, accessor: &str) -> Option<String> {
        let value = match accessor {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "address" => self.address.clone(),
            "status" => self.status.label().to_string(),
            "signupDate" => self.signup_date.clone(),
            "zone" => self.zone.clone(),
            "city" => self.city.clone(),
            _ => return None,
        };
        Some(value)
    }
}

/// Tabs on the dashboard's recent-subscriber card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTab {
    #[default]
    All,
    Connected,
    Scheduled,
    SignedUp,
}

impl StatusTab {
    pub const ALL: [StatusTab; 4] = [
        StatusTab::All,
        StatusTab::Connected,
        StatusTab::Scheduled,
        StatusTab::SignedUp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusTab::All => "All",
            StatusTab::Connected => "Connected",
            StatusTab::Scheduled => "Scheduled",
            StatusTab::SignedUp => "Signed Up",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            StatusTab::All => "all",
            StatusTab::Connected => "connected",
            StatusTab::Scheduled => "scheduled",
            StatusTab::SignedUp => "signed-up",
        }
    }

    pub fn admits(&self, status: SubscriberStatus) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Connected => status == SubscriberStatus::Connected,
            StatusTab::Scheduled => status == SubscriberStatus::InstallScheduled,
            StatusTab::SignedUp => status == SubscriberStatus::SignedUp,
        }
    }
}

pub fn filter_by_tab(rows: &[Subscriber], tab: StatusTab) -> Vec<Subscriber> {
    rows.iter()
        .filter(|row| tab.admits(row.status))
        .cloned()
        .collect()
}

pub fn search_subscribers(rows: &[Subscriber], query: &str) -> Vec<Subscriber> {
    rows.iter()
        .filter(|row| row.matches_query(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber(id: RowId, name: &str, status: SubscriberStatus, city: &str) -> Subscriber {
        Subscriber {
            id,
            name: name.to_string(),
            address: format!("{id}00 Main St"),
            status,
            signup_date: "2023-05-15".to_string(),
            zone: "North".to_string(),
            city: city.to_string(),
        }
    }

    fn recent() -> Vec<Subscriber> {
        vec![
            subscriber(1, "John Doe", SubscriberStatus::Connected, "Springfield"),
            subscriber(2, "Jane Smith", SubscriberStatus::InstallScheduled, "Springfield"),
            subscriber(3, "Robert Johnson", SubscriberStatus::SignedUp, "Riverdale"),
            subscriber(4, "Emily Davis", SubscriberStatus::Connected, "Springfield"),
            subscriber(5, "Michael Wilson", SubscriberStatus::InstallScheduled, "Riverdale"),
        ]
    }

    #[test]
    fn connected_tab_keeps_relative_order() {
        let names: Vec<_> = filter_by_tab(&recent(), StatusTab::Connected)
            .into_iter()
            .map(|row| row.name)
            .collect();
        assert_eq!(names, vec!["John Doe", "Emily Davis"]);
    }

    #[test]
    fn all_tab_admits_every_row() {
        assert_eq!(filter_by_tab(&recent(), StatusTab::All).len(), 5);
        assert_eq!(filter_by_tab(&recent(), StatusTab::SignedUp)[0].id, 3);
    }

    #[test]
    fn search_is_case_insensitive_and_blank_matches_all() {
        let rows = recent();
        let hits = search_subscribers(&rows, "RIVERdale");
        assert_eq!(hits.iter().map(|row| row.id).collect::<Vec<_>>(), vec![3, 5]);
        assert_eq!(search_subscribers(&rows, "   ").len(), 5);
        assert!(search_subscribers(&rows, "nobody").is_empty());
    }

    #[test]
    fn status_labels_round_trip_through_fields() {
        let row = &recent()[1];
        assert_eq!(row.field("status").as_deref(), Some("Install Scheduled"));
        assert_eq!(
            SubscriberStatus::from_label("Install Scheduled"),
            Some(SubscriberStatus::InstallScheduled)
        );
        assert_eq!(row.field("signupDate").as_deref(), Some("2023-05-15"));
        assert_eq!(row.field("unknown"), None);
    }
}
