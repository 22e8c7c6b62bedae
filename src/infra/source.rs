//! Data sources feeding the dashboard. Presentation code only sees
//! [`DashboardData`]; where the records come from stays behind this trait.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    domain::{DashboardData, JourneySnapshot, MetricsSnapshot, Subscriber},
    util::assets,
};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("fixture {0} is not bundled")]
    MissingFixture(&'static str),
    #[error("failed to decode {fixture}: {source}")]
    Decode {
        fixture: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub trait DashboardSource {
    fn fetch_subscribers(&self) -> Result<Vec<Subscriber>, SourceError>;
    fn fetch_recent_subscribers(&self) -> Result<Vec<Subscriber>, SourceError>;
    fn fetch_journey(&self) -> Result<JourneySnapshot, SourceError>;
    fn fetch_metrics(&self) -> Result<MetricsSnapshot, SourceError>;

    fn load_all(&self) -> Result<DashboardData, SourceError> {
        Ok(DashboardData {
            subscribers: self.fetch_subscribers()?,
            recent_subscribers: self.fetch_recent_subscribers()?,
            journey: self.fetch_journey()?,
            metrics: self.fetch_metrics()?,
        })
    }
}

const SUBSCRIBERS_FIXTURE: &str = "subscribers.json";
const RECENT_SUBSCRIBERS_FIXTURE: &str = "recent_subscribers.json";
const JOURNEY_FIXTURE: &str = "journey.json";
const METRICS_FIXTURE: &str = "metrics.json";

/// Mock data bundled under `assets/mock/`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    fn decode<T: DeserializeOwned>(&self, fixture: &'static str) -> Result<T, SourceError> {
        let bytes = assets::fixture(fixture).ok_or(SourceError::MissingFixture(fixture))?;
        debug!(fixture, bytes = bytes.len(), "decoding embedded fixture");
        decode_fixture(fixture, &bytes)
    }
}

impl DashboardSource for EmbeddedSource {
    fn fetch_subscribers(&self) -> Result<Vec<Subscriber>, SourceError> {
        self.decode(SUBSCRIBERS_FIXTURE)
    }

    fn fetch_recent_subscribers(&self) -> Result<Vec<Subscriber>, SourceError> {
        self.decode(RECENT_SUBSCRIBERS_FIXTURE)
    }

    fn fetch_journey(&self) -> Result<JourneySnapshot, SourceError> {
        self.decode(JOURNEY_FIXTURE)
    }

    fn fetch_metrics(&self) -> Result<MetricsSnapshot, SourceError> {
        self.decode(METRICS_FIXTURE)
    }
}

fn decode_fixture<T: DeserializeOwned>(fixture: &'static str, bytes: &[u8]) -> Result<T, SourceError> {
    serde_json::from_slice(bytes).map_err(|source| SourceError::Decode { fixture, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{filter_by_tab, StatusTab, SubscriberStatus};

    #[test]
    fn embedded_fixtures_reproduce_dashboard_defaults() {
        let data = EmbeddedSource.load_all().unwrap();

        assert_eq!(data.metrics.total_subscribers, 1248);
        assert_eq!(data.metrics.devices_online + data.metrics.devices_offline, 1000);
        assert_eq!(data.metrics.installations_trend, -4.2);

        assert_eq!(data.journey.total_customers, 86);
        assert_eq!(data.journey.connected_count(), 16);
        assert_eq!(data.journey.stages.len(), 3);

        let recent = &data.recent_subscribers;
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].name, "John Doe");
        assert_eq!(recent[0].address, "123 Main St, Anytown");
        assert_eq!(recent[1].signup_date, "2023-05-18");
        assert_eq!(recent[4].status, SubscriberStatus::InstallScheduled);
        assert!(recent.iter().all(|row| row.city.is_empty()));
        let connected: Vec<_> = filter_by_tab(recent, StatusTab::Connected)
            .into_iter()
            .map(|row| row.name)
            .collect();
        assert_eq!(connected, vec!["John Doe", "Emily Davis"]);
    }

    #[test]
    fn subscriber_ids_are_unique() {
        let rows = EmbeddedSource.fetch_subscribers().unwrap();
        let mut ids: Vec<_> = rows.iter().map(|row| row.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rows.len());
        assert!(rows.len() > 10);
        assert!(rows.iter().all(|row| !row.city.is_empty()));
    }

    #[test]
    fn unknown_status_is_a_decode_error() {
        let bytes = br#"[{"id":1,"name":"A","address":"B","status":"Pending","signupDate":"2023-01-01","zone":"N","city":"C"}]"#;
        let err = decode_fixture::<Vec<Subscriber>>("inline.json", bytes).unwrap_err();
        assert!(matches!(err, SourceError::Decode { fixture: "inline.json", .. }));
        assert!(err.to_string().starts_with("failed to decode inline.json"));
    }
}
