//! Adapters that supply dashboard records.

pub mod source;

pub use source::{DashboardSource, EmbeddedSource, SourceError};
