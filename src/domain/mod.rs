//! Display records and the pure logic behind the dashboard widgets.

pub mod app_state;
pub mod journey;
pub mod metrics;
pub mod subscriber;
pub mod table;

pub use app_state::{Appearance, AppState, DashboardData, Preferences, PAGE_SIZE_CHOICES};
pub use journey::{format_percentage, progress_width, JourneySnapshot};
pub use metrics::{trend_direction, trend_label, MetricsSnapshot, TrendDirection};
pub use subscriber::{
    filter_by_tab, search_subscribers, StatusTab, Subscriber, SubscriberStatus,
};
pub use table::{
    bulk_action_record, default_bulk_actions, recent_subscriber_columns, row_views,
    subscriber_columns, BulkAction, CellRenderer, Column, PageControl, Pagination, RowAction, RowId,
    SortDirection, TableRecord, TableRow, TableState,
};
