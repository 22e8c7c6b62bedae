pub mod data_table;
pub mod journey_widget;
pub mod metric_card;
pub mod pagination_bar;
pub mod status_badge;
pub mod toast;
