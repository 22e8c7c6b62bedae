use dioxus::prelude::*;
use tracing::debug;

use crate::{
    domain::{
        search_subscribers, subscriber_columns, AppState, Pagination, RowAction, TableRecord,
        TableRow,
    },
    ui::components::{
        data_table::DataTable,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn SubscribersPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut query = use_signal(String::new);
    let mut page_index = use_signal(|| 0_usize);

    let appearance = state.with(|st| st.appearance());
    let page_size = state.with(|st| st.preferences.page_size);
    let all = state.with(|st| st.data.subscribers.clone());

    let columns = subscriber_columns();
    let matching = search_subscribers(&all, &query());
    let pagination = Pagination::for_total(matching.len(), page_index(), page_size);
    let total = matching.len();
    let rows = pagination
        .slice(&matching)
        .iter()
        .map(|row| row.to_row(&columns))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "mb-6",
            h1 { class: "text-2xl font-bold", "Subscribers" }
            p { class: "text-sm opacity-70", "{all.len()} subscribers on record" }
        }
        DataTable {
            rows,
            columns,
            pagination,
            total_rows: total,
            appearance,
            on_search: move |value: String| {
                debug!(query = %value, "subscriber search changed");
                query.set(value);
                page_index.set(0);
            },
            on_page_change: move |index: usize| page_index.set(index),
            on_filter: move |_| {
                push_toast(toasts, ToastKind::Info, "Advanced filters are not available yet.");
            },
            on_row_action: move |(action, row): (RowAction, TableRow)| {
                debug!(action = action.kind(), row = row.id, "subscriber row action");
                push_toast(toasts, ToastKind::Info, row_action_message(action, &row));
            },
        }
    }
}

fn row_action_message(action: RowAction, row: &TableRow) -> String {
    let name = row.field("name").unwrap_or("subscriber");
    format!("{}: {name}", action.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_action_message_names_the_subscriber() {
        let row = TableRow {
            id: 4,
            cells: vec![("name".to_string(), "Emily Davis".to_string())],
        };
        assert_eq!(row_action_message(RowAction::Edit, &row), "Edit: Emily Davis");

        let anonymous = TableRow { id: 5, cells: Vec::new() };
        assert_eq!(
            row_action_message(RowAction::Notify, &anonymous),
            "Send Notification: subscriber"
        );
    }
}
