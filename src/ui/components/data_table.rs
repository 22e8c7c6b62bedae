use dioxus::prelude::*;
use tracing::{debug, info};

use super::{pagination_bar::PaginationBar, status_badge::StatusBadge};
use crate::domain::{
    bulk_action_record, default_bulk_actions, row_views, Appearance, BulkAction, CellRenderer,
    Column, Pagination, RowAction, RowId, SortDirection, TableRow, TableState,
};
use crate::ui::theme;

/// Searchable, selectable table over caller-supplied rows.
///
/// The table owns only its view state (search text, sort indicator,
/// selection). Filtering, ordering and paging are the caller's job: search
/// text is forwarded through `on_search`, page clicks through
/// `on_page_change`, and rows render in the order given.
#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    pub rows: Vec<TableRow>,
    pub columns: Vec<Column>,
    #[props(into, default = "Subscribers".to_string())]
    pub title: String,
    #[props(into, default = "Search subscribers...".to_string())]
    pub search_placeholder: String,
    #[props(default)]
    pub on_search: Option<EventHandler<String>>,
    #[props(default)]
    pub on_filter: Option<EventHandler<()>>,
    #[props(default)]
    pub on_row_action: Option<EventHandler<(RowAction, TableRow)>>,
    #[props(default = default_bulk_actions())]
    pub bulk_actions: Vec<BulkAction>,
    #[props(default)]
    pub pagination: Pagination,
    #[props(default)]
    pub on_page_change: Option<EventHandler<usize>>,
    /// Entry count for the footer; defaults to the number of supplied rows.
    #[props(default)]
    pub total_rows: Option<usize>,
    #[props(default)]
    pub appearance: Appearance,
}

#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let mut state = use_signal(TableState::default);
    let mut bulk_menu_open = use_signal(|| false);
    let mut open_row_menu = use_signal(|| None::<RowId>);

    let row_ids: Vec<RowId> = props.rows.iter().map(|row| row.id).collect();
    use_effect(use_reactive((&row_ids,), move |(row_ids,)| {
        if state.peek().selection.has_outside(&row_ids) {
            state.with_mut(|st| st.sync_visible(&row_ids));
        }
    }));

    let appearance = props.appearance;
    let snapshot = state();
    let open_menu = open_row_menu();
    let views = row_views(&props.rows, &snapshot)
        .into_iter()
        .map(|(row, selected)| {
            let menu_open = open_menu == Some(row.id);
            (row, selected, menu_open)
        })
        .collect::<Vec<_>>();
    let header_checked = snapshot.selection.covers(props.rows.len());
    let has_selection = !snapshot.selection.is_empty();
    let footer = props
        .pagination
        .summary(props.total_rows.unwrap_or(props.rows.len()));
    let is_empty = props.rows.is_empty();
    let colspan = props.columns.len() + 2;
    let headers = props
        .columns
        .iter()
        .map(|column| HeaderView {
            id: column.id.clone(),
            key: column.accessor_key.clone(),
            label: column.header.clone(),
            sortable: column.sortable,
            indicator: column
                .sortable
                .then(|| snapshot.sort_indicator(&column.accessor_key))
                .flatten(),
        })
        .collect::<Vec<_>>();

    let on_search = props.on_search;
    let on_filter = props.on_filter;
    let on_row_action = props.on_row_action;
    let bulk_items = props
        .bulk_actions
        .iter()
        .map(|bulk| (bulk.label.clone(), bulk.action.clone()))
        .collect::<Vec<_>>();
    let columns = props.columns.clone();

    let on_search_input = move |evt: FormEvent| {
        let value = evt.value();
        state.with_mut(|st| st.set_search(value.clone()));
        if let Some(handler) = on_search {
            handler.call(value);
        }
    };

    let on_sort = move |key: String| {
        state.with_mut(|st| st.toggle_sort(&key));
        debug!(key = %key, sort = ?state.peek().sort, "table sort changed");
    };

    let on_toggle_all = move |_: FormEvent| {
        state.with_mut(|st| st.toggle_all(&row_ids));
    };

    let on_toggle_row = move |id: RowId| {
        state.with_mut(|st| st.toggle_row(id));
    };

    let on_row_menu = move |id: RowId| {
        let next = if open_row_menu.peek().as_ref() == Some(&id) { None } else { Some(id) };
        open_row_menu.set(next);
    };

    let on_row_choice = move |(action, row): (RowAction, TableRow)| {
        open_row_menu.set(None);
        if let Some(handler) = on_row_action {
            handler.call((action, row));
        }
    };

    rsx! {
        div {
            class: "{theme::table_container(appearance)}",
            div {
                class: "border-b p-4 {theme::section_border(appearance)}",
                div { class: "mb-4 flex items-center justify-between",
                    h2 { class: "text-xl font-semibold {theme::text_primary(appearance)}", "{props.title}" }
                    div { class: "flex items-center gap-2",
                        if has_selection {
                            div { class: "relative",
                                button {
                                    class: "{theme::btn_outline(appearance)}",
                                    onclick: move |_| bulk_menu_open.set(!bulk_menu_open()),
                                    "Actions ▾"
                                }
                                if bulk_menu_open() {
                                    div { class: "{theme::menu_panel(appearance)}",
                                        for (label, action) in bulk_items {
                                            button {
                                                class: "{theme::menu_item(appearance)}",
                                                onclick: move |_| {
                                                    let record = bulk_action_record(&action, &state.peek().selection);
                                                    info!(action = %record.action, rows = ?record.rows, "performing bulk action");
                                                    bulk_menu_open.set(false);
                                                },
                                                "{label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        button {
                            class: "{theme::btn_outline(appearance)}",
                            onclick: move |_| {
                                if let Some(handler) = on_filter {
                                    handler.call(());
                                }
                            },
                            span { class: "mr-2", "⚲" }
                            "Filter"
                        }
                    }
                }
                div { class: "relative",
                    span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-sm {theme::text_muted(appearance)}", "🔍" }
                    input {
                        class: "{theme::input_class(appearance)}",
                        placeholder: "{props.search_placeholder}",
                        value: "{snapshot.search}",
                        oninput: on_search_input,
                    }
                }
            }
            div { class: "overflow-x-auto",
                table {
                    class: "min-w-full text-sm",
                    thead {
                        class: "{theme::table_header(appearance)}",
                        tr {
                            th { class: "w-12 px-4 py-3",
                                input {
                                    r#type: "checkbox",
                                    checked: header_checked,
                                    onchange: on_toggle_all,
                                }
                            }
                            for header in headers {
                                SortableHeader { header, on_sort }
                            }
                            th { class: "w-12 px-4 py-3 font-medium", "Actions" }
                        }
                    }
                    tbody {
                        class: "{theme::table_divider(appearance)}",
                        for (row, selected, menu_open) in views {
                            DataRow {
                                row,
                                menu_open,
                                selected,
                                columns: columns.clone(),
                                appearance,
                                on_toggle: on_toggle_row,
                                on_menu: on_row_menu,
                                on_action: on_row_choice,
                            }
                        }
                        if is_empty {
                            tr {
                                td {
                                    class: "px-4 py-6 text-center text-sm {theme::text_muted(appearance)}",
                                    colspan: "{colspan}",
                                    "No results."
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "border-t p-4 {theme::section_border(appearance)}",
                div { class: "flex items-center justify-between",
                    p { class: "text-sm {theme::text_muted(appearance)}", "{footer}" }
                    PaginationBar {
                        pagination: props.pagination,
                        on_page_change: props.on_page_change,
                        appearance,
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct HeaderView {
    id: String,
    key: String,
    label: String,
    sortable: bool,
    indicator: Option<SortDirection>,
}

#[component]
fn SortableHeader(header: HeaderView, on_sort: EventHandler<String>) -> Element {
    let class = if header.sortable {
        "cursor-pointer select-none px-4 py-3 font-medium"
    } else {
        "px-4 py-3 font-medium"
    };
    let arrow = match header.indicator {
        Some(SortDirection::Asc) => "▲",
        Some(SortDirection::Desc) => "▼",
        None => "",
    };
    let key = header.key.clone();
    let sortable = header.sortable;

    rsx! {
        th {
            id: "column-{header.id}",
            class: class,
            onclick: move |_| {
                if sortable {
                    on_sort.call(key.clone());
                }
            },
            div { class: "flex items-center",
                "{header.label}"
                if !arrow.is_empty() {
                    span { class: "ml-1 text-[10px]", "{arrow}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DataRowProps {
    row: TableRow,
    columns: Vec<Column>,
    selected: bool,
    menu_open: bool,
    appearance: Appearance,
    on_toggle: EventHandler<RowId>,
    on_menu: EventHandler<RowId>,
    on_action: EventHandler<(RowAction, TableRow)>,
}

#[component]
fn DataRow(props: DataRowProps) -> Element {
    let appearance = props.appearance;
    let row_id = props.row.id;
    let cells = props
        .columns
        .iter()
        .map(|column| {
            let value = props
                .row
                .field(&column.accessor_key)
                .unwrap_or_default()
                .to_string();
            (column.cell, value)
        })
        .collect::<Vec<_>>();
    let menu_items = RowAction::ALL
        .iter()
        .map(|action| (*action, props.row.clone()))
        .collect::<Vec<_>>();
    let on_toggle = props.on_toggle;
    let on_menu = props.on_menu;
    let on_action = props.on_action;

    rsx! {
        tr {
            class: "{theme::table_row(appearance, props.selected)}",
            td { class: "px-4 py-3",
                input {
                    r#type: "checkbox",
                    checked: props.selected,
                    onchange: move |_| on_toggle.call(row_id),
                }
            }
            for (renderer, value) in cells {
                td { class: "px-4 py-3 {theme::text_primary(appearance)}",
                    {match renderer {
                        CellRenderer::StatusBadge => rsx! { StatusBadge { label: value } },
                        CellRenderer::Text => rsx! { "{value}" },
                    }}
                }
            }
            td { class: "relative px-4 py-3",
                button {
                    class: "{theme::btn_ghost(appearance)}",
                    onclick: move |_| on_menu.call(row_id),
                    "⋯"
                    span { class: "sr-only", "Open menu" }
                }
                if props.menu_open {
                    div { class: "{theme::menu_panel(appearance)}",
                        for (action, target) in menu_items {
                            button {
                                class: "{theme::menu_item(appearance)}",
                                onclick: move |_| on_action.call((action, target.clone())),
                                "{action.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
