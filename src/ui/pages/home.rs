use dioxus::prelude::*;

use crate::{
    domain::{filter_by_tab, recent_subscriber_columns, AppState, StatusTab, TableRecord},
    ui::{
        components::{
            data_table::DataTable, journey_widget::CustomerJourneyWidget,
            metric_card::MetricsOverview,
        },
        theme,
    },
};

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let mut active_tab = use_signal(StatusTab::default);

    let appearance = state.with(|st| st.appearance());
    let metrics = state.with(|st| st.data.metrics.clone());
    let journey = state.with(|st| st.data.journey.clone());
    let recent = state.with(|st| st.data.recent_subscribers.clone());

    let tab = active_tab();
    let columns = recent_subscriber_columns();
    let rows = filter_by_tab(&recent, tab)
        .iter()
        .map(|row| row.to_row(&columns))
        .collect::<Vec<_>>();
    let tabs = StatusTab::ALL
        .iter()
        .map(|candidate| (*candidate, theme::tab(appearance, *candidate == tab)))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "mb-6",
            h1 { class: "text-2xl font-bold", "Dashboard" }
            p { class: "{theme::text_muted(appearance)}", "Welcome to the Fiber Operator Portal" }
        }

        MetricsOverview { metrics, appearance }

        div { class: "mt-6",
            CustomerJourneyWidget { journey, appearance }
        }

        div { class: "mt-6 {theme::card(appearance)}",
            div { class: "p-6 pb-2",
                h3 { class: "text-lg font-semibold", "Recent Subscribers" }
            }
            div { class: "p-6 pt-2",
                div { class: "mb-4 flex items-center justify-between",
                    div { class: "{theme::tab_list(appearance)}",
                        for (candidate, class) in tabs {
                            button {
                                class: "{class}",
                                onclick: move |_| active_tab.set(candidate),
                                "{candidate.label()}"
                            }
                        }
                    }
                    button {
                        class: "{theme::btn_outline(appearance)} text-xs",
                        onclick: move |_| {
                            nav.push(crate::app::Route::Subscribers {});
                        },
                        "View All"
                    }
                }
                DataTable {
                    key: "{tab.value()}",
                    rows,
                    columns,
                    appearance,
                }
            }
        }
    }
}
