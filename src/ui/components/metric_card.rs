use dioxus::prelude::*;

use crate::domain::{trend_direction, trend_label, Appearance, MetricsSnapshot, TrendDirection};
use crate::ui::theme;

/// A single headline statistic. `value` is shown verbatim; a zero trend hides the trend row.
#[component]
pub fn MetricCard(
    title: String,
    value: String,
    #[props(default)] trend: f64,
    icon: String,
    description: Option<String>,
    appearance: Appearance,
) -> Element {
    let trend_row = trend_direction(trend).map(|direction| {
        let (arrow, color) = match direction {
            TrendDirection::Up => ("↑", "text-green-500"),
            TrendDirection::Down => ("↓", "text-red-500"),
        };
        (arrow, color, trend_label(trend))
    });

    rsx! {
        div {
            class: "{theme::card(appearance)} p-6",
            div { class: "flex items-start justify-between",
                div {
                    p { class: "text-sm font-medium {theme::text_muted(appearance)}", "{title}" }
                    h3 { class: "mt-1 text-2xl font-bold {theme::text_primary(appearance)}", "{value}" }
                    if let Some(desc) = description.filter(|desc| !desc.is_empty()) {
                        p { class: "mt-1 text-xs {theme::text_muted(appearance)}", "{desc}" }
                    }
                }
                div { class: "{theme::icon_bubble(appearance)}", "{icon}" }
            }
            if let Some((arrow, color, label)) = trend_row {
                div { class: "mt-4 flex items-center",
                    span { class: "mr-1 text-sm {color}", "{arrow}" }
                    span { class: "text-xs font-medium {color}", "{label}" }
                }
            }
        }
    }
}

#[component]
pub fn MetricsOverview(metrics: MetricsSnapshot, appearance: Appearance) -> Element {
    let cards = metrics.cards();
    rsx! {
        div { class: "w-full",
            h2 { class: "mb-4 text-xl font-semibold {theme::text_primary(appearance)}", "Overview" }
            div { class: "grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-4",
                for card in cards {
                    MetricCard {
                        key: "{card.title}",
                        title: card.title.clone(),
                        value: card.value.clone(),
                        trend: card.trend,
                        icon: card.icon.to_string(),
                        description: card.description.clone(),
                        appearance,
                    }
                }
            }
        }
    }
}
