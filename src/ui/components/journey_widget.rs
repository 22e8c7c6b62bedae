use dioxus::prelude::*;

use crate::domain::{format_percentage, progress_width, Appearance, JourneySnapshot};
use crate::ui::theme;

#[component]
pub fn CustomerJourneyWidget(journey: JourneySnapshot, appearance: Appearance) -> Element {
    let connected = journey.connected_count();
    let connected_pct = format_percentage(journey.connected_percentage());
    let bar_style = progress_width(journey.connected_share());
    let last = journey.stages.len().saturating_sub(1);
    let stages = journey
        .stage_percentages()
        .into_iter()
        .enumerate()
        .map(|(idx, (stage, pct))| StageView {
            name: stage.name.clone(),
            count: stage.count,
            icon: stage.icon.clone(),
            color_tag: stage.color_tag.clone(),
            share: format_percentage(pct),
            has_next: idx < last,
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "w-full {theme::card(appearance)}",
            div { class: "p-6 pb-2",
                h3 { class: "text-lg font-medium {theme::text_primary(appearance)}", "Customer Journey Progress" }
            }
            div { class: "space-y-6 p-6 pt-2",
                div { class: "flex items-center justify-between",
                    div {
                        p { class: "text-sm {theme::text_muted(appearance)}", "Total Customers" }
                        p { class: "text-2xl font-bold {theme::text_primary(appearance)}", "{journey.total_customers}" }
                    }
                    div { class: "text-right",
                        p { class: "text-sm {theme::text_muted(appearance)}", "Fully Connected" }
                        p { class: "text-2xl font-bold {theme::text_primary(appearance)}",
                            "{connected}"
                            span { class: "ml-1 text-sm {theme::text_muted(appearance)}", "({connected_pct}%)" }
                        }
                    }
                }
                div { class: "{theme::progress_track(appearance)}",
                    div { class: "{theme::progress_fill(appearance)}", style: "{bar_style}" }
                }
                div { class: "mt-4 grid grid-cols-1 gap-4 md:grid-cols-3",
                    for stage in stages {
                        JourneyStageView { stage, appearance }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct StageView {
    name: String,
    count: u64,
    icon: String,
    color_tag: String,
    share: String,
    has_next: bool,
}

#[component]
fn JourneyStageView(stage: StageView, appearance: Appearance) -> Element {
    rsx! {
        div { class: "flex items-center",
            div { class: "{stage.color_tag} mr-3 rounded-full p-2 text-white", "{stage.icon}" }
            div { class: "flex-1",
                div { class: "flex items-center justify-between",
                    p { class: "font-medium {theme::text_primary(appearance)}", "{stage.name}" }
                    span { class: "ml-2 rounded-full border px-2.5 py-0.5 text-xs font-semibold {theme::section_border(appearance)}", "{stage.count}" }
                }
                p { class: "mt-1 text-xs {theme::text_muted(appearance)}", "{stage.share}% of total" }
            }
            if stage.has_next {
                span { class: "mx-2 hidden text-sm md:block {theme::text_muted(appearance)}", "→" }
            }
        }
    }
}
