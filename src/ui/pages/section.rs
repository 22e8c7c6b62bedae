use dioxus::prelude::*;

use crate::{domain::AppState, ui::theme};

/// Landing panel for sections that only exist as navigation targets so far.
#[component]
pub fn SectionPage(title: &'static str, icon: &'static str) -> Element {
    let state = use_context::<Signal<AppState>>();
    let appearance = state.with(|st| st.appearance());

    rsx! {
        div { class: "mb-6",
            h1 { class: "text-2xl font-bold", "{title}" }
        }
        div { class: "{theme::card(appearance)} p-10 text-center",
            p { class: "text-4xl", "{icon}" }
            p { class: "mt-4 text-sm {theme::text_muted(appearance)}",
                "{title} management is not available in this portal yet."
            }
        }
    }
}
