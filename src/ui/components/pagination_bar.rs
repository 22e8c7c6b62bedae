use dioxus::prelude::*;

use crate::domain::{Appearance, PageControl, Pagination};
use crate::ui::theme;

/// Previous / page links / next. Every click is delegated to `on_page_change`;
/// the edges are guarded by the same conditions that disable the controls.
#[component]
pub fn PaginationBar(
    pagination: Pagination,
    on_page_change: Option<EventHandler<usize>>,
    appearance: Appearance,
) -> Element {
    let previous_class = edge_class(pagination.previous_disabled());
    let next_class = edge_class(pagination.next_disabled());
    let pages = pagination
        .pages()
        .map(|idx| {
            let active = pagination.is_active(idx);
            let current = if active { "page" } else { "false" };
            (idx, theme::page_link(appearance, active), current)
        })
        .collect::<Vec<_>>();

    rsx! {
        nav {
            role: "navigation",
            aria_label: "pagination",
            ul { class: "flex flex-row items-center gap-1",
                li {
                    a {
                        href: "#",
                        class: "{theme::page_link(appearance, false)} {previous_class}",
                        onclick: move |evt| {
                            evt.prevent_default();
                            if let Some(handler) = on_page_change {
                                pagination.press(PageControl::Previous, |target| handler.call(target));
                            }
                        },
                        "‹ Previous"
                    }
                }
                for (idx, class, current) in pages {
                    li {
                        a {
                            href: "#",
                            class: "{class}",
                            aria_current: current,
                            onclick: move |evt| {
                                evt.prevent_default();
                                if let Some(handler) = on_page_change {
                                    pagination.press(PageControl::Page(idx), |target| handler.call(target));
                                }
                            },
                            "{idx + 1}"
                        }
                    }
                }
                li {
                    a {
                        href: "#",
                        class: "{theme::page_link(appearance, false)} {next_class}",
                        onclick: move |evt| {
                            evt.prevent_default();
                            if let Some(handler) = on_page_change {
                                pagination.press(PageControl::Next, |target| handler.call(target));
                            }
                        },
                        "Next ›"
                    }
                }
            }
        }
    }
}

fn edge_class(disabled: bool) -> &'static str {
    if disabled {
        "pointer-events-none opacity-50"
    } else {
        ""
    }
}
