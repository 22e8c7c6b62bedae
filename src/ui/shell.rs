use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, Appearance};
use crate::ui::theme;
use crate::util::version::APP_NAME;

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

/// Sidebar entries in display order.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { name: "Dashboard", icon: "🏠", route: Route::Dashboard {} },
        NavItem { name: "Subscribers", icon: "👥", route: Route::Subscribers {} },
        NavItem { name: "Service Plans", icon: "📦", route: Route::ServicePlans {} },
        NavItem { name: "Devices", icon: "🖧", route: Route::Devices {} },
        NavItem { name: "Installations", icon: "📅", route: Route::Installations {} },
        NavItem { name: "Zones", icon: "🗺️", route: Route::Zones {} },
        NavItem { name: "Settings", icon: "⚙️", route: Route::Settings {} },
    ]
}

#[component]
pub fn Shell(children: Element) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let (appearance, sidebar_open) = state.with(|s| (s.appearance(), s.sidebar_open));
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let mut user_menu_open = use_signal(|| false);

    let sidebar_width = if sidebar_open { "w-64" } else { "w-20" };
    let items = nav_items()
        .into_iter()
        .map(|item| {
            let active = item.route == current_route;
            (item, active)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "{theme::page_background(appearance)}",
            header { class: "{theme::header_bar(appearance)}",
                div { class: "flex h-16 items-center justify-between px-4 md:px-6",
                    div { class: "flex items-center",
                        button {
                            class: "{theme::btn_ghost(appearance)} mr-2",
                            title: "Toggle sidebar",
                            onclick: move |_| state.with_mut(|s| s.toggle_sidebar()),
                            if sidebar_open { "✕" } else { "☰" }
                        }
                        div { class: "flex items-center",
                            div { class: "mr-2 flex h-8 w-8 items-center justify-center rounded-md bg-slate-900",
                                span { class: "font-bold text-white", "F" }
                            }
                            span { class: "hidden text-xl font-bold md:inline-block", "{APP_NAME}" }
                        }
                    }
                    div { class: "flex items-center gap-4",
                        div { class: "relative hidden md:block",
                            span { class: "absolute left-2.5 top-2 text-sm {theme::text_muted(appearance)}", "🔍" }
                            input {
                                r#type: "search",
                                placeholder: "Search...",
                                class: "{theme::input_class(appearance)} w-64 lg:w-96",
                            }
                        }
                        button { class: "{theme::btn_ghost(appearance)} relative", title: "Notifications",
                            "🔔"
                            span { class: "absolute right-1 top-1 h-2 w-2 rounded-full bg-red-500" }
                        }
                        UserMenu {
                            open: user_menu_open(),
                            appearance,
                            on_toggle: move |_| user_menu_open.set(!user_menu_open()),
                            on_settings: move |_| {
                                user_menu_open.set(false);
                                nav.push(Route::Settings {});
                            },
                        }
                    }
                }
            }
            div { class: "flex",
                aside { class: "{theme::sidebar(appearance)} {sidebar_width} min-h-[calc(100vh-4rem)]",
                    if !sidebar_open {
                        div { class: "py-3 text-center text-xl font-bold", "FO" }
                    }
                    nav { class: "space-y-1 px-2 py-4",
                        for (item, active) in items {
                            NavButton { item, active, expanded: sidebar_open, appearance }
                        }
                    }
                }
                main { class: "flex-1 overflow-auto",
                    div { class: "container mx-auto p-4 md:p-6",
                        {children}
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(item: NavItem, active: bool, expanded: bool, appearance: Appearance) -> Element {
    let nav = use_navigator();
    let target = item.route.clone();
    let align = if expanded { "justify-start" } else { "justify-center" };

    rsx! {
        button {
            class: "{theme::nav_link(appearance, active)} w-full {align}",
            title: "{item.name}",
            onclick: move |_| {
                nav.push(target.clone());
            },
            span { class: "mr-3", "{item.icon}" }
            if expanded {
                span { "{item.name}" }
            }
        }
    }
}

#[component]
fn UserMenu(
    open: bool,
    appearance: Appearance,
    on_toggle: EventHandler<()>,
    on_settings: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "relative",
            button {
                class: "{theme::btn_ghost(appearance)} gap-2",
                onclick: move |_| on_toggle.call(()),
                div { class: "flex h-8 w-8 items-center justify-center rounded-full bg-slate-200 text-xs font-semibold text-slate-700", "OP" }
                div { class: "hidden text-left md:block",
                    p { class: "text-sm font-medium", "Admin User" }
                    p { class: "text-xs {theme::text_muted(appearance)}", "admin@fiberco.com" }
                }
                span { class: "text-xs {theme::text_muted(appearance)}", "▾" }
            }
            if open {
                div { class: "{theme::menu_panel(appearance)} w-56",
                    p { class: "px-3 py-2 text-sm font-semibold", "My Account" }
                    hr { class: "{theme::section_border(appearance)}" }
                    button { class: "{theme::menu_item(appearance)}", onclick: move |_| on_toggle.call(()), "Profile" }
                    button { class: "{theme::menu_item(appearance)}", onclick: move |_| on_settings.call(()), "Settings" }
                    hr { class: "{theme::section_border(appearance)}" }
                    button { class: "{theme::menu_item(appearance)}", onclick: move |_| on_toggle.call(()), "Log out" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_links_cover_every_section_path() {
        let paths: Vec<String> = nav_items().iter().map(|item| item.route.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/subscribers",
                "/service-plans",
                "/devices",
                "/installations",
                "/zones",
                "/settings",
            ]
        );
    }
}
