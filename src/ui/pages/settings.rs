use dioxus::prelude::*;

use crate::{
    app::persist_preferences,
    domain::{AppState, Appearance, Preferences, PAGE_SIZE_CHOICES},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version::{current_version, release_channel, version_label, APP_NAME},
};

#[component]
pub fn SettingsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let saved = state.with(|st| st.preferences.clone());
    let mut draft = use_signal(|| saved.clone());
    let current = draft();
    let appearance = state.with(|st| st.appearance());
    let dirty = current != saved;

    let (subscriber_count, stage_count) =
        state.with(|st| (st.data.subscribers.len(), st.data.journey.stages.len()));
    let channel = current_version()
        .map(|version| release_channel(&version))
        .unwrap_or("Unknown");

    let appearance_choices = [Appearance::Light, Appearance::Dark]
        .into_iter()
        .map(|choice| (choice, theme::btn_choice(appearance, choice == current.appearance)))
        .collect::<Vec<_>>();
    let page_size_choices = PAGE_SIZE_CHOICES
        .into_iter()
        .map(|size| (size, theme::btn_choice(appearance, size == current.page_size)))
        .collect::<Vec<_>>();

    let on_save = move |_: MouseEvent| {
        let next = draft();
        state.with_mut(|st| {
            st.preferences = next.clone();
            st.sidebar_open = next.sidebar_open;
        });
        match persist_preferences(&state) {
            Ok(()) => push_toast(toasts, ToastKind::Success, "Preferences saved."),
            Err(err) => push_toast(
                toasts,
                ToastKind::Warning,
                format!("Preferences applied but could not be saved: {err}"),
            ),
        }
    };

    let on_reset = move |_: MouseEvent| {
        draft.set(Preferences::default());
        push_toast(toasts, ToastKind::Info, "Restored default preferences. Save to keep them.");
    };

    rsx! {
        div { class: "mb-6",
            h1 { class: "text-2xl font-bold", "Settings" }
            p { class: "{theme::text_muted(appearance)}", "Portal preferences are stored on this device." }
        }
        div { class: "grid gap-6 lg:grid-cols-[2fr_1fr]",
            section { class: "{theme::card(appearance)} space-y-6 p-6",
                div {
                    span { class: "{theme::label_class(appearance)}", "Appearance" }
                    div { class: "mt-2 flex gap-2",
                        for (choice, class) in appearance_choices {
                            button {
                                class: "{class}",
                                onclick: move |_| draft.with_mut(|d| d.appearance = choice),
                                "{choice.emoji()} {choice.name()}"
                            }
                        }
                    }
                }
                div {
                    span { class: "{theme::label_class(appearance)}", "Rows per page" }
                    div { class: "mt-2 flex gap-2",
                        for (size, class) in page_size_choices {
                            button {
                                class: "{class}",
                                onclick: move |_| draft.with_mut(|d| d.page_size = size),
                                "{size}"
                            }
                        }
                    }
                }
                label { class: "flex items-center gap-3 text-sm",
                    input {
                        r#type: "checkbox",
                        checked: current.sidebar_open,
                        onchange: move |_| draft.with_mut(|d| d.sidebar_open = !d.sidebar_open),
                    }
                    "Open the sidebar on startup"
                }
                div { class: "flex gap-3",
                    button {
                        class: "{theme::btn_primary(appearance)}",
                        disabled: !dirty,
                        onclick: on_save,
                        "Save"
                    }
                    button {
                        class: "{theme::btn_outline(appearance)}",
                        onclick: on_reset,
                        "Reset to defaults"
                    }
                }
            }
            aside { class: "{theme::card(appearance)} space-y-3 p-6 text-sm",
                h2 { class: "text-lg font-semibold", "About" }
                p { "{APP_NAME}" }
                p { class: "{theme::text_muted(appearance)}", "Version {version_label()} ({channel})" }
                p { class: "{theme::text_muted(appearance)}", "{subscriber_count} subscribers, {stage_count} journey stages loaded" }
            }
        }
    }
}
