use dioxus::{prelude::*, signals::Signal};
use tracing::{error, info, warn};

use crate::{
    domain::AppState,
    infra::{DashboardSource, EmbeddedSource},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{DashboardPage, SectionPage, SettingsPage, SubscribersPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_preferences, save_preferences, PersistSaveError},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/subscribers")]
    Subscribers {},
    #[route("/service-plans")]
    ServicePlans {},
    #[route("/devices")]
    Devices {},
    #[route("/installations")]
    Installations {},
    #[route("/zones")]
    Zones {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| AppState::new(load_preferences().unwrap_or_default()));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    use_hook(move || load_dashboard(&EmbeddedSource, state, toasts));

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Pulls every dataset from `source` into the shared state. A failed load
/// leaves the widgets on their empty defaults and raises an error toast.
pub fn load_dashboard(
    source: &impl DashboardSource,
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
) {
    match source.load_all() {
        Ok(data) => {
            info!(
                subscribers = data.subscribers.len(),
                stages = data.journey.stages.len(),
                "loaded dashboard data"
            );
            state.with_mut(|st| st.data = data);
        }
        Err(err) => {
            error!("failed to load dashboard data: {err}");
            push_toast(toasts, ToastKind::Error, format!("Failed to load dashboard data: {err}"));
        }
    }
}

pub fn persist_preferences(state: &Signal<AppState>) -> Result<(), PersistSaveError> {
    let snapshot = state.with(|st| st.preferences.clone());
    save_preferences(&snapshot).inspect_err(|err| warn!("failed to persist preferences: {err}"))
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Subscribers() -> Element {
    rsx! { Shell { SubscribersPage {} } }
}

#[component]
pub fn ServicePlans() -> Element {
    rsx! { Shell { SectionPage { title: "Service Plans", icon: "📦" } } }
}

#[component]
pub fn Devices() -> Element {
    rsx! { Shell { SectionPage { title: "Devices", icon: "🖧" } } }
}

#[component]
pub fn Installations() -> Element {
    rsx! { Shell { SectionPage { title: "Installations", icon: "📅" } } }
}

#[component]
pub fn Zones() -> Element {
    rsx! { Shell { SectionPage { title: "Zones", icon: "🗺️" } } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
