use dioxus::prelude::*;

use crate::domain::SubscriberStatus;

/// Pill for a subscriber status cell.
#[component]
pub fn StatusBadge(label: String) -> Element {
    let color = badge_class(&label);

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold {color}",
            "{label}"
        }
    }
}

/// Unknown labels get the filled default style, same as Connected.
fn badge_class(label: &str) -> &'static str {
    match SubscriberStatus::from_label(label) {
        Some(SubscriberStatus::InstallScheduled) => "border-transparent bg-slate-200 text-slate-900",
        Some(SubscriberStatus::SignedUp) => "border-slate-300 text-slate-700",
        Some(SubscriberStatus::Connected) | None => "border-transparent bg-slate-900 text-white",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_uses_the_default_variant() {
        assert_eq!(badge_class("Suspended"), badge_class("Connected"));
        assert_ne!(badge_class("Signed Up"), badge_class("Connected"));
        assert_ne!(badge_class("Install Scheduled"), badge_class("Signed Up"));
    }
}
