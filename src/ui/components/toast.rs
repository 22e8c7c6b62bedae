use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

/// Appends a message, dropping the oldest once the visible limit is reached.
fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_VISIBLE {
        entries.remove(0);
    }
    entries.push(message);
}

fn dismiss(entries: &mut Vec<ToastMessage>, id: &str) {
    entries.retain(|toast| toast.id != id);
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| enqueue(entries, message));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 z-50 flex justify-center",
            ul {
                class: "space-y-3",
                for view in views {
                    ToastCard { key: "{view.id}", view, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| dismiss(items, &id));
        }
    });

    let class = format!(
        "pointer-events-auto flex items-start gap-3 rounded-lg border px-4 py-3 shadow-lg {}",
        view.theme
    );
    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{view.icon}" }
            p { class: "text-sm font-medium", "{view.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide opacity-70 hover:opacity-100",
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| dismiss(items, &target));
                },
                "Dismiss"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    text: String,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Info => ("border-sky-200 bg-sky-50 text-sky-900", "ℹ️"),
            ToastKind::Success => ("border-emerald-200 bg-emerald-50 text-emerald-900", "✅"),
            ToastKind::Warning => ("border-amber-200 bg-amber-50 text-amber-900", "⚠️"),
            ToastKind::Error => ("border-rose-200 bg-rose-50 text-rose-900", "⛔"),
        };

        ToastView {
            id: message.id,
            text: message.text,
            theme,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toast_is_dropped_past_the_limit() {
        let mut entries = Vec::new();
        for idx in 0..=MAX_VISIBLE {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Info, format!("n{idx}")));
        }
        assert_eq!(entries.len(), MAX_VISIBLE);
        assert_eq!(entries[0].text, "n1");
        assert_eq!(entries[MAX_VISIBLE - 1].text, format!("n{MAX_VISIBLE}"));
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut entries = Vec::new();
        let first = ToastMessage::new(ToastKind::Success, "saved");
        let second = ToastMessage::new(ToastKind::Error, "failed");
        let first_id = first.id.clone();
        enqueue(&mut entries, first);
        enqueue(&mut entries, second);

        dismiss(&mut entries, &first_id);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "failed");
        assert_ne!(entries[0].id, first_id);
    }

    #[test]
    fn each_kind_has_its_own_look() {
        let looks: Vec<_> = [ToastKind::Info, ToastKind::Success, ToastKind::Warning, ToastKind::Error]
            .into_iter()
            .map(|kind| ToastView::from(ToastMessage::new(kind, "x")).theme)
            .collect();
        assert!(looks[2].contains("amber"));
        for (idx, look) in looks.iter().enumerate() {
            assert!(!looks[idx + 1..].contains(look));
        }
    }

    thread_local! {
        static VISIBLE: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
    }

    #[component]
    fn StaggeredToasts() -> Element {
        let toasts = use_context_provider(|| Signal::new(Vec::<ToastMessage>::new()));
        use_future(move || async move {
            push_toast(toasts, ToastKind::Info, "first");
            tokio::time::sleep(Duration::from_secs(3)).await;
            push_toast(toasts, ToastKind::Info, "second");
        });

        let texts = toasts().into_iter().map(|toast| toast.text).collect::<Vec<_>>();
        VISIBLE.with(|visible| *visible.borrow_mut() = texts);

        rsx! { Toast {} }
    }

    async fn run_for(dom: &mut VirtualDom, span: Duration) {
        let deadline = tokio::time::Instant::now() + span;
        while tokio::time::Instant::now() < deadline {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(250)) => {}
            }
            dom.render_immediate_to_vec();
        }
    }

    fn visible() -> Vec<String> {
        VISIBLE.with(|visible| visible.borrow().clone())
    }

    #[tokio::test(start_paused = true)]
    async fn queued_toast_keeps_its_own_timer_after_an_earlier_one_closes() {
        let mut dom = VirtualDom::new(StaggeredToasts);
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_secs(4)).await;
        assert_eq!(visible(), vec!["first", "second"]);

        run_for(&mut dom, Duration::from_secs(3)).await;
        assert_eq!(visible(), vec!["second"]);

        run_for(&mut dom, Duration::from_secs(8)).await;
        assert!(visible().is_empty(), "still showing {:?}", visible());
    }
}
