use std::time::Duration;

use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn modifier(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
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

/// Queue a message, dropping the oldest once the stack is full.
pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| enqueue(entries, message));
}

fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

fn dismiss(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|items| items.retain(|toast| toast.id != id));
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_for(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep_for(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts()
        .into_iter()
        .map(|message| (message.id.clone(), message))
        .collect::<Vec<_>>();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        ul { class: theme::TOAST_STACK,
            for (id, message) in messages {
                ToastCard { key: "{id}", message, toasts: toasts.clone() }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let id = timer_id.clone();
        async move {
            sleep_for(TOAST_AUTO_DISMISS).await;
            dismiss(toasts, &id);
        }
    });

    let dismiss_id = message.id.clone();
    rsx! {
        li { class: "{theme::TOAST} {message.kind.modifier()}",
            p { "{message.text}" }
            button {
                class: theme::TOAST_DISMISS,
                r#type: "button",
                onclick: move |_| dismiss(toasts, &dismiss_id),
                "Dismiss"
            }
        }
    }
}
