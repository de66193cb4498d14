use dioxus::prelude::*;

/// Tone of an inline [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice-info",
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
        }
    }
}

/// Inline banner for submit outcomes. Renders nothing for an empty message.
#[component]
pub fn Notice(#[props(default)] kind: NoticeKind, message: String) -> Element {
    if message.trim().is_empty() {
        return rsx! {};
    }
    let role = if kind == NoticeKind::Error { "alert" } else { "status" };

    rsx! {
        div { class: "notice {kind.class()}", role: "{role}", "{message}" }
    }
}
