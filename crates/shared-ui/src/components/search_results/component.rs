use dioxus::prelude::*;
use shared_types::{Candidate, SurfaceBody, SurfaceView};

/// Secondary line of a result row: `2021 · movie`.
pub fn meta_line(candidate: &Candidate) -> String {
    format!("{} · {}", candidate.display_year(), candidate.display_kind())
}

/// Dropdown under a title input, projecting a [`SurfaceView`].
///
/// The container is always rendered so it keeps its place in the layout;
/// visibility is carried by the `show` class.
#[component]
pub fn SearchResults(view: SurfaceView, on_pick: EventHandler<String>) -> Element {
    let class = if view.visible {
        "search-results show"
    } else {
        "search-results"
    };

    rsx! {
        div { class: "{class}", role: "listbox",
            match view.body {
                Some(SurfaceBody::Results { items }) => rsx! {
                    // Titles and years repeat in catalog hits, so rows are keyed by position.
                    for (i, candidate) in items.into_iter().enumerate() {
                        ResultRow { key: "{i}", candidate, on_pick }
                    }
                },
                Some(SurfaceBody::Message { text }) => rsx! {
                    div { class: "search-result-message", "{text}" }
                },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn ResultRow(candidate: Candidate, on_pick: EventHandler<String>) -> Element {
    let meta = meta_line(&candidate);
    let title = candidate.title.clone();

    rsx! {
        div {
            class: "search-result-item",
            role: "option",
            onclick: move |_| on_pick.call(title.clone()),
            div { class: "search-result-title", "{candidate.title}" }
            div { class: "search-result-meta", "{meta}" }
        }
    }
}
