use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_ui::SearchResults;

use crate::search_select::{use_search_select, SessionId};

/// Title input with live suggestions, bound to one search session.
#[component]
pub fn TitlePicker(session: SessionId, label: String, placeholder: String) -> Element {
    let search = use_search_select();
    let value = search.input(session);
    let view = search.surface(session);
    let input_id = format!("title-{session}");

    rsx! {
        div { class: "title-picker",
            label { class: "form-label", r#for: "{input_id}", "{label}" }
            div { class: "title-picker-field",
                span { class: "title-picker-icon",
                    Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                }
                input {
                    id: "{input_id}",
                    class: "form-input title-picker-input",
                    r#type: "text",
                    autocomplete: "off",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e: FormEvent| search.input_changed(session, &e.value()),
                    onfocus: move |_| search.input_focused(session),
                    onblur: move |_| search.input_blurred(session),
                }
                SearchResults {
                    view,
                    on_pick: move |title: String| search.candidate_clicked(session, &title),
                }
            }
        }
    }
}
