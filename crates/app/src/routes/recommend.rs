use dioxus::prelude::*;
use shared_ui::{Notice, NoticeKind};

use crate::auth::use_auth;
use crate::components::TitlePicker;
use crate::search_select::{use_search_select, SessionId};
use crate::submit::{prepare_recommend, recommend_to_friend, user_message};

const SESSION: SessionId = SessionId::Recommend;

/// "Recommend to a friend" form.
#[component]
pub fn Recommend() -> Element {
    let search = use_search_select();
    let auth = use_auth();
    let mut friend = use_signal(String::new);
    let mut notice = use_signal(|| None::<(NoticeKind, String)>);
    let mut busy = use_signal(|| false);

    use_drop(move || search.reset(SESSION));

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if busy() {
            return;
        }

        let input = search.input(SESSION);
        let prepared = {
            let controller = search.controller.read();
            prepare_recommend(&*controller, &friend(), &input)
        };
        let request = match prepared {
            Ok(request) => request,
            Err(err) => {
                notice.set(Some((NoticeKind::Error, user_message(&err))));
                return;
            }
        };

        let api = auth.watchlist_api();
        busy.set(true);
        spawn(async move {
            match recommend_to_friend(&api, request).await {
                Ok(reply) => {
                    search.reset(SESSION);
                    friend.set(String::new());
                    notice.set(Some((NoticeKind::Success, reply.message)));
                }
                Err(err) => notice.set(Some((NoticeKind::Error, user_message(&err)))),
            }
            busy.set(false);
        });
    };

    let (kind, message) = notice().unwrap_or_default();

    rsx! {
        div { class: "page",
            h2 { class: "page-title", "Recommend a movie" }
            Notice { kind, message }
            form { class: "page-form", onsubmit: on_submit,
                label { class: "form-label", r#for: "friend-username", "Friend" }
                input {
                    id: "friend-username",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Username",
                    value: "{friend}",
                    oninput: move |e: FormEvent| friend.set(e.value()),
                }
                TitlePicker {
                    session: SESSION,
                    label: "Title",
                    placeholder: "Start typing to search...",
                }
                button { class: "form-button", r#type: "submit", disabled: busy(), "Send recommendation" }
            }
        }
    }
}
