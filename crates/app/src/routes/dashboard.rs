use dioxus::prelude::*;
use shared_types::{WatchStatus, ALL_WATCH_STATUSES};
use shared_ui::{Notice, NoticeKind};

use crate::auth::use_auth;
use crate::components::TitlePicker;
use crate::search_select::{use_search_select, SessionId};
use crate::submit::{add_to_watchlist, prepare_add, user_message};

const SESSION: SessionId = SessionId::Dashboard;

/// "Add to watchlist" form. Only titles picked from the suggestions are accepted.
#[component]
pub fn Dashboard() -> Element {
    let search = use_search_select();
    let auth = use_auth();
    let mut status = use_signal(WatchStatus::default);
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
            prepare_add(&*controller, &input, status())
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
            match add_to_watchlist(&api, request).await {
                Ok(reply) => {
                    search.reset(SESSION);
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
            h2 { class: "page-title", "Add a movie" }
            Notice { kind, message }
            form { class: "page-form", onsubmit: on_submit,
                TitlePicker {
                    session: SESSION,
                    label: "Title",
                    placeholder: "Start typing to search...",
                }
                label { class: "form-label", r#for: "watch-status", "Status" }
                select {
                    id: "watch-status",
                    class: "form-input",
                    value: "{status().as_str()}",
                    onchange: move |e: FormEvent| status.set(WatchStatus::from_label(&e.value())),
                    for s in ALL_WATCH_STATUSES {
                        option { key: "{s.as_str()}", value: "{s.as_str()}", "{s}" }
                    }
                }
                button { class: "form-button", r#type: "submit", disabled: busy(), "Add to list" }
            }
        }
    }
}
