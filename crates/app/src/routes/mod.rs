pub mod dashboard;
pub mod not_found;
pub mod recommend;

use dioxus::prelude::*;

use crate::auth::use_auth;
use dashboard::Dashboard;
use not_found::NotFound;
use recommend::Recommend;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/recommend")]
    Recommend {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top bar with the two search surfaces.
#[component]
fn AppLayout() -> Element {
    let auth = use_auth();

    rsx! {
        div { class: "app-shell",
            nav { class: "app-navbar",
                span { class: "app-brand", "Reelwatch" }
                Link { to: Route::Dashboard {}, class: "app-nav-link", "My list" }
                Link { to: Route::Recommend {}, class: "app-nav-link", "Recommend" }
                if !auth.is_authenticated() {
                    span { class: "app-nav-hint", "Not signed in" }
                }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
