pub mod notice;
pub mod search_results;

pub use notice::*;
pub use search_results::*;

use dioxus::prelude::*;

/// Stylesheets for every shared component. Mount once near the root.
#[component]
pub fn SharedStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/src/components/search_results/style.css") }
        document::Link { rel: "stylesheet", href: asset!("/src/components/notice/style.css") }
    }
}
