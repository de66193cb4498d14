use dioxus::prelude::*;

mod auth;
mod components;
mod routes;
mod search_select;
mod submit;

use auth::AuthState;
use routes::Route;
use search_select::use_search_select_provider;

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let state = server::state::AppState::from_config()?;
        tracing::info!(catalog = %state.catalog.base_url(), "Title search proxy ready");

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router(state));

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    use_search_select_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        shared_ui::SharedStyles {}
        Router::<Route> {}
    }
}
