use axum::{
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::Value;
use server::{state::AppState, title_search::TitleCatalog};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// What the fake catalog answers on `GET /search/shows`.
#[derive(Clone)]
pub enum Canned {
    /// 200 with this JSON body.
    Hits(Value),
    /// Bare status with an empty body.
    Status(StatusCode),
    /// 200 with a body that is not JSON.
    Garbage,
    /// Sleep before answering with an empty hit list.
    Slow(Duration),
}

/// A TVMaze stand-in listening on an ephemeral local port.
pub struct FakeCatalog {
    pub base_url: String,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeCatalog {
    /// Every `q` value the fake has received, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct FakeState {
    canned: Canned,
    queries: Arc<Mutex<Vec<String>>>,
}

async fn search_shows(
    State(fake): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    fake.queries
        .lock()
        .unwrap()
        .push(params.get("q").cloned().unwrap_or_default());

    match fake.canned {
        Canned::Hits(body) => axum::Json(body).into_response(),
        Canned::Status(status) => status.into_response(),
        Canned::Garbage => "<html>catalog maintenance</html>".into_response(),
        Canned::Slow(delay) => {
            tokio::time::sleep(delay).await;
            axum::Json(serde_json::json!([])).into_response()
        }
    }
}

/// Start a fake catalog on `127.0.0.1:0` answering with `canned`.
pub async fn spawn_catalog(canned: Canned) -> FakeCatalog {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/search/shows", get(search_shows))
        .with_state(FakeState {
            canned,
            queries: queries.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake catalog");
    let addr = listener.local_addr().expect("Fake catalog has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    FakeCatalog {
        base_url: format!("http://{addr}"),
        queries,
    }
}

/// Build the full API router pointed at `catalog` with the given timeout.
pub fn test_app_with_timeout(catalog: &FakeCatalog, timeout: Duration) -> Router {
    let catalog = TitleCatalog::new(catalog.base_url.clone(), timeout)
        .expect("Failed to build title catalog client");
    server::openapi::api_router(AppState::new(catalog))
}

/// Build the full API router pointed at `catalog`.
pub fn test_app(catalog: &FakeCatalog) -> Router {
    test_app_with_timeout(catalog, Duration::from_secs(5))
}

/// GET a route and parse the JSON response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    (status, body)
}
