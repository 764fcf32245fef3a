//! Shared helpers for relay API integration tests.
//!
//! Rebuilds the production router and middleware stack from `main.rs` so
//! tests exercise the same request pipeline (request ID, timeout,
//! tracing, panic recovery) that production uses, and provides a fake
//! compute collaborator bound on an ephemeral port.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderName, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use relay_api::config::{ComputeConfig, Config, ServerConfig};
use relay_api::routes;
use relay_api::state::AppState;
use relay_compute::ComputeClient;
use relay_db::DbConfig;

/// Upstream timeout used by test clients. Kept short so timeout tests
/// run quickly.
pub const TEST_COMPUTE_TIMEOUT: Duration = Duration::from_secs(1);

/// Build a test `Config` pointing the compute client at `compute_url`.
pub fn test_config(compute_url: &str) -> Config {
    // The stub URL is `http://127.0.0.1:<port>`; split it back into the
    // host/port form the config carries.
    let authority = compute_url.trim_start_matches("http://");
    let (host, port) = authority
        .split_once(':')
        .expect("compute_url must be host:port");

    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        compute: ComputeConfig {
            host: host.to_string(),
            port: port.parse().unwrap(),
            timeout_secs: TEST_COMPUTE_TIMEOUT.as_secs(),
        },
        // Unused by handlers (they take the pool directly), but kept so
        // the state matches production shape.
        database: DbConfig {
            user: "postgres".to_string(),
            host: "localhost".to_string(),
            database: "logs".to_string(),
            password: "password".to_string(),
            port: 5432,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and compute collaborator URL.
pub fn build_test_app(pool: PgPool, compute_url: &str) -> Router {
    let config = test_config(compute_url);
    let compute = ComputeClient::new(config.compute.base_url(), TEST_COMPUTE_TIMEOUT)
        .expect("Failed to build compute client");

    let state = AppState {
        pool,
        config: Arc::new(config),
        compute: Arc::new(compute),
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::router())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Bind the given router on an ephemeral port and return its base URL.
///
/// Used to stand up fake compute collaborators for tests.
pub async fn spawn_collaborator(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL that refuses connections (bound then immediately closed).
pub async fn unreachable_collaborator() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}
