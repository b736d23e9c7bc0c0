pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod session;

pub use routes::AppState;

/// Create the app router with request tracing
///
/// Used by `serve` and by integration tests, which drive it without
/// binding a socket.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state).layer(tower_http::trace::TraceLayer::new_for_http())
}
