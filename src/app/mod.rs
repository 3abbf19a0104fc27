pub mod banner;
pub mod state;

use axum::body::Body;
use axum::http::Request;
use axum::serve::ListenerExt;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::route;

pub fn build(config: &Config) -> Router {
    Router::new()
        .merge(route::courses::router())
        .merge(route::folder::router())
        .merge(route::videos::router())
        .fallback_service(ServeDir::new(&config.server.frontend_dir))
        .with_state(state::App::new(&config.folder))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request", method = %request.method(), uri = %request.uri()
            )
        }))
}

/// Serves `router` on `listener` until the server fails, with `TCP_NODELAY` set on every
/// accepted connection.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    let listener = listener.tap_io(|tcp| {
        if let Err(error) = tcp.set_nodelay(true) {
            tracing::warn!(set_tcp_nodelay_error = ?error);
        }
    });
    axum::serve(listener, router).await
}
