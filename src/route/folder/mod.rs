pub mod current;
pub mod set;

use axum::routing::get;
use axum::Router;

use crate::app::state::App;

pub fn router() -> Router<App> {
    Router::new()
        .route("/api/set-folder", get(set::axum_handler))
        .route("/api/current-folder", get(current::axum_handler))
}
