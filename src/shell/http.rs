use std::path::Path;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::attendance::use_cases::check_in::inbound::http as check_in_http;
use crate::modules::attendance::use_cases::list_attendees::inbound::http as list_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

/// API routes, with everything else served from `assets_dir`.
pub fn router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/api/attendees", get(list_http::handle))
        .route("/api/checkin", post(check_in_http::handle))
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .with_state(state)
        .fallback_service(ServeDir::new(assets_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
