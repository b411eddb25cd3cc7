//! Axum router construction.
//!
//! Builds the full application router with all route groups and middleware
//! layers.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::middleware::request_id::request_id_middleware;
use crate::routes;

/// Build the complete Axum router.
pub fn build_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(routes::health::status))
        // Discovery
        .route(
            "/discover/{kind}/popular",
            get(routes::discover::popular),
        )
        .route(
            "/discover/{kind}/top_rated",
            get(routes::discover::top_rated),
        )
        .route(
            "/discover/{kind}/genre/{genre_id}",
            get(routes::discover::by_genre),
        )
        // Details
        .route("/details/{kind}/{id}", get(routes::details::title))
        .route(
            "/details/{kind}/{id}/similar",
            get(routes::details::similar),
        )
        .route(
            "/details/{kind}/{id}/recommendations",
            get(routes::details::recommendations),
        )
        .route("/person/{id}", get(routes::details::person))
        // Genres and search
        .route("/genres/{kind}", get(routes::genres::list_genres))
        .route("/search/{kind}", get(routes::search::search));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
