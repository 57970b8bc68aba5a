//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/` and wrapped in the access-log middleware.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router over the given store handle.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/advocates",
            get(endpoints::advocates::list)
                .post(endpoints::advocates::create)
                .put(endpoints::advocates::update)
                .delete(endpoints::advocates::remove),
        )
        .route("/specialties", get(endpoints::specialties::list))
        .route("/seed", post(endpoints::seed::run))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::access_log::log_access));

    Router::new().nest("/api", api)
}
