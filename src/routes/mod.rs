pub mod applications;
pub mod health;
pub mod jobs;

use axum::{
    middleware::from_fn,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{
    auth::{require_admin, require_bearer_auth},
    rate_limit::{rps_middleware, RateLimiter},
};
use crate::AppState;

/// Full HTTP surface. Admin-only and user routes carry their own auth layer;
/// everything shares one rate limiter.
pub fn app(state: AppState, rps: u32) -> Router {
    let public = Router::new()
        .route("/health", get(health::health))
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs/:id", get(jobs::get_job));

    let admin = Router::new()
        .route("/jobs", post(jobs::create_job))
        .route("/jobs/:id", patch(jobs::update_job))
        .route("/jobs/:id", delete(jobs::delete_job))
        .route_layer(from_fn(require_admin));

    let users = Router::new()
        .route("/users/:username/jobs/:id", post(applications::apply_for_job))
        .route_layer(from_fn(require_bearer_auth));

    public
        .merge(admin)
        .merge(users)
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            RateLimiter::new(rps),
            rps_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
