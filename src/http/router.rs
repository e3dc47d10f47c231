use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::cors;
use crate::{health, resize};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let resize_routes = Router::new()
        .route("/resize", post(resize::handlers::resize))
        .layer(DefaultBodyLimit::max(args.max_body_bytes));

    Router::new()
        .nest("/health", health_routes)
        .merge(resize_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
