use crate::cli::Args;
use http::Method;
use tower_http::cors::{Any, CorsLayer};

// The resize endpoint is meant to be called straight from browser pages on
// arbitrary hosts, so any origin is allowed.
pub fn layer(_args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
