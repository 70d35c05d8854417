use http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Cross-origin policy for the browser front-end: any origin, any request
/// header, and the verbs the resource routes answer to. No credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
