//! HTTP service that resizes PNG images to a fixed 128x128 thumbnail.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod image;

pub use crate::config::{Config, ConfigError};
pub use crate::error::ResizeError;
pub use crate::image::{ImageResizeHandler, TARGET_HEIGHT, TARGET_WIDTH};

#[derive(Debug, Clone)]
pub struct AppState {
    pub resizer: Arc<ImageResizeHandler>,
}

pub fn app(resizer: ImageResizeHandler, max_payload_bytes: usize) -> Router {
    let state = AppState {
        resizer: Arc::new(resizer),
    };

    Router::new()
        .route("/resize", post(handlers::resize_image))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_payload_bytes))
        .with_state(state)
}
