use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::AppState;

pub async fn resize_image(State(state): State<AppState>, body: Bytes) -> Response {
    info!("Resizing image payload of {} bytes", body.len());

    let resizer = state.resizer.clone();
    let result = tokio::task::spawn_blocking(move || resizer.resize(&body)).await;

    match result {
        Ok(Ok(png)) => {
            info!("Resized image, returning {} bytes", png.len());
            ([(header::CONTENT_TYPE, "image/png")], png).into_response()
        }
        Ok(Err(e)) => e.into_response(),
        Err(e) => {
            error!("Resize task did not complete: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "resize task did not complete").into_response()
        }
    }
}

pub async fn health() -> &'static str {
    "ok"
}
