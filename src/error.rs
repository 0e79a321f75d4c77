use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure of a single resize invocation. The first failing step wins.
#[derive(Debug, Error)]
pub enum ResizeError {
    /// Staging the input or reading the output back failed.
    #[error("temporary storage failed: {0}")]
    Storage(#[from] std::io::Error),

    /// The staged bytes are not a decodable PNG.
    #[error("failed to read image: {0}")]
    Decode(#[source] image::ImageError),

    /// The resized image could not be encoded or written.
    #[error("failed to write image: {0}")]
    Encode(#[source] image::ImageError),
}

impl ResizeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResizeError::Decode(_) => StatusCode::BAD_REQUEST,
            ResizeError::Storage(_) | ResizeError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ResizeError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
