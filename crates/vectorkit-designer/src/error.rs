use thiserror::Error;

/// Failures while flipping raster content.
#[derive(Error, Debug)]
pub enum FlipError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Image worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
