//! Errors surfaced by the renderer.
//!
//! Geometric misses, exhausted bounce budgets and total internal reflection
//! are ordinary values inside the tracer and never show up here.

use lumen_core::SceneError;
use thiserror::Error;

/// Errors that can occur while setting up or finishing a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
