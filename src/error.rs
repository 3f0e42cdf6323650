use thiserror::Error;

/// Errors from the parts of the sketchpad that touch the outside world.
///
/// Drawing itself never fails; undo/redo on empty stacks are reported as
/// plain `false` results instead.
#[derive(Debug, Error)]
pub enum SketchpadError {
    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config data: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid font file: {0}")]
    InvalidFont(String),
}

/// Result type for fallible sketchpad operations
pub type SketchpadResult<T> = Result<T, SketchpadError>;
