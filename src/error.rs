use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("placement anchor ({x}, {y}) resolves to no orientation")]
    MalformedPlacement { x: f64, y: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
