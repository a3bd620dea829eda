use thiserror::Error;

/// Inputs the core refuses to build state from.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BackdropError {
    #[error("viewport must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("device pixel ratio must be finite and positive, got {0}")]
    InvalidPixelRatio(f64),
    #[error("unknown technology identifier `{0}`")]
    UnknownTech(String),
}
