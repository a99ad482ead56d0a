use thiserror::Error;

// Custom Result type alias for convenient use across the project
pub type Result<T> = std::result::Result<T, FootpathError>;

#[derive(Error, Debug)]
pub enum FootpathError {
    #[error("Directions transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Directions service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Malformed route geometry: {0}")]
    Geometry(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
