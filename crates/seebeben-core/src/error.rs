use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Malformed GeoJSON document: {0}")]
    Document(#[source] serde_json::Error),
    #[error("Malformed feature entry: {0}")]
    Feature(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
