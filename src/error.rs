use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the listing API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Property {0} not found")]
    NotFound(String),

    /// A newer request superseded this one before it completed
    #[error("Request superseded by a newer one")]
    Cancelled,
}

impl ApiError {
    /// Superseded requests are expected and should never reach the user as failures
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

/// Validation errors for the add/edit property form
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter a title")]
    MissingTitle,

    #[error("Please choose a property type")]
    MissingPropertyType,

    #[error("Please enter a valid image URL")]
    MissingImageUrl,
}
