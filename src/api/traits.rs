use crate::error::ApiError;
use crate::models::{ImageRecord, PropertyRecord};
use async_trait::async_trait;

/// Read side of the listing backend. Pages depend on this rather than on a
/// concrete client so they can be fed from a fixture.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Every listing, in backend order
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>, ApiError>;

    /// One listing with its images
    async fn fetch_one(&self, id: &str) -> Result<PropertyRecord, ApiError>;

    /// Images of one listing, in display order
    async fn fetch_images(&self, id: &str) -> Result<Vec<ImageRecord>, ApiError>;

    /// Get the name of the backend
    fn source_name(&self) -> &'static str;
}
