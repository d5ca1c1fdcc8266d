//! Client library for the Realo real-estate listing API: tolerant response
//! normalization, in-memory filtering and sorting, and the back-office
//! operations of the listing site.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod models;
pub mod normalize;
pub mod session;

pub use api::{LatestRequest, ListingSource, RealoClient};
pub use config::Config;
pub use error::{ApiError, FormError};
pub use filter::{FilterCriteria, ListingView, SortOrder};
pub use models::{ImageRecord, PropertyRecord};
