pub mod client;
pub mod latest;
pub mod traits;

pub use client::RealoClient;
pub use latest::LatestRequest;
pub use traits::ListingSource;
