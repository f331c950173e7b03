//! Service layer for page retrieval and link extraction.
//!
//! - `PageFetcher`: Retrieves raw markup for an investor-relations page
//! - `LinkExtractor`: Turns markup into a normalized link list

pub mod extractor;
pub mod fetcher;

pub use extractor::LinkExtractor;
pub use fetcher::{HttpFetcher, PageFetcher};
