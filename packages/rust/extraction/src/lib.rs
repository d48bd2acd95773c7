//! Readable-content and social-metadata extraction over `scraper`.
//!
//! Both extractors are exposed as traits so the analysis pipeline can be
//! assembled with substitutes in tests.

mod readable;
mod social;

pub use readable::{ContentExtractor, PageText, ReadableContentExtractor, extract_title};
pub use social::{SocialExtractor, SocialMetadataExtractor};
