//! The content analysis pipeline: processor registry, the html processor,
//! and the top-level [`ContentAnalyser`] dispatcher.
//!
//! Partial-failure policy: content and social extraction failures are
//! expected for malformed pages and degrade inside the processor; keyword
//! ranking failures and anything else unexpected surface as an opaque
//! processing error at the analyser boundary.

mod analyser;
mod html;
mod processor;

pub use analyser::ContentAnalyser;
pub use html::{CONTENT_EXTRACTION_ERROR, HtmlProcessor};
pub use processor::{ContentProcessor, ProcessorRegistry};
