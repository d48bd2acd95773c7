//! Content processor trait and static registry.
//!
//! Each processor owns one declared content type. The registry is built
//! once at startup and looked up by key; an unknown key is an
//! unsupported-content-type error at the analyser boundary.

use std::collections::HashMap;
use std::sync::Arc;

use tas_shared::{AnalysisResult, Result};
use tas_keywords::StopList;

use crate::html::HtmlProcessor;

/// A content-type-specific processor.
///
/// `process` receives the raw envelope payload: decoding it is part of the
/// processor's contract, so structural validation failures are
/// content-type-specific.
pub trait ContentProcessor: Send + Sync {
    /// Registry key this processor handles, e.g. `"html"`.
    fn content_type(&self) -> &'static str;

    /// Decode the payload and run the extraction pipeline.
    fn process(&self, payload: &serde_json::Value) -> Result<AnalysisResult>;
}

/// Holds registered processors, keyed by content type.
pub struct ProcessorRegistry {
    processors: HashMap<&'static str, Box<dyn ContentProcessor>>,
}

impl ProcessorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            processors: HashMap::new(),
        }
    }

    /// Create a registry with all built-in processors.
    pub fn with_default_processors(stoplist: Arc<StopList>) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(HtmlProcessor::new(stoplist)));
        registry
    }

    /// Register a processor under its own content-type key.
    pub fn register(&mut self, processor: Box<dyn ContentProcessor>) {
        self.processors.insert(processor.content_type(), processor);
    }

    /// Look up the processor for a declared content type.
    pub fn get(&self, content_type: &str) -> Option<&dyn ContentProcessor> {
        self.processors.get(content_type).map(Box::as_ref)
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
