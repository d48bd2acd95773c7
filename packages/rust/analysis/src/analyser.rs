//! Top-level dispatcher for analysis requests.

use std::sync::Arc;

use tracing::{error, instrument};

use tas_keywords::StopList;
use tas_shared::{AnalysisRequest, AnalysisResult, Result, TasError};

use crate::processor::ProcessorRegistry;

/// Dispatches an analysis request to the processor registered for its
/// declared content type.
pub struct ContentAnalyser {
    registry: ProcessorRegistry,
}

impl ContentAnalyser {
    /// Create an analyser over an explicit registry.
    pub fn new(registry: ProcessorRegistry) -> Self {
        Self { registry }
    }

    /// Create an analyser with the built-in processors.
    pub fn with_defaults(stoplist: Arc<StopList>) -> Self {
        Self::new(ProcessorRegistry::with_default_processors(stoplist))
    }

    /// Analyse one request.
    ///
    /// Fails with `UnsupportedContentType` for an unregistered key,
    /// `InvalidContent` when the payload fails the processor's structural
    /// validation, and `Processing` for any unexpected processor error —
    /// in that last case no partial result survives, because a failure in
    /// a step that itself isolates failures is treated as a bug.
    #[instrument(skip_all, fields(content_type = %request.content_type))]
    pub fn process(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let processor = self
            .registry
            .get(&request.content_type)
            .ok_or_else(|| TasError::unsupported_content_type(&request.content_type))?;

        processor.process(&request.content).map_err(|e| match e {
            e @ TasError::InvalidContent { .. } => e,
            other => {
                // Full detail stays server-side; callers get an opaque
                // processing error.
                error!(error = %other, "processor failed unexpectedly");
                TasError::processing("failed to process content")
            }
        })
    }
}
