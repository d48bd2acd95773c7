//! The html content processor.
//!
//! Runs three extraction passes over one page and assembles a single
//! result. Content extraction failures are expected for malformed pages
//! and degrade to an error marker in the result; keyword-ranking failures
//! indicate a ranker defect and propagate; each social card can be absent
//! without affecting the other.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use tas_extraction::{
    ContentExtractor, ReadableContentExtractor, SocialExtractor, SocialMetadataExtractor,
    extract_title,
};
use tas_keywords::{KeywordRanker, RakeRanker, StopList};
use tas_shared::{AnalysisResult, ExtractedBody, RawContent, Result, TasError};

use crate::processor::ContentProcessor;

/// Error marker placed in the result when readable-content extraction
/// fails for a page.
pub const CONTENT_EXTRACTION_ERROR: &str = "failed to extract content";

/// Processor for the `html` content type.
pub struct HtmlProcessor {
    content: Box<dyn ContentExtractor>,
    social: Box<dyn SocialExtractor>,
    ranker: Box<dyn KeywordRanker>,
}

impl HtmlProcessor {
    /// Create a processor with the default extractors and a RAKE ranker
    /// over the given stop list.
    pub fn new(stoplist: Arc<StopList>) -> Self {
        Self::with_extractors(
            Box::new(ReadableContentExtractor),
            Box::new(SocialMetadataExtractor),
            Box::new(RakeRanker::new(stoplist)),
        )
    }

    /// Create a processor from explicit extractor implementations. Tests
    /// use this to inject failing substitutes.
    pub fn with_extractors(
        content: Box<dyn ContentExtractor>,
        social: Box<dyn SocialExtractor>,
        ranker: Box<dyn KeywordRanker>,
    ) -> Self {
        Self {
            content,
            social,
            ranker,
        }
    }

    /// Extract readable content and rank its keywords.
    ///
    /// Extraction failure degrades to `{title, error}` with no keywords;
    /// the title is still attempted through an independent lookup. Ranking
    /// failure propagates.
    fn extract_body(&self, html: &str) -> Result<ExtractedBody> {
        match self.content.extract(html) {
            Ok(page) => {
                let keywords = self.ranker.rank(&page.text)?;
                debug!(keywords = keywords.len(), "content extracted");

                Ok(ExtractedBody {
                    title: page.title,
                    text: Some(page.text),
                    keywords: Some(keywords),
                    error: None,
                })
            }
            Err(e) => {
                warn!(error = %e, "content extraction failed, degrading");

                Ok(ExtractedBody {
                    title: extract_title(html),
                    text: None,
                    keywords: None,
                    error: Some(CONTENT_EXTRACTION_ERROR.into()),
                })
            }
        }
    }
}

impl ContentProcessor for HtmlProcessor {
    fn content_type(&self) -> &'static str {
        "html"
    }

    #[instrument(skip_all)]
    fn process(&self, payload: &serde_json::Value) -> Result<AnalysisResult> {
        let raw: RawContent = serde_json::from_value(payload.clone())
            .map_err(|e| TasError::invalid_content(format!("html payload: {e}")))?;

        let content = self.extract_body(&raw.html)?;
        let social = self.social.extract(&raw.html, &raw.url);

        Ok(AnalysisResult { content, social })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tas_extraction::PageText;
    use tas_shared::{Keywords, SocialCards};

    struct FailingContentExtractor;

    impl ContentExtractor for FailingContentExtractor {
        fn extract(&self, _html: &str) -> Result<PageText> {
            Err(TasError::extraction("boom"))
        }
    }

    struct FailingRanker;

    impl KeywordRanker for FailingRanker {
        fn rank(&self, _text: &str) -> Result<Keywords> {
            Err(TasError::processing("ranker defect"))
        }
    }

    fn fixture_payload() -> serde_json::Value {
        let html = std::fs::read_to_string(
            std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("../../../fixtures/html/test_page.html"),
        )
        .expect("read fixture");

        serde_json::json!({
            "url": "http://www.example.com",
            "html": html,
            "headers": {"Content-Type": "text/html"},
        })
    }

    fn default_processor() -> HtmlProcessor {
        HtmlProcessor::new(Arc::new(StopList::from_words([
            "the", "a", "of", "and", "sit", "et", "in", "ut", "nec", "eget",
        ])))
    }

    #[test]
    fn processes_fixture_page() {
        let result = default_processor()
            .process(&fixture_payload())
            .expect("process");

        assert_eq!(result.content.title.as_deref(), Some("test page"));
        assert!(result.content.text.as_deref().unwrap().starts_with("Lorem ipsum"));
        assert!(!result.content.keywords.as_ref().unwrap().is_empty());
        assert!(result.content.error.is_none());

        let og = result.social.opengraph.expect("opengraph card");
        assert_eq!(og.title, "test page title");
        assert_eq!(og.kind, "article");

        let twitter = result.social.twitter.expect("twitter card");
        assert_eq!(twitter.card, "summary_large_image");
    }

    #[test]
    fn missing_url_is_invalid_content() {
        let payload = serde_json::json!({"html": "<html></html>"});
        let err = default_processor().process(&payload).unwrap_err();
        assert!(matches!(err, TasError::InvalidContent { .. }));
    }

    #[test]
    fn content_failure_degrades_but_social_survives() {
        let processor = HtmlProcessor::with_extractors(
            Box::new(FailingContentExtractor),
            Box::new(SocialMetadataExtractor),
            Box::new(FailingRanker), // must never be reached
        );

        let result = processor.process(&fixture_payload()).expect("process");

        assert_eq!(result.content.title.as_deref(), Some("test page"));
        assert_eq!(
            result.content.error.as_deref(),
            Some(CONTENT_EXTRACTION_ERROR)
        );
        assert!(result.content.text.is_none());
        assert!(result.content.keywords.is_none());

        // Social extraction ran against the same input regardless.
        assert!(result.social.opengraph.is_some());
        assert!(result.social.twitter.is_some());
    }

    #[test]
    fn ranker_failure_propagates() {
        let processor = HtmlProcessor::with_extractors(
            Box::new(ReadableContentExtractor),
            Box::new(SocialMetadataExtractor),
            Box::new(FailingRanker),
        );

        let err = processor.process(&fixture_payload()).unwrap_err();
        assert!(matches!(err, TasError::Processing { .. }));
    }

    #[test]
    fn social_stub_absence_yields_null_cards() {
        struct NoCards;

        impl SocialExtractor for NoCards {
            fn extract(&self, _html: &str, _url: &url::Url) -> SocialCards {
                SocialCards::default()
            }
        }

        let processor = HtmlProcessor::with_extractors(
            Box::new(ReadableContentExtractor),
            Box::new(NoCards),
            Box::new(RakeRanker::new(Arc::new(StopList::from_words(["the"])))),
        );

        let result = processor.process(&fixture_payload()).expect("process");
        assert!(result.social.opengraph.is_none());
        assert!(result.social.twitter.is_none());
        assert!(result.content.text.is_some());
    }
}
