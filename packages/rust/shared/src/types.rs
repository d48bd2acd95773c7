//! Core domain types for web page analysis.
//!
//! These types define the wire shape of an analysis request and response.
//! All of them are created fresh per request and discarded after the
//! response is serialized.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use url::Url;

// ---------------------------------------------------------------------------
// Request envelope
// ---------------------------------------------------------------------------

/// The analysis request envelope.
///
/// `content` is a content-type-specific payload; it is decoded by the
/// processor registered for `content_type`, so shape errors surface as
/// content-type-specific validation failures.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    /// Registered processor key, e.g. `"html"`.
    pub content_type: String,
    /// Processor-specific payload.
    pub content: serde_json::Value,
}

/// Payload for the `html` content type: page markup plus its origin URL
/// and the headers the page was fetched with.
#[derive(Debug, Clone, Deserialize)]
pub struct RawContent {
    /// Raw page markup.
    pub html: String,
    /// Page origin, used to resolve relative resource URLs.
    pub url: Url,
    /// Response headers recorded by the fetcher.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Extracted content
// ---------------------------------------------------------------------------

/// Readable content extracted from a page, plus its ranked keywords.
///
/// Exactly one of `text` or `error` is present after processing; `title`
/// may be present independently of success, and `keywords` only ever
/// accompanies `text`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractedBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Social cards
// ---------------------------------------------------------------------------

/// Open Graph card read from `og:*` meta tags.
///
/// `title` and `type` are the required minimum; a page missing either has
/// no card at all (`social.opengraph` is `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenGraphCard {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the card was synthesized by scraping fallback heuristics
    /// rather than read directly from explicit tags.
    pub scrape: bool,
}

/// Twitter card read from `twitter:*` meta tags.
///
/// `card` is required; a page without `twitter:card` has no card at all.
/// Field keys mirror the standard meta-property suffixes, including the
/// colon in `image:src`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub card: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "image:src",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_src: Option<String>,
}

/// The two independently-optional social cards. Absent cards serialize as
/// explicit `null`, not as missing keys.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SocialCards {
    pub opengraph: Option<OpenGraphCard>,
    pub twitter: Option<TwitterCard>,
}

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

/// A ranked keyword phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    /// Lower-cased candidate phrase.
    pub phrase: String,
    /// RAKE score (sum of constituent word degree/frequency ratios).
    pub score: f64,
}

/// Ranked keyword phrases, ordered by descending score with ties broken
/// by first occurrence in the source text.
///
/// Serializes as a JSON object keyed by phrase, in rank order. Phrases are
/// deduplicated case-insensitively before ranking, so the keying is
/// collision-free.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keywords(pub Vec<Keyword>);

impl Keywords {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate phrases and scores in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.0.iter()
    }
}

impl Serialize for Keywords {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for kw in &self.0 {
            map.serialize_entry(&kw.phrase, &kw.score)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

/// The assembled analysis response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub content: ExtractedBody,
    pub social: SocialCards,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracted_body_success_shape() {
        let body = ExtractedBody {
            title: Some("test page".into()),
            text: Some("Lorem ipsum".into()),
            keywords: Some(Keywords(vec![Keyword {
                phrase: "lorem ipsum".into(),
                score: 4.0,
            }])),
            error: None,
        };

        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["title"], "test page");
        assert_eq!(json["text"], "Lorem ipsum");
        assert_eq!(json["keywords"]["lorem ipsum"], 4.0);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn extracted_body_degraded_shape() {
        let body = ExtractedBody {
            title: Some("test page".into()),
            text: None,
            keywords: None,
            error: Some("failed to extract content".into()),
        };

        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["error"], "failed to extract content");
        assert!(json.get("text").is_none());
        assert!(json.get("keywords").is_none());
    }

    #[test]
    fn keywords_serialize_in_rank_order() {
        let keywords = Keywords(vec![
            Keyword {
                phrase: "first phrase".into(),
                score: 9.0,
            },
            Keyword {
                phrase: "second phrase".into(),
                score: 4.5,
            },
        ]);

        let json = serde_json::to_string(&keywords).expect("serialize");
        // Streamed map serialization preserves rank order on the wire.
        assert!(json.find("first phrase").unwrap() < json.find("second phrase").unwrap());
    }

    #[test]
    fn twitter_card_image_src_key() {
        let card = TwitterCard {
            card: "summary_large_image".into(),
            site: Some("@topicaxis".into()),
            creator: None,
            title: None,
            description: None,
            image_src: Some("http://example.com/image.png".into()),
        };

        let json = serde_json::to_value(&card).expect("serialize");
        assert_eq!(json["image:src"], "http://example.com/image.png");
        assert!(json.get("creator").is_none());
    }

    #[test]
    fn absent_social_cards_serialize_as_null() {
        let social = SocialCards::default();
        let json = serde_json::to_value(&social).expect("serialize");
        assert!(json["opengraph"].is_null());
        assert!(json["twitter"].is_null());
    }

    #[test]
    fn raw_content_requires_url() {
        let payload = serde_json::json!({
            "html": "<html></html>",
            "headers": {"Content-Type": "text/html"},
        });

        let parsed: std::result::Result<RawContent, _> = serde_json::from_value(payload);
        assert!(parsed.is_err());
    }

    #[test]
    fn raw_content_headers_default_to_empty() {
        let payload = serde_json::json!({
            "html": "<html></html>",
            "url": "http://www.example.com",
        });

        let parsed: RawContent = serde_json::from_value(payload).expect("deserialize");
        assert!(parsed.headers.is_empty());
        assert_eq!(parsed.url.as_str(), "http://www.example.com/");
    }
}
