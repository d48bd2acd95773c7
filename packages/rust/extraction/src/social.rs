//! Social metadata extraction: Open Graph and Twitter Card meta tags.
//!
//! The two card types are read independently; a missing or invalid block
//! of one kind never affects the other.

use std::collections::HashMap;

use scraper::{Html, Selector};
use tas_shared::{OpenGraphCard, SocialCards, TwitterCard};
use url::Url;

/// Extracts social cards from raw HTML.
///
/// Constructor-injected into the html processor so tests can substitute a
/// stub. Card absence is modeled in the result, so extraction itself is
/// infallible.
pub trait SocialExtractor: Send + Sync {
    fn extract(&self, html: &str, url: &Url) -> SocialCards;
}

/// Default meta-tag reader.
pub struct SocialMetadataExtractor;

impl SocialExtractor for SocialMetadataExtractor {
    fn extract(&self, html: &str, url: &Url) -> SocialCards {
        let doc = Html::parse_document(html);

        SocialCards {
            opengraph: opengraph_card(&doc, url),
            twitter: twitter_card(&doc, url),
        }
    }
}

/// Collect `content` values of meta tags whose `attr` value starts with
/// `prefix`, keyed by the suffix after the prefix.
fn meta_values(doc: &Html, attr: &str, prefix: &str) -> HashMap<String, String> {
    let sel = Selector::parse(&format!("meta[{attr}^='{prefix}']")).unwrap();

    doc.select(&sel)
        .filter_map(|el| {
            let name = el.value().attr(attr)?.strip_prefix(prefix)?;
            let content = el.value().attr("content")?;
            Some((name.to_string(), content.to_string()))
        })
        .collect()
}

/// Build the Open Graph card. `og:title` and `og:type` are the required
/// minimum; without both there is no card.
fn opengraph_card(doc: &Html, url: &Url) -> Option<OpenGraphCard> {
    let mut values = meta_values(doc, "property", "og:");

    let title = values.remove("title")?;
    let kind = values.remove("type")?;

    Some(OpenGraphCard {
        title,
        kind,
        image: values.remove("image").map(|v| absolutize(&v, url)),
        url: values.remove("url"),
        description: values.remove("description"),
        // Cards read directly from explicit tags are never scraped.
        scrape: false,
    })
}

/// Build the Twitter card. `twitter:card` is required; without it there is
/// no card.
fn twitter_card(doc: &Html, url: &Url) -> Option<TwitterCard> {
    let mut values = meta_values(doc, "name", "twitter:");

    let card = values.remove("card")?;

    Some(TwitterCard {
        card,
        site: values.remove("site"),
        creator: values.remove("creator"),
        title: values.remove("title"),
        description: values.remove("description"),
        image_src: values.remove("image:src").map(|v| absolutize(&v, url)),
    })
}

/// Resolve a relative resource URL against the page URL. Already-absolute
/// values pass through byte-for-byte: card fields must exactly match the
/// tag values, so they are never re-serialized through `Url`.
fn absolutize(value: &str, base: &Url) -> String {
    if Url::parse(value).is_ok() {
        return value.to_string();
    }

    base.join(value)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| value.to_string())
}
