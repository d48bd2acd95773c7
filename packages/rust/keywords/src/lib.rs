//! Keyword extraction: stop-word list loading and RAKE-style ranking.

mod rake;
mod stoplist;

pub use rake::{KeywordRanker, RakeRanker};
pub use stoplist::StopList;
