//! RAKE-style keyword ranking.
//!
//! Candidate phrases are maximal runs of non-stop words: the text is cut
//! at sentence-level punctuation, at stop words, and at purely numeric
//! tokens. Words keep internal hyphens and apostrophes and are compared
//! lower-cased. Each word is scored `degree / frequency` over the
//! within-phrase co-occurrence graph and a phrase scores the sum of its
//! words. The algorithm is pure and deterministic: ranking the same text
//! twice yields identical ordered output.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tas_shared::{Keyword, Keywords, Result};

use crate::stoplist::StopList;

/// Ranks keyword phrases extracted from plain text.
///
/// The trait exists so the processor can be handed a substitute in tests;
/// [`RakeRanker`] is the production implementation.
pub trait KeywordRanker: Send + Sync {
    /// Rank keyword phrases in `text`. Empty text and text with no words
    /// surviving the stop list yield empty keywords, not an error.
    fn rank(&self, text: &str) -> Result<Keywords>;
}

/// Hard phrase boundaries: sentence punctuation and bracketing.
/// Hyphens and apostrophes are deliberately absent so they survive
/// inside words.
static PHRASE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?,;:\t\n\r()\[\]{}<>"…]+"#).expect("valid regex")
});

/// RAKE implementation over a process-wide stop list.
pub struct RakeRanker {
    stoplist: Arc<StopList>,
}

impl RakeRanker {
    pub fn new(stoplist: Arc<StopList>) -> Self {
        Self { stoplist }
    }

    /// Split `text` into candidate phrases, each a run of non-stop words.
    fn candidate_phrases(&self, text: &str) -> Vec<Vec<String>> {
        let mut phrases = Vec::new();

        for fragment in PHRASE_BOUNDARY.split(text) {
            let mut current: Vec<String> = Vec::new();

            for token in fragment.split_whitespace() {
                match normalize_word(token) {
                    Some(word) if !self.stoplist.contains(&word) => current.push(word),
                    // Stop words, numbers, and punctuation-only tokens cut
                    // the phrase.
                    _ => {
                        if !current.is_empty() {
                            phrases.push(std::mem::take(&mut current));
                        }
                    }
                }
            }

            if !current.is_empty() {
                phrases.push(current);
            }
        }

        phrases
    }
}

impl KeywordRanker for RakeRanker {
    fn rank(&self, text: &str) -> Result<Keywords> {
        let phrases = self.candidate_phrases(text);
        if phrases.is_empty() {
            return Ok(Keywords::default());
        }

        // Word degree and frequency over the within-phrase co-occurrence
        // graph. Degree counts co-occurrences including the word itself.
        let mut freq: HashMap<&str, f64> = HashMap::new();
        let mut degree: HashMap<&str, f64> = HashMap::new();

        for phrase in &phrases {
            let shared = (phrase.len() - 1) as f64;
            for word in phrase {
                *freq.entry(word).or_default() += 1.0;
                *degree.entry(word).or_default() += shared;
            }
        }

        let word_score = |word: &str| {
            let f = freq[word];
            (degree[word] + f) / f
        };

        // Deduplicate case-insensitively (words are already lower-cased),
        // keeping the highest score and the earliest occurrence per phrase.
        let mut best: HashMap<String, (f64, usize)> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for (position, phrase) in phrases.iter().enumerate() {
            let key = phrase.join(" ");
            let score: f64 = phrase.iter().map(|w| word_score(w)).sum();

            match best.get_mut(&key) {
                Some((existing, _)) => {
                    if score > *existing {
                        *existing = score;
                    }
                }
                None => {
                    best.insert(key.clone(), (score, position));
                    order.push(key);
                }
            }
        }

        let mut ranked: Vec<Keyword> = order
            .into_iter()
            .map(|phrase| {
                let (score, _) = best[&phrase];
                Keyword { phrase, score }
            })
            .collect();

        // `order` preserves first occurrence, and the sort is stable, so
        // equal scores keep source order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(Keywords(ranked))
    }
}

/// Lower-case a token and strip punctuation from its edges. Returns `None`
/// for tokens with no letters (purely numeric tokens act as boundaries).
fn normalize_word(token: &str) -> Option<String> {
    let trimmed = token.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() || !trimmed.chars().any(char::is_alphabetic) {
        return None;
    }
    Some(trimmed.to_lowercase())
}
