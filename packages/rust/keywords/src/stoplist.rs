//! Stop-word list loading.
//!
//! The stop list is loaded once at process start and shared read-only
//! across all requests. A missing or unreadable file is a startup error,
//! never a per-request one.

use std::collections::HashSet;
use std::path::Path;

use tas_shared::{Result, TasError};

/// An immutable set of lower-cased words excluded from keyword candidacy.
#[derive(Debug, Clone)]
pub struct StopList {
    words: HashSet<String>,
}

impl StopList {
    /// Load a stop list from a file with one word per line.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TasError::io(path, e))?;

        let list = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );

        if list.is_empty() {
            return Err(TasError::config(format!(
                "stop list {} contains no words",
                path.display()
            )));
        }

        tracing::debug!(?path, words = list.len(), "stop list loaded");
        Ok(list)
    }

    /// Build a stop list from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Whether `word` is a stop word. The lookup is case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_list_path() -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data/SmartStoplist.txt")
    }

    #[test]
    fn loads_shipped_stop_list() {
        let list = StopList::load(&stop_list_path()).expect("load stop list");
        assert!(list.len() > 100);
        assert!(list.contains("the"));
        assert!(list.contains("and"));
        assert!(!list.contains("keyword"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let list = StopList::from_words(["The", "AND"]);
        assert!(list.contains("the"));
        assert!(list.contains("And"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = StopList::load(Path::new("/nonexistent/stoplist.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stoplist.txt"));
    }
}
