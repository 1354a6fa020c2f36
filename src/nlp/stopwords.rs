//! Stopword filtering
//!
//! Backed by the `stop-words` crate. The clause clusterer removes
//! stopwords from fused sentences but must keep negation markers, so the
//! filter supports explicit removals from the built-in list.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::AbsaConfig;

/// A filter for removing stopwords from tokenized sentences.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase).
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a stopword filter for the given language.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            // Default to English for unknown languages.
            _ => LANGUAGE::English,
        };
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Build the filter the clause clusterer uses: the configured
    /// language's list plus any extra stopwords, with every configured
    /// negation marker removed so negations survive filtering.
    pub fn for_clustering(cfg: &AbsaConfig) -> Self {
        let mut filter = Self::new(&cfg.language);
        let extra: Vec<&str> = cfg.extra_stopwords.iter().map(String::as_str).collect();
        filter.add_stopwords(&extra);
        let markers: Vec<&str> = cfg.negation_markers.iter().map(String::as_str).collect();
        filter.remove_stopwords(&markers);
        filter
    }

    /// Create a stopword filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add stopwords to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter.
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive).
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// True if the filter holds no stopwords.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
