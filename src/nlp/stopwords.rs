//! Stopword filtering
//!
//! This module provides stopword filtering with a built-in Khmer list,
//! multi-language lists from the `stop-words` crate, and custom lists.
//!
//! The default pipeline passes an empty filter: stopword exclusion is a
//! supported but inactive knob, enabled via `--stopwords` on the CLI or
//! [`crate::Summarizer::with_stopwords`].

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for excluding stopwords from similarity counting
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase).
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create an empty stopword filter (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter for the given language.
    ///
    /// `km`/`khmer` uses the built-in list; other codes resolve through the
    /// `stop-words` crate, falling back to English for unknown languages.
    pub fn for_language(language: &str) -> Self {
        let stopwords = Self::load_stopwords(language);
        Self { stopwords }
    }

    /// Create a stopword filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword. Matching is case-insensitive.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.is_empty() {
            return false;
        }
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Load stopwords for a language.
    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            // Khmer has no list in the crate; use the built-in one.
            "km" | "khmer" => return Self::khmer_stopwords(),
            "en" | "english" => LANGUAGE::English,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "de" | "german" => LANGUAGE::German,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }

    /// Common Khmer function words.
    fn khmer_stopwords() -> FxHashSet<String> {
        [
            "នៅ", "ដែល", "និង", "ជា", "បាន", "នេះ", "នោះ", "ក្នុង", "របស់", "គឺ",
            "ទេ", "ថា", "ពី", "ដោយ", "ទៅ", "មាន", "មួយ", "ការ", "ខ្ញុំ", "អ្នក",
            "គេ", "យើង", "គាត់", "វា", "តែ", "ផង", "ហើយ", "ដើម្បី", "ពេល", "នឹង",
            "ឬ", "ក៏", "អស់", "ទាំង", "លើ", "ក្រោម", "មិន", "ដល់", "ចំពោះ", "ទៀត",
            "ណា", "ដែរ", "ឲ្យ", "ឡើយ", "ចុះ", "ចេញ", "ចូល", "ដូច", "រួច", "ក្រោយ",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_khmer_stopwords() {
        let filter = StopwordFilter::for_language("km");

        assert!(filter.is_stopword("នៅ"));
        assert!(filter.is_stopword("ដែល"));
        assert!(filter.is_stopword("និង"));
        assert!(!filter.is_stopword("សៀវភៅ"));
    }

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::for_language("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(!filter.is_stopword("summarizer"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(!filter.is_stopword("នៅ"));
        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(StopwordFilter::default().is_empty());
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::for_language("xx");
        assert!(filter.is_stopword("the"));
    }
}
