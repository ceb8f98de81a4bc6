// Stop word filtering.
//
// The built-in list is a curated set of common English words tuned for tag
// candidacy; the `stop-words` crate supplies fuller per-language lists when
// content isn't English.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Common English words excluded from tag candidacy regardless of frequency.
const BUILTIN: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
    "can", "like", "time", "no", "just", "him", "know", "take", "people", "into", "year", "your",
    "good", "some", "could", "them", "see", "other", "than", "then", "now", "look", "only",
    "come", "its", "over", "think", "also", "back", "after", "use", "two", "how", "our", "work",
    "first", "well", "way", "even", "new", "want", "because", "any", "these", "give", "day",
    "most", "us",
];

/// A set of words excluded from tag candidacy.
///
/// Membership checks always lowercase the probe, so stop word filtering is
/// case-insensitive no matter how the extractor is configured.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StopWords {
    /// The built-in English list.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN.iter().copied())
    }

    /// An empty set (no filtering).
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from a custom word list.
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

    /// Load the `stop-words` crate list for a language code.
    ///
    /// Unrecognized codes fall back to the built-in English list.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "ru" | "russian" => LANGUAGE::Russian,
            "pl" | "polish" => LANGUAGE::Polish,
            "tr" | "turkish" => LANGUAGE::Turkish,
            _ => return Self::builtin(),
        };
        Self::from_words(get(lang))
    }

    /// Add words to the set.
    pub fn add(&mut self, words: &[&str]) {
        for word in words {
            self.words.insert(word.to_lowercase());
        }
    }

    /// Remove words from the set.
    pub fn remove(&mut self, words: &[&str]) {
        for word in words {
            self.words.remove(&word.to_lowercase());
        }
    }

    /// Check membership; the probe is lowercased first.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in the set, sorted for stable display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(|w| w.as_str()).collect();
        words.sort_unstable();
        words
    }
}
