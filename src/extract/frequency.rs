// Frequency-based keyword extraction — the default TagExtractor.
//
// Single-pass and deterministic: assemble the weighted buffer, tokenize
// into Unicode letter/digit runs, filter, count, rank. Ties keep the order
// in which words were first seen in the buffer, so identical input and
// configuration always produce the identical sequence.

use std::collections::HashMap;

use tracing::debug;

use crate::config::ExtractorConfig;

use super::buffer::{self, AnalysisInput};
use super::stopwords::StopWords;
use super::suggestions::{RankedTag, TagSuggestions};
use super::traits::TagExtractor;

/// Ranks words by raw occurrence count in the weighted analysis buffer.
#[derive(Debug, Clone, Default)]
pub struct FrequencyExtractor {
    config: ExtractorConfig,
    stop_words: StopWords,
}

/// Occurrence count plus first-seen position for the stable tie-break.
struct WordStat {
    count: usize,
    first_seen: usize,
}

impl FrequencyExtractor {
    /// Extractor with the given config and the built-in stop word list.
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            stop_words: StopWords::default(),
        }
    }

    /// Replace the stop word set.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }
}

impl TagExtractor for FrequencyExtractor {
    fn suggest(&self, input: &AnalysisInput) -> TagSuggestions {
        // Zero thresholds reaching the core behave as 1; range validation
        // proper belongs to the caller (ExtractorConfig::clamped).
        let max_tags = self.config.max_tags.max(1);
        let min_word_length = self.config.min_word_length.max(1);
        let min_word_frequency = self.config.min_word_frequency.max(1);

        let buffer = buffer::assemble(input, &self.config.sources);
        let buffer = if self.config.case_sensitive {
            buffer
        } else {
            buffer.to_lowercase()
        };

        // Tokens are maximal runs of Unicode letters or digits; everything
        // else separates, which also collapses whitespace runs.
        let mut frequencies: HashMap<String, WordStat> = HashMap::new();
        for token in buffer.split(|c: char| !c.is_alphanumeric()) {
            if token.is_empty() {
                continue;
            }
            if token.chars().count() < min_word_length {
                continue;
            }
            if self.stop_words.contains(token) {
                continue;
            }
            if is_numeric_token(token) {
                continue;
            }

            let first_seen = frequencies.len();
            frequencies
                .entry(token.to_string())
                .or_insert(WordStat {
                    count: 0,
                    first_seen,
                })
                .count += 1;
        }

        let distinct = frequencies.len();

        let mut ranked: Vec<(String, WordStat)> = frequencies
            .into_iter()
            .filter(|(_, stat)| stat.count >= min_word_frequency)
            .collect();
        ranked.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        ranked.truncate(max_tags);

        debug!(
            buffer_chars = buffer.len(),
            distinct_words = distinct,
            selected = ranked.len(),
            "Ranked tag candidates"
        );

        TagSuggestions {
            tags: ranked
                .into_iter()
                .map(|(word, stat)| RankedTag {
                    word,
                    count: stat.count,
                })
                .collect(),
        }
    }
}

/// Numeric literals make poor tags. Tokens are letter/digit runs, so a
/// decimal point never survives tokenization, but digit-leading scientific
/// forms like "12e5" still parse as numbers and are rejected too.
fn is_numeric_token(token: &str) -> bool {
    token.chars().all(char::is_numeric)
        || (token.starts_with(|c: char| c.is_ascii_digit()) && token.parse::<f64>().is_ok())
}
