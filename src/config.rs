use std::env;

use serde::{Deserialize, Serialize};

/// Tuning knobs for a single extraction run.
///
/// A host is expected to clamp values into their documented ranges (via
/// [`ExtractorConfig::clamped`]) before handing the config to an extractor.
/// The extractor itself never validates ranges — it only guards against
/// zero thresholds by treating them as 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Upper bound on returned tags. Valid range 1-20, default 5.
    pub max_tags: usize,
    /// Minimum word length in logical characters (not bytes).
    /// Valid range 2-10, default 4.
    pub min_word_length: usize,
    /// Minimum occurrence count for a word to qualify.
    /// Valid range 1-10, default 2.
    pub min_word_frequency: usize,
    /// When false, the whole analysis buffer is lowercased before counting.
    /// Stop word checks are case-insensitive either way.
    pub case_sensitive: bool,
    /// Which text sources feed the analysis buffer, and how often each
    /// one's text is repeated in it.
    pub sources: SourceWeights,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_tags: 5,
            min_word_length: 4,
            min_word_frequency: 2,
            case_sensitive: false,
            sources: SourceWeights::default(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from `TAGMINT_*` environment variables.
    ///
    /// Unset or unparseable values fall back to the field default rather
    /// than aborting; the result is already clamped.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let mut sources = defaults.sources.clone();
        sources.title.enabled = env_flag("TAGMINT_ANALYZE_TITLE", sources.title.enabled);
        sources.content.enabled = env_flag("TAGMINT_ANALYZE_CONTENT", sources.content.enabled);
        sources.excerpt.enabled = env_flag("TAGMINT_ANALYZE_EXCERPT", sources.excerpt.enabled);

        Self {
            max_tags: env_usize("TAGMINT_MAX_TAGS", defaults.max_tags),
            min_word_length: env_usize("TAGMINT_MIN_WORD_LENGTH", defaults.min_word_length),
            min_word_frequency: env_usize(
                "TAGMINT_MIN_WORD_FREQUENCY",
                defaults.min_word_frequency,
            ),
            case_sensitive: env_flag("TAGMINT_CASE_SENSITIVE", defaults.case_sensitive),
            sources,
        }
        .clamped()
    }

    /// Clamp every field into its documented valid range.
    ///
    /// This is the host-boundary sanitization step; call it on any config
    /// assembled from untrusted input (env, flags, deserialized JSON).
    pub fn clamped(&self) -> Self {
        Self {
            max_tags: self.max_tags.clamp(1, 20),
            min_word_length: self.min_word_length.clamp(2, 10),
            min_word_frequency: self.min_word_frequency.clamp(1, 10),
            case_sensitive: self.case_sensitive,
            sources: self.sources.clone(),
        }
    }
}

/// Per-source inclusion flags and repeat weights.
///
/// Weighting works by literal repetition: an enabled source's stripped
/// text is appended `repeat` times to the analysis buffer, so a title
/// weighted 3 contributes every word three times to the counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceWeights {
    pub title: SourceWeight,
    pub content: SourceWeight,
    pub excerpt: SourceWeight,
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self {
            title: SourceWeight {
                enabled: true,
                repeat: 3,
            },
            content: SourceWeight {
                enabled: true,
                repeat: 1,
            },
            excerpt: SourceWeight {
                enabled: false,
                repeat: 2,
            },
        }
    }
}

/// Inclusion flag and repeat weight for one text source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceWeight {
    pub enabled: bool,
    pub repeat: usize,
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key).as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = ExtractorConfig::default();
        assert_eq!(config.max_tags, 5);
        assert_eq!(config.min_word_length, 4);
        assert_eq!(config.min_word_frequency, 2);
        assert!(!config.case_sensitive);
        assert!(config.sources.title.enabled);
        assert_eq!(config.sources.title.repeat, 3);
        assert!(config.sources.content.enabled);
        assert_eq!(config.sources.content.repeat, 1);
        assert!(!config.sources.excerpt.enabled);
        assert_eq!(config.sources.excerpt.repeat, 2);
    }

    #[test]
    fn test_clamped_pulls_values_into_range() {
        let config = ExtractorConfig {
            max_tags: 0,
            min_word_length: 99,
            min_word_frequency: 0,
            ..ExtractorConfig::default()
        }
        .clamped();
        assert_eq!(config.max_tags, 1);
        assert_eq!(config.min_word_length, 10);
        assert_eq!(config.min_word_frequency, 1);
    }

    #[test]
    fn test_clamped_leaves_valid_values_alone() {
        let config = ExtractorConfig {
            max_tags: 20,
            min_word_length: 2,
            min_word_frequency: 10,
            ..ExtractorConfig::default()
        };
        assert_eq!(config.clamped(), config);
    }
}
