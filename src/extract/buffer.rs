// Analysis buffer assembly — markup stripping and weighted source
// concatenation.
//
// Source weighting is literal repetition: an enabled title is appended
// three times, not counted once and scored at 3x. Repetition keeps the
// counting loop trivial and makes tie-breaks depend only on first-seen
// order in the buffer.

use std::sync::OnceLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::config::SourceWeights;

/// The text fields of a content record. Any field may be empty, and any
/// field may contain HTML that gets stripped before analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisInput {
    pub title: String,
    pub content: String,
    pub excerpt: String,
}

impl AnalysisInput {
    /// Input with only a content body — the common case for callers that
    /// don't track titles or excerpts.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && self.excerpt.is_empty()
    }
}

/// Build the weighted analysis buffer from the enabled sources.
///
/// Sources are visited in priority order (title, content, excerpt); each
/// enabled one is stripped of markup and appended `repeat` times. With no
/// enabled sources the buffer is empty, which downstream treats as "no
/// suggestions" rather than an error.
pub fn assemble(input: &AnalysisInput, sources: &SourceWeights) -> String {
    let mut buffer = String::new();

    for (text, weight) in [
        (&input.title, sources.title),
        (&input.content, sources.content),
        (&input.excerpt, sources.excerpt),
    ] {
        if !weight.enabled || text.is_empty() {
            continue;
        }
        let stripped = strip_markup(text);
        if stripped.is_empty() {
            continue;
        }
        for _ in 0..weight.repeat {
            buffer.push(' ');
            buffer.push_str(&stripped);
        }
    }

    buffer
}

/// Strip HTML from a text field: script and style elements go away with
/// their contents, then any remaining tag is removed. Each tag becomes a
/// single space so block boundaries stay word boundaries, and whitespace
/// runs collapse to single spaces.
pub fn strip_markup(text: &str) -> String {
    static ELEMENTS: OnceLock<Regex> = OnceLock::new();
    static TAGS: OnceLock<Regex> = OnceLock::new();

    if !text.contains('<') {
        return collapse_whitespace(text);
    }

    let elements = ELEMENTS.get_or_init(|| {
        // No backreferences in regex-lite, so script and style are spelled
        // out as separate alternatives.
        Regex::new(r"(?is)<script\b[^>]*>.*?</script>|<style\b[^>]*>.*?</style>")
            .unwrap()
    });
    let tags = TAGS.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());

    let without_elements = elements.replace_all(text, " ");
    collapse_whitespace(&tags.replace_all(&without_elements, " "))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceWeights;

    #[test]
    fn test_strip_markup_plain_text_untouched() {
        assert_eq!(strip_markup("no markup here"), "no markup here");
    }

    #[test]
    fn test_strip_markup_removes_tags() {
        assert_eq!(
            strip_markup("<p>hello <strong>world</strong></p>"),
            "hello world"
        );
    }

    #[test]
    fn test_strip_markup_drops_script_contents() {
        let html = "before<script type=\"text/javascript\">var x = 1;</script>after";
        assert_eq!(strip_markup(html), "before after");
    }

    #[test]
    fn test_strip_markup_keeps_word_boundaries_across_blocks() {
        assert_eq!(strip_markup("<p>one</p><p>two</p>"), "one two");
    }

    #[test]
    fn test_strip_markup_drops_style_contents() {
        let html = "keep<style>.cls { color: red; }</style> this";
        assert_eq!(strip_markup(html), "keep this");
    }

    #[test]
    fn test_assemble_repeats_title_three_times() {
        let input = AnalysisInput {
            title: "cats".to_string(),
            ..AnalysisInput::default()
        };
        let buffer = assemble(&input, &SourceWeights::default());
        assert_eq!(buffer.split_whitespace().count(), 3);
    }

    #[test]
    fn test_assemble_skips_disabled_sources() {
        let mut sources = SourceWeights::default();
        sources.title.enabled = false;
        sources.content.enabled = false;
        let input = AnalysisInput {
            title: "title".to_string(),
            content: "content".to_string(),
            excerpt: "excerpt".to_string(),
        };
        // Excerpt is disabled by default too, so nothing survives
        assert!(assemble(&input, &sources).trim().is_empty());
    }

    #[test]
    fn test_assemble_excerpt_doubled_when_enabled() {
        let mut sources = SourceWeights::default();
        sources.title.enabled = false;
        sources.content.enabled = false;
        sources.excerpt.enabled = true;
        let input = AnalysisInput {
            excerpt: "summary words".to_string(),
            ..AnalysisInput::default()
        };
        let buffer = assemble(&input, &sources);
        assert_eq!(buffer.split_whitespace().count(), 4);
    }
}
