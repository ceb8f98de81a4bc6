// TagSuggestions — the ranked output of an extraction run.
//
// Candidates carry their occurrence counts so a preview surface can show
// why each tag was picked; callers that only want the labels use words().

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Ranked tag suggestions for a single piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSuggestions {
    /// Ranked candidates, highest count first
    pub tags: Vec<RankedTag>,
}

/// A single candidate tag with its occurrence count in the analysis buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTag {
    pub word: String,
    pub count: usize,
}

impl TagSuggestions {
    pub fn empty() -> Self {
        Self { tags: Vec::new() }
    }

    /// The ordered tag words, without counts.
    pub fn words(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.word.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Display the suggestions as a formatted bar chart in the terminal.
    ///
    /// This is the preview a user sees before applying tags — it should
    /// make it obvious which words dominated the content and by how much.
    pub fn display(&self) {
        if self.tags.is_empty() {
            println!("No suitable tags found. Try writing more content.");
            return;
        }

        println!(
            "\n{}",
            format!("=== Suggested Tags ({} candidates) ===", self.tags.len()).bold()
        );
        println!();

        let bar_width: usize = 20;
        let top_count = self.tags[0].count.max(1);

        for (i, tag) in self.tags.iter().enumerate() {
            let share = tag.count as f64 / top_count as f64;
            let filled = (share * bar_width as f64).round() as usize;
            let empty = bar_width.saturating_sub(filled);
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

            let colored_bar = if share >= 0.75 {
                bar.bright_green()
            } else if share >= 0.40 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!(
                "  {:>2}. {:<24} {} {}",
                i + 1,
                tag.word.bold(),
                colored_bar,
                format!("x{}", tag.count).dimmed()
            );
        }

        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_preserves_order() {
        let suggestions = TagSuggestions {
            tags: vec![
                RankedTag {
                    word: "design".to_string(),
                    count: 4,
                },
                RankedTag {
                    word: "testing".to_string(),
                    count: 3,
                },
            ],
        };
        assert_eq!(suggestions.words(), vec!["design", "testing"]);
    }

    #[test]
    fn test_empty() {
        assert!(TagSuggestions::empty().is_empty());
        assert_eq!(TagSuggestions::empty().len(), 0);
    }
}
