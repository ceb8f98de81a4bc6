// Tag extractor trait — swap-ready abstraction.
//
// The default implementation ranks words by raw occurrence count. Keeping
// the seam here means a smarter approach (TF-IDF, embeddings) could replace
// it later without changing the callers.

use super::buffer::AnalysisInput;
use super::suggestions::TagSuggestions;

/// Trait for suggesting tags from a piece of written content.
pub trait TagExtractor {
    /// Analyze the input and produce ranked tag suggestions.
    ///
    /// Degenerate input (empty text, all stop words, no enabled source)
    /// yields an empty suggestion list, never an error.
    fn suggest(&self, input: &AnalysisInput) -> TagSuggestions;
}
