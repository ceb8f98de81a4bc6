// Tag sink helpers — merging suggested tags into an existing tag list.
//
// The extractor never touches storage; whatever accepts its suggestions
// decides between appending to the tags already on a record or replacing
// them. Both paths de-duplicate while preserving order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// How suggested tags combine with tags already on a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Keep existing tags and add suggestions not already present.
    Append,
    /// Discard the existing list and use the suggestions alone.
    Replace,
}

/// Merge suggestions into an existing tag list under the given policy.
///
/// Order is preserved: existing tags first (for Append), then suggestions
/// in ranked order. Duplicates and empty strings are dropped.
pub fn merge_tags(existing: &[String], suggested: &[String], policy: MergePolicy) -> Vec<String> {
    let combined: Vec<&String> = match policy {
        MergePolicy::Append => existing.iter().chain(suggested.iter()).collect(),
        MergePolicy::Replace => suggested.iter().collect(),
    };

    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for tag in combined {
        if tag.is_empty() {
            continue;
        }
        if seen.insert(tag.clone()) {
            merged.push(tag.clone());
        }
    }
    merged
}
