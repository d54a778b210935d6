//! Subject-wide concept index
//!
//! Merges the concept mentions attached to insights by an external
//! extractor. Insights without mentions contribute nothing.

use crate::chamber::Insight;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of examples kept per concept
pub const DEFAULT_EXAMPLE_CAP: usize = 10;

/// One concept aggregated over a subject's insights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptEntry {
    pub key: String,
    pub total_count: u64,
    pub topic_count: usize,
    /// Topics in first-seen order
    pub topics: Vec<String>,
    /// Distinct examples in first-seen order, capped
    pub examples: Vec<String>,
}

/// Build the concept index, strongest first.
///
/// Entries with equal `total_count` keep first-seen order.
pub fn concept_index<'a>(
    insights: impl IntoIterator<Item = &'a Insight>,
    example_cap: usize,
) -> Vec<ConceptEntry> {
    let mut entries: Vec<ConceptEntry> = Vec::new();
    // Key to slot in `entries`, which keeps first-seen order
    let mut slots: HashMap<String, usize> = HashMap::new();

    for insight in insights {
        for mention in &insight.concepts {
            if mention.key.is_empty() {
                continue;
            }
            let idx = *slots.entry(mention.key.clone()).or_insert_with(|| {
                entries.push(ConceptEntry {
                    key: mention.key.clone(),
                    total_count: 0,
                    topic_count: 0,
                    topics: Vec::new(),
                    examples: Vec::new(),
                });
                entries.len() - 1
            });
            let entry = &mut entries[idx];

            entry.total_count += mention.count;
            if !insight.topic_id.is_empty() && !entry.topics.contains(&insight.topic_id) {
                entry.topics.push(insight.topic_id.clone());
            }
            for example in &mention.examples {
                if entry.examples.len() >= example_cap {
                    break;
                }
                if !entry.examples.contains(example) {
                    entry.examples.push(example.clone());
                }
            }
        }
    }

    for entry in &mut entries {
        entry.topic_count = entry.topics.len();
    }
    // Stable sort keeps first-seen order among equal counts
    entries.sort_by(|a, b| b.total_count.cmp(&a.total_count));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chamber::{ConceptMention, InsightBuilder};

    fn mention(key: &str, count: u64, examples: &[&str]) -> ConceptMention {
        ConceptMention {
            key: key.to_string(),
            count,
            examples: examples.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn insight(topic: &str, mentions: Vec<ConceptMention>) -> Insight {
        mentions
            .into_iter()
            .fold(InsightBuilder::new("u1", topic).summary("x"), |b, m| b.concept(m))
            .build()
    }

    #[test]
    fn test_no_concepts() {
        let insights = vec![insight("jobb", vec![])];
        assert!(concept_index(&insights, DEFAULT_EXAMPLE_CAP).is_empty());
    }

    #[test]
    fn test_merges_across_topics() {
        let insights = vec![
            insight("jobb", vec![mention("press", 2, &["må levere"])]),
            insight("søvn", vec![mention("press", 3, &["må sove", "må levere"])]),
            insight("jobb", vec![mention("press", 1, &[])]),
        ];

        let index = concept_index(&insights, DEFAULT_EXAMPLE_CAP);

        assert_eq!(index.len(), 1);
        let entry = &index[0];
        assert_eq!(entry.total_count, 6);
        assert_eq!(entry.topics, vec!["jobb", "søvn"]);
        assert_eq!(entry.topic_count, 2);
        assert_eq!(entry.examples, vec!["må levere", "må sove"]);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let insights = vec![insight(
            "jobb",
            vec![
                mention("a", 1, &[]),
                mention("b", 5, &[]),
                mention("c", 1, &[]),
                mention("", 9, &[]),
            ],
        )];

        let keys: Vec<_> = concept_index(&insights, DEFAULT_EXAMPLE_CAP)
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_many_keys_keep_first_seen_order() {
        let mentions: Vec<ConceptMention> = (0..200)
            .map(|i| mention(&format!("k{}", i), 1, &[]))
            .collect();
        let repeat = vec![mention("k150", 1, &[]), mention("k3", 1, &[])];
        let insights = vec![insight("jobb", mentions), insight("søvn", repeat)];

        let index = concept_index(&insights, DEFAULT_EXAMPLE_CAP);

        assert_eq!(index.len(), 200);
        // k3 was seen before k150; both rise to count 2
        assert_eq!(index[0].key, "k3");
        assert_eq!(index[1].key, "k150");
        assert_eq!(index[1].topics, vec!["jobb", "søvn"]);
        assert_eq!(index[2].key, "k0");
        assert_eq!(index[199].key, "k199");
    }

    #[test]
    fn test_example_cap() {
        let examples: Vec<String> = (0..15).map(|i| format!("ex{}", i)).collect();
        let refs: Vec<&str> = examples.iter().map(String::as_str).collect();
        let insights = vec![
            insight("jobb", vec![mention("k", 1, &refs[..8])]),
            insight("jobb", vec![mention("k", 1, &refs[8..])]),
        ];

        let index = concept_index(&insights, DEFAULT_EXAMPLE_CAP);
        assert_eq!(index[0].examples.len(), 10);
        assert_eq!(index[0].examples[9], "ex9");

        assert_eq!(concept_index(&insights, 3)[0].examples.len(), 3);
    }
}
