//! The caller-owned collection of insights

use super::insight::Insight;
use serde::{Deserialize, Serialize};

/// Ordered collection of insights spanning all subjects and topics.
///
/// The engine only appends new insights and reinforces existing ones; it
/// never removes anything. Insertion order is preserved and drives the order
/// of topic listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chamber {
    #[serde(default)]
    insights: Vec<Insight>,
}

impl Chamber {
    /// Create an empty chamber
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap insights restored by a persistence layer
    pub fn from_insights(insights: Vec<Insight>) -> Self {
        Self { insights }
    }

    /// All insights in insertion order
    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    /// Insights for one subject and topic, in insertion order.
    pub fn insights_for_topic(&self, subject_id: &str, topic_id: &str) -> Vec<&Insight> {
        self.insights
            .iter()
            .filter(|i| i.belongs_to(subject_id, topic_id))
            .collect()
    }

    /// All insights of one subject, in insertion order.
    pub fn insights_for_subject(&self, subject_id: &str) -> Vec<&Insight> {
        self.insights
            .iter()
            .filter(|i| i.subject_id == subject_id)
            .collect()
    }

    /// Distinct topics of a subject in order of first appearance.
    pub fn topics_for_subject(&self, subject_id: &str) -> Vec<&str> {
        let mut topics: Vec<&str> = Vec::new();
        for insight in self.insights_for_subject(subject_id) {
            if !insight.topic_id.is_empty() && !topics.contains(&insight.topic_id.as_str()) {
                topics.push(&insight.topic_id);
            }
        }
        topics
    }

    /// Distinct (subject, topic) pairs in order of first appearance.
    pub fn topic_keys(&self) -> Vec<(&str, &str)> {
        let mut keys: Vec<(&str, &str)> = Vec::new();
        for insight in &self.insights {
            let key = (insight.subject_id.as_str(), insight.topic_id.as_str());
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    pub(crate) fn push(&mut self, insight: Insight) {
        self.insights.push(insight);
    }

    pub(crate) fn insights_mut(&mut self) -> &mut [Insight] {
        &mut self.insights
    }
}
