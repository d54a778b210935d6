//! State payload sent to the narrative generator

use crate::chamber::Insight;
use crate::error::{Error, Result};
use crate::meta::MetaProfile;
use crate::stats::{DimensionCounts, SemanticCounts, TopicStats};
use serde::{Deserialize, Serialize};

/// Default number of insights quoted in the payload
pub const DEFAULT_TOP_INSIGHTS: usize = 5;

/// Everything the generator needs to comment on one topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub topic_id: String,
    pub subject_id: String,
    pub topic_stats: TopicStats,
    pub topic_semantics: SemanticCounts,
    pub topic_dimensions: DimensionCounts,
    /// Draft matching the recommended artifact type
    pub topic_narrative: String,
    /// Strongest insights first
    pub top_insights: Vec<Insight>,
    /// Absent unless the caller asked for the cross-topic view
    #[serde(default)]
    pub meta_profile: Option<MetaProfile>,
    /// Subject-area profile from an outside source, passed through as is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_profile: Option<serde_json::Value>,
}

impl AgentState {
    /// Attach a field profile (e.g. `"Historie"`)
    pub fn with_field_profile(mut self, profile: impl Into<serde_json::Value>) -> Self {
        self.field_profile = Some(profile.into());
        self
    }

    /// Serialize for the generator, refusing payloads without a topic
    pub fn to_json(&self) -> Result<String> {
        if self.topic_id.trim().is_empty() {
            return Err(Error::Agent("Missing topic_id in state".to_string()));
        }
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Up to `n` insights by descending total score; ties keep their order.
pub fn strongest_first(insights: &[&Insight], n: usize) -> Vec<Insight> {
    let mut sorted = insights.to_vec();
    sorted.sort_by(|a, b| b.strength.total_score().cmp(&a.strength.total_score()));
    sorted.into_iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chamber::{Chamber, InsightBuilder};
    use crate::stats::TopicStatsCalculator;

    fn state(topic_id: &str) -> AgentState {
        AgentState {
            topic_id: topic_id.to_string(),
            subject_id: "u1".to_string(),
            topic_stats: TopicStatsCalculator::default().topic_stats(&Chamber::new(), "u1", topic_id),
            topic_semantics: SemanticCounts::default(),
            topic_dimensions: DimensionCounts::default(),
            topic_narrative: "No insights to synthesize yet.".to_string(),
            top_insights: vec![],
            meta_profile: None,
            field_profile: None,
        }
    }

    #[test]
    fn test_strongest_first() {
        let a = InsightBuilder::new("u1", "t").summary("a").evidence_count(2).build();
        let b = InsightBuilder::new("u1", "t").summary("b").evidence_count(6).build();
        let c = InsightBuilder::new("u1", "t").summary("c").evidence_count(2).build();

        let top = strongest_first(&[&a, &b, &c], 2);
        let summaries: Vec<_> = top.iter().map(|i| i.summary.as_str()).collect();
        assert_eq!(summaries, vec!["b", "a"]);

        assert!(strongest_first(&[], 5).is_empty());
    }

    #[test]
    fn test_to_json() {
        let json = state("jobb").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["topic_id"], "jobb");
        assert_eq!(value["topic_stats"]["artifact_type"], "short");
        assert!(value["meta_profile"].is_null());
        assert_eq!(value["topic_dimensions"]["emotion"], 0);
    }

    #[test]
    fn test_field_profile_is_optional() {
        let bare: serde_json::Value = serde_json::from_str(&state("jobb").to_json().unwrap()).unwrap();
        assert!(bare.get("field_profile").is_none());

        let with = state("jobb").with_field_profile("Historie");
        let value: serde_json::Value = serde_json::from_str(&with.to_json().unwrap()).unwrap();
        assert_eq!(value["field_profile"], "Historie");

        let parsed: AgentState = serde_json::from_value(bare).unwrap();
        assert!(parsed.field_profile.is_none());
    }

    #[test]
    fn test_to_json_requires_topic() {
        let err = state("  ").to_json().unwrap_err();
        assert!(matches!(err, Error::Agent(_)));
    }
}
