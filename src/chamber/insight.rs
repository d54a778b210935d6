//! Insight data types
//!
//! An insight is the deduplicated, reinforceable unit of recurring material
//! for one (subject, topic) pair. Its strength grows each time a similar
//! signal arrives; its text, semantic tags and dimensions are fixed when it
//! is created.

use crate::classify::{Dimension, SemanticTags};
use crate::text::title_from_text;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of words kept in a generated title
pub const DEFAULT_TITLE_WORDS: usize = 10;

const SCORE_PER_EVIDENCE: u32 = 10;
const MAX_SCORE: u32 = 100;

/// Evidence behind an insight.
///
/// `total_score` is always derived from `evidence_count`; deserialized
/// values are normalized the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStrength")]
pub struct Strength {
    evidence_count: u32,
    total_score: u32,
}

#[derive(Deserialize)]
struct RawStrength {
    #[serde(default)]
    evidence_count: u32,
}

impl From<RawStrength> for Strength {
    fn from(raw: RawStrength) -> Self {
        Self::new(raw.evidence_count)
    }
}

impl Strength {
    /// Strength for `evidence_count` observations (at least one).
    pub fn new(evidence_count: u32) -> Self {
        let evidence_count = evidence_count.max(1);
        Self {
            evidence_count,
            total_score: evidence_count
                .saturating_mul(SCORE_PER_EVIDENCE)
                .min(MAX_SCORE),
        }
    }

    pub fn evidence_count(&self) -> u32 {
        self.evidence_count
    }

    /// `min(100, evidence_count × 10)`
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Add one observation.
    pub(crate) fn reinforce(&mut self) {
        *self = Self::new(self.evidence_count.saturating_add(1));
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self::new(1)
    }
}

/// A concept mention attached to an insight by an external extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptMention {
    pub key: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// A deduplicated record distilled from one or more similar signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: Uuid,
    pub subject_id: String,
    pub topic_id: String,
    pub title: String,
    /// Verbatim text of the originating signal
    pub summary: String,
    pub strength: Strength,
    pub first_seen: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    /// Absent only on records loaded from older stores
    #[serde(default)]
    pub semantic: Option<SemanticTags>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<ConceptMention>,
}

impl Insight {
    /// Record another matching signal observed at `at`.
    pub(crate) fn reinforce(&mut self, at: DateTime<Utc>) {
        self.strength.reinforce();
        self.last_updated = at;
    }

    /// Whether this insight belongs to the given subject and topic
    pub fn belongs_to(&self, subject_id: &str, topic_id: &str) -> bool {
        self.subject_id == subject_id && self.topic_id == topic_id
    }
}

/// Builder for constructing `Insight` instances
pub struct InsightBuilder {
    subject_id: String,
    topic_id: String,
    summary: String,
    title: Option<String>,
    title_words: usize,
    evidence_count: u32,
    first_seen: Option<DateTime<Utc>>,
    last_updated: Option<DateTime<Utc>>,
    semantic: Option<SemanticTags>,
    dimensions: Vec<Dimension>,
    concepts: Vec<ConceptMention>,
}

impl InsightBuilder {
    /// Create a new builder for the given subject and topic
    pub fn new(subject_id: impl Into<String>, topic_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            topic_id: topic_id.into(),
            summary: String::new(),
            title: None,
            title_words: DEFAULT_TITLE_WORDS,
            evidence_count: 1,
            first_seen: None,
            last_updated: None,
            semantic: None,
            dimensions: Vec::new(),
            concepts: Vec::new(),
        }
    }

    /// Set the summary text
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set an explicit title instead of deriving one from the summary
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set how many words a derived title keeps
    pub fn title_words(mut self, words: usize) -> Self {
        self.title_words = words;
        self
    }

    /// Set the evidence count (at least one)
    pub fn evidence_count(mut self, count: u32) -> Self {
        self.evidence_count = count;
        self
    }

    /// Set the first-seen timestamp
    pub fn first_seen(mut self, at: DateTime<Utc>) -> Self {
        self.first_seen = Some(at);
        self
    }

    /// Set the last-updated timestamp (defaults to first-seen)
    pub fn last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }

    /// Set the semantic tags
    pub fn semantic(mut self, tags: SemanticTags) -> Self {
        self.semantic = Some(tags);
        self
    }

    /// Set the dimensions
    pub fn dimensions(mut self, dimensions: impl IntoIterator<Item = Dimension>) -> Self {
        self.dimensions = dimensions.into_iter().collect();
        self
    }

    /// Attach a concept mention
    pub fn concept(mut self, concept: ConceptMention) -> Self {
        self.concepts.push(concept);
        self
    }

    /// Build the insight.
    ///
    /// A missing title is derived from the summary and empty dimensions fall
    /// back to `[Thought]`.
    pub fn build(self) -> Insight {
        let first_seen = self.first_seen.unwrap_or_else(Utc::now);
        let title = self
            .title
            .unwrap_or_else(|| title_from_text(&self.summary, self.title_words));
        let dimensions = if self.dimensions.is_empty() {
            vec![Dimension::Thought]
        } else {
            self.dimensions
        };

        Insight {
            id: Uuid::new_v4(),
            subject_id: self.subject_id,
            topic_id: self.topic_id,
            title,
            summary: self.summary,
            strength: Strength::new(self.evidence_count),
            first_seen,
            last_updated: self.last_updated.unwrap_or(first_seen),
            semantic: self.semantic,
            dimensions,
            concepts: self.concepts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Valence;
    use chrono::TimeZone;

    #[test]
    fn test_strength_score_derivation() {
        assert_eq!(Strength::new(1).total_score(), 10);
        assert_eq!(Strength::new(4).total_score(), 40);
        assert_eq!(Strength::new(10).total_score(), 100);
        assert_eq!(Strength::new(25).total_score(), 100);
    }

    #[test]
    fn test_strength_minimum_one() {
        let s = Strength::new(0);
        assert_eq!(s.evidence_count(), 1);
        assert_eq!(s.total_score(), 10);
    }

    #[test]
    fn test_strength_reinforce() {
        let mut s = Strength::default();
        s.reinforce();
        assert_eq!(s.evidence_count(), 2);
        assert_eq!(s.total_score(), 20);
    }

    #[test]
    fn test_strength_deserialize_recomputes_score() {
        let s: Strength =
            serde_json::from_str(r#"{"evidence_count": 3, "total_score": 99}"#).unwrap();
        assert_eq!(s.evidence_count(), 3);
        assert_eq!(s.total_score(), 30);

        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["total_score"], 30);
    }

    #[test]
    fn test_builder_defaults() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let insight = InsightBuilder::new("u1", "jobb")
            .summary("jeg tenker mye på jobb")
            .first_seen(ts)
            .build();

        assert_eq!(insight.title, "jeg tenker mye på jobb");
        assert_eq!(insight.dimensions, vec![Dimension::Thought]);
        assert_eq!(insight.strength.evidence_count(), 1);
        assert_eq!(insight.first_seen, ts);
        assert_eq!(insight.last_updated, ts);
        assert!(insight.semantic.is_none());
        assert!(insight.concepts.is_empty());
    }

    #[test]
    fn test_builder_explicit_fields() {
        let tags = SemanticTags {
            valence: Valence::Positive,
            ..Default::default()
        };
        let insight = InsightBuilder::new("u1", "jobb")
            .summary("s")
            .title("egen tittel")
            .evidence_count(5)
            .semantic(tags)
            .dimensions([Dimension::Body, Dimension::Emotion])
            .concept(ConceptMention {
                key: "press".to_string(),
                count: 2,
                examples: vec!["må".to_string()],
            })
            .build();

        assert_eq!(insight.title, "egen tittel");
        assert_eq!(insight.strength.total_score(), 50);
        assert_eq!(insight.semantic, Some(tags));
        assert_eq!(insight.dimensions, vec![Dimension::Body, Dimension::Emotion]);
        assert_eq!(insight.concepts.len(), 1);
    }

    #[test]
    fn test_reinforce_updates_strength_and_timestamp() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        let mut insight = InsightBuilder::new("u1", "t").summary("x").first_seen(t0).build();

        insight.reinforce(t1);

        assert_eq!(insight.strength.evidence_count(), 2);
        assert_eq!(insight.first_seen, t0);
        assert_eq!(insight.last_updated, t1);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let json = r#"{
            "id": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
            "subject_id": "u1",
            "topic_id": "jobb",
            "title": "t",
            "summary": "s",
            "strength": {"evidence_count": 2},
            "first_seen": "2024-01-01T00:00:00Z",
            "last_updated": "2024-01-02T00:00:00Z"
        }"#;
        let insight: Insight = serde_json::from_str(json).unwrap();
        assert!(insight.semantic.is_none());
        assert!(insight.dimensions.is_empty());
        assert_eq!(insight.strength.total_score(), 20);
    }

    #[test]
    fn test_concepts_omitted_when_empty() {
        let insight = InsightBuilder::new("u1", "t").summary("x").build();
        let json = serde_json::to_value(&insight).unwrap();
        assert!(json.get("concepts").is_none());
    }
}
