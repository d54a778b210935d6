//! Meta profile assembly
//!
//! Reads a chamber snapshot and composes everything known about one
//! subject. Nothing in the chamber is modified; lifecycle stages are
//! attached to copies of the insights.

use super::concepts::{concept_index, ConceptEntry, DEFAULT_EXAMPLE_CAP};
use super::lifecycle::Lifecycle;
use super::patterns::{detect_patterns, PatternRecord};
use super::phase::PhaseSource;
use super::profile::{GlobalProfile, TopicProfile};
use crate::chamber::{Chamber, Insight};
use crate::stats::{SemanticCounts, TopicStatsCalculator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An insight copy tagged with its lifecycle stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedInsight {
    #[serde(flatten)]
    pub insight: Insight,
    pub lifecycle: Lifecycle,
}

/// Everything known about one subject across topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaProfile {
    pub subject_id: String,
    pub topics: Vec<TopicProfile>,
    pub global: GlobalProfile,
    pub patterns: Vec<PatternRecord>,
    pub insights: Vec<StagedInsight>,
    pub concepts: Vec<ConceptEntry>,
}

/// Builds meta profiles from chamber snapshots
#[derive(Debug, Clone, Copy)]
pub struct MetaProfileBuilder {
    stats: TopicStatsCalculator,
    concept_example_cap: usize,
}

impl Default for MetaProfileBuilder {
    fn default() -> Self {
        Self::new(TopicStatsCalculator::default())
    }
}

impl MetaProfileBuilder {
    pub fn new(stats: TopicStatsCalculator) -> Self {
        Self {
            stats,
            concept_example_cap: DEFAULT_EXAMPLE_CAP,
        }
    }

    /// Override how many examples each concept keeps
    pub fn with_concept_example_cap(mut self, cap: usize) -> Self {
        self.concept_example_cap = cap;
        self
    }

    /// Build the profile of `subject_id` as of now
    pub fn build(
        &self,
        chamber: &Chamber,
        subject_id: &str,
        phases: &dyn PhaseSource,
    ) -> MetaProfile {
        self.build_at(chamber, subject_id, phases, Utc::now())
    }

    /// Build the profile with lifecycle stages evaluated at `now`
    pub fn build_at(
        &self,
        chamber: &Chamber,
        subject_id: &str,
        phases: &dyn PhaseSource,
        now: DateTime<Utc>,
    ) -> MetaProfile {
        let topics: Vec<TopicProfile> = chamber
            .topics_for_subject(subject_id)
            .into_iter()
            .map(|topic_id| {
                let insights = chamber.insights_for_topic(subject_id, topic_id);
                let mut stats = self.stats.stats_for(subject_id, topic_id, &insights);
                stats.user_phase = phases.phase_for(subject_id, topic_id);
                TopicProfile {
                    topic_id: topic_id.to_string(),
                    stats,
                    semantic_counts: SemanticCounts::from_insights(insights),
                }
            })
            .collect();

        let global = GlobalProfile::from_topics(&topics);
        let patterns = detect_patterns(&topics, &global);

        let subject_insights = chamber.insights_for_subject(subject_id);
        let concepts = concept_index(subject_insights.iter().copied(), self.concept_example_cap);
        let insights = subject_insights
            .into_iter()
            .map(|insight| StagedInsight {
                lifecycle: Lifecycle::of(insight, now),
                insight: insight.clone(),
            })
            .collect();

        tracing::debug!(
            subject_id,
            topics = topics.len(),
            patterns = patterns.len(),
            "Built meta profile"
        );

        MetaProfile {
            subject_id: subject_id.to_string(),
            topics,
            global,
            patterns,
            insights,
            concepts,
        }
    }
}
