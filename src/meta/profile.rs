//! Per-topic and cross-topic profiles

use super::phase::{Phase, PhaseCounts};
use crate::stats::{ModalityCounts, SemanticCounts, TopicStats, ValenceCounts};
use serde::{Deserialize, Serialize};

/// One topic of a subject with its statistics and tag distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicProfile {
    pub topic_id: String,
    pub stats: TopicStats,
    pub semantic_counts: SemanticCounts,
}

impl TopicProfile {
    /// The assigned phase, if any
    pub fn phase(&self) -> Option<Phase> {
        self.stats.user_phase
    }

    pub(crate) fn in_phase(&self, phases: &[Phase]) -> bool {
        self.phase().is_some_and(|p| phases.contains(&p))
    }
}

/// Aggregate of all topic profiles of one subject.
///
/// With no topics every field is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalProfile {
    pub avg_saturation: f64,
    pub modality: ModalityCounts,
    pub valence: ValenceCounts,
    pub phases: PhaseCounts,
    /// (obligation + obstruction) / max(1, possibility + neutral)
    pub pressure_index: f64,
    /// negative / max(1, positive + mixed + neutral)
    pub negativity_index: f64,
    pub stuck_topics: u32,
    pub integration_topics: u32,
}

impl GlobalProfile {
    pub fn from_topics(topics: &[TopicProfile]) -> Self {
        if topics.is_empty() {
            return Self::default();
        }

        let mut modality = ModalityCounts::default();
        let mut valence = ValenceCounts::default();
        let mut phases = PhaseCounts::default();
        let mut saturation_sum = 0u64;

        for topic in topics {
            saturation_sum += u64::from(topic.stats.insight_saturation);
            modality.merge(&topic.semantic_counts.modality);
            valence.merge(&topic.semantic_counts.valence);
            // Topics without an assigned phase are tallied as exploring
            phases.record(topic.phase().unwrap_or(Phase::Exploration));
        }

        let pressure_index = f64::from(modality.obligation + modality.obstruction)
            / f64::from((modality.possibility + modality.neutral).max(1));
        let negativity_index = f64::from(valence.negative)
            / f64::from((valence.positive + valence.mixed + valence.neutral).max(1));

        Self {
            avg_saturation: saturation_sum as f64 / topics.len() as f64,
            modality,
            valence,
            phases,
            pressure_index,
            negativity_index,
            stuck_topics: phases.stuck,
            integration_topics: phases.integration,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::stats::ArtifactType;

    pub(crate) fn profile(
        topic: &str,
        saturation: u32,
        phase: Option<Phase>,
        modality: ModalityCounts,
        valence: ValenceCounts,
    ) -> TopicProfile {
        TopicProfile {
            topic_id: topic.to_string(),
            stats: TopicStats {
                topic_id: topic.to_string(),
                subject_id: "u1".to_string(),
                insight_saturation: saturation,
                concept_density: 0,
                artifact_type: ArtifactType::Short,
                insight_count: 1,
                user_phase: phase,
            },
            semantic_counts: SemanticCounts {
                modality,
                valence,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_empty_profile_is_all_zero() {
        let global = GlobalProfile::from_topics(&[]);
        assert_eq!(global, GlobalProfile::default());
        assert_eq!(global.pressure_index, 0.0);
        assert_eq!(global.phases, PhaseCounts::default());

        let json = serde_json::to_value(&global).unwrap();
        assert_eq!(json["modality"]["obligation"], 0);
        assert_eq!(json["phases"]["exploration"], 0);
        assert_eq!(json["stuck_topics"], 0);
    }

    #[test]
    fn test_aggregates_topics() {
        let topics = vec![
            profile(
                "jobb",
                40,
                Some(Phase::Stuck),
                ModalityCounts {
                    obligation: 3,
                    obstruction: 1,
                    possibility: 1,
                    neutral: 1,
                },
                ValenceCounts {
                    negative: 4,
                    positive: 1,
                    ..Default::default()
                },
            ),
            profile(
                "søvn",
                70,
                None,
                ModalityCounts {
                    neutral: 2,
                    ..Default::default()
                },
                ValenceCounts {
                    neutral: 1,
                    ..Default::default()
                },
            ),
        ];

        let global = GlobalProfile::from_topics(&topics);

        assert_eq!(global.avg_saturation, 55.0);
        assert_eq!(global.modality.obligation, 3);
        assert_eq!(global.modality.neutral, 3);
        // (3 + 1) / (1 + 3)
        assert_eq!(global.pressure_index, 1.0);
        // 4 / (1 + 0 + 1)
        assert_eq!(global.negativity_index, 2.0);
        assert_eq!(global.phases.stuck, 1);
        assert_eq!(global.phases.exploration, 1);
        assert_eq!(global.stuck_topics, 1);
        assert_eq!(global.integration_topics, 0);
    }

    #[test]
    fn test_indices_with_zero_denominators() {
        let topics = vec![profile(
            "jobb",
            10,
            Some(Phase::Integration),
            ModalityCounts {
                obligation: 2,
                ..Default::default()
            },
            ValenceCounts {
                negative: 3,
                ..Default::default()
            },
        )];

        let global = GlobalProfile::from_topics(&topics);
        assert_eq!(global.pressure_index, 2.0);
        assert_eq!(global.negativity_index, 3.0);
        assert_eq!(global.integration_topics, 1);
    }
}
