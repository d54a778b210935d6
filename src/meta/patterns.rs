//! Cross-topic pattern detection
//!
//! Three independent checks; any combination may fire. Every threshold is
//! strict and every pattern needs at least two participating topics.

use super::phase::Phase;
use super::profile::{GlobalProfile, TopicProfile};
use serde::{Deserialize, Serialize};

const HIGH_PRESSURE: f64 = 1.2;
const LOW_PRESSURE: f64 = 0.8;
const LOW_NEGATIVITY: f64 = 0.7;
const MIN_TOPICS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternId {
    CrossPressure,
    CrossExploration,
    StuckCluster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    GlobalPattern,
    Cluster,
}

/// A pattern spanning several topics of one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub id: PatternId,
    #[serde(rename = "type")]
    pub kind: PatternKind,
    pub description: String,
    pub topics: Vec<String>,
}

/// Detect cross-topic patterns from topic profiles and their aggregate
pub fn detect_patterns(topics: &[TopicProfile], global: &GlobalProfile) -> Vec<PatternRecord> {
    let mut patterns = Vec::new();

    if global.pressure_index > HIGH_PRESSURE {
        let pressed = topics_in(topics, &[Phase::Press, Phase::Stuck]);
        if pressed.len() >= MIN_TOPICS {
            patterns.push(PatternRecord {
                id: PatternId::CrossPressure,
                kind: PatternKind::GlobalPattern,
                description: "Strong pressure, obligation or obstruction across several topics"
                    .to_string(),
                topics: pressed,
            });
        }
    }

    if global.pressure_index < LOW_PRESSURE && global.negativity_index < LOW_NEGATIVITY {
        let open = topics_in(topics, &[Phase::Exploration, Phase::Integration]);
        if open.len() >= MIN_TOPICS {
            patterns.push(PatternRecord {
                id: PatternId::CrossExploration,
                kind: PatternKind::GlobalPattern,
                description: "Exploratory, open stance across several topics".to_string(),
                topics: open,
            });
        }
    }

    let stuck = topics_in(topics, &[Phase::Stuck]);
    if stuck.len() >= MIN_TOPICS {
        patterns.push(PatternRecord {
            id: PatternId::StuckCluster,
            kind: PatternKind::Cluster,
            description: "Several topics are stuck at the same time".to_string(),
            topics: stuck,
        });
    }

    if !patterns.is_empty() {
        tracing::debug!(count = patterns.len(), "Detected cross-topic patterns");
    }
    patterns
}

fn topics_in(topics: &[TopicProfile], phases: &[Phase]) -> Vec<String> {
    topics
        .iter()
        .filter(|t| t.in_phase(phases))
        .map(|t| t.topic_id.clone())
        .collect()
}
