//! Coaching phases and where they come from
//!
//! Phases are not computed from insight text. A collaborator (the coaching
//! flow, a config file, a user choice) assigns them per topic and the meta
//! builder reads them through [`PhaseSource`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Coaching-oriented state of a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Exploration,
    Pattern,
    Press,
    Stuck,
    Integration,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Exploration,
        Phase::Pattern,
        Phase::Press,
        Phase::Stuck,
        Phase::Integration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Exploration => "exploration",
            Phase::Pattern => "pattern",
            Phase::Press => "press",
            Phase::Stuck => "stuck",
            Phase::Integration => "integration",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown phase: {}", s))
    }
}

/// Supplies the user-assigned phase of a topic
pub trait PhaseSource {
    fn phase_for(&self, subject_id: &str, topic_id: &str) -> Option<Phase>;
}

/// Source that never assigns a phase
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPhases;

impl PhaseSource for NoPhases {
    fn phase_for(&self, _subject_id: &str, _topic_id: &str) -> Option<Phase> {
        None
    }
}

/// Phases keyed by topic id, shared by every subject
impl PhaseSource for HashMap<String, Phase> {
    fn phase_for(&self, _subject_id: &str, topic_id: &str) -> Option<Phase> {
        self.get(topic_id).copied()
    }
}

impl<T: PhaseSource + ?Sized> PhaseSource for &T {
    fn phase_for(&self, subject_id: &str, topic_id: &str) -> Option<Phase> {
        (**self).phase_for(subject_id, topic_id)
    }
}

/// Number of topics in each phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseCounts {
    pub exploration: u32,
    pub pattern: u32,
    pub press: u32,
    pub stuck: u32,
    pub integration: u32,
}

impl PhaseCounts {
    pub fn record(&mut self, phase: Phase) {
        let slot = match phase {
            Phase::Exploration => &mut self.exploration,
            Phase::Pattern => &mut self.pattern,
            Phase::Press => &mut self.press,
            Phase::Stuck => &mut self.stuck,
            Phase::Integration => &mut self.integration,
        };
        *slot += 1;
    }
}
