//! Per-axis tallies of semantic tags and dimensions
//!
//! An insight without semantic tags still counts once on every axis, in the
//! axis's neutral or unknown bucket, so each axis sums to the insight count.

use crate::chamber::Insight;
use crate::classify::{Dimension, Frequency, MetaComment, Modality, Tempo, TimeRef, Valence};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyCounts {
    pub unknown: u32,
    pub rare: u32,
    pub often: u32,
    pub always: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValenceCounts {
    pub negative: u32,
    pub positive: u32,
    pub mixed: u32,
    pub neutral: u32,
}

impl ValenceCounts {
    /// Add another tally into this one
    pub fn merge(&mut self, other: &ValenceCounts) {
        self.negative += other.negative;
        self.positive += other.positive;
        self.mixed += other.mixed;
        self.neutral += other.neutral;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalityCounts {
    pub obligation: u32,
    pub possibility: u32,
    pub obstruction: u32,
    pub neutral: u32,
}

impl ModalityCounts {
    /// Add another tally into this one
    pub fn merge(&mut self, other: &ModalityCounts) {
        self.obligation += other.obligation;
        self.possibility += other.possibility;
        self.obstruction += other.obstruction;
        self.neutral += other.neutral;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRefCounts {
    pub now: u32,
    pub past: u32,
    pub future: u32,
    pub mixed: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoCounts {
    pub unknown: u32,
    pub sudden: u32,
    pub gradual: u32,
    pub slow: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaCounts {
    pub none: u32,
    pub meta: u32,
    pub uncertain: u32,
}

/// Semantic tag distribution over a set of insights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticCounts {
    pub frequency: FrequencyCounts,
    pub valence: ValenceCounts,
    pub modality: ModalityCounts,
    pub time_ref: TimeRefCounts,
    pub tempo: TempoCounts,
    pub meta: MetaCounts,
    pub contrast_count: u32,
    pub absolute_count: u32,
}

impl SemanticCounts {
    pub fn from_insights<'a>(insights: impl IntoIterator<Item = &'a Insight>) -> Self {
        let mut counts = Self::default();
        for insight in insights {
            counts.record(insight);
        }
        counts
    }

    fn record(&mut self, insight: &Insight) {
        let Some(sem) = insight.semantic else {
            self.frequency.unknown += 1;
            self.valence.neutral += 1;
            self.modality.neutral += 1;
            self.time_ref.mixed += 1;
            self.tempo.unknown += 1;
            self.meta.none += 1;
            return;
        };

        match sem.frequency {
            Frequency::Unknown => self.frequency.unknown += 1,
            Frequency::Rare => self.frequency.rare += 1,
            Frequency::Often => self.frequency.often += 1,
            Frequency::Always => self.frequency.always += 1,
        }
        match sem.valence {
            Valence::Negative => self.valence.negative += 1,
            Valence::Positive => self.valence.positive += 1,
            Valence::Mixed => self.valence.mixed += 1,
            Valence::Neutral => self.valence.neutral += 1,
        }
        match sem.modality {
            Modality::Obligation => self.modality.obligation += 1,
            Modality::Possibility => self.modality.possibility += 1,
            Modality::Obstruction => self.modality.obstruction += 1,
            Modality::Neutral => self.modality.neutral += 1,
        }
        match sem.time_ref {
            TimeRef::Now => self.time_ref.now += 1,
            TimeRef::Past => self.time_ref.past += 1,
            TimeRef::Future => self.time_ref.future += 1,
            TimeRef::Mixed => self.time_ref.mixed += 1,
        }
        match sem.tempo {
            Tempo::Unknown => self.tempo.unknown += 1,
            Tempo::Sudden => self.tempo.sudden += 1,
            Tempo::Gradual => self.tempo.gradual += 1,
            Tempo::Slow => self.tempo.slow += 1,
        }
        match sem.meta {
            MetaComment::None => self.meta.none += 1,
            MetaComment::Meta => self.meta.meta += 1,
            MetaComment::Uncertain => self.meta.uncertain += 1,
        }
        if sem.has_contrast {
            self.contrast_count += 1;
        }
        if sem.has_absolute {
            self.absolute_count += 1;
        }
    }
}

/// Number of insights carrying each dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionCounts {
    pub emotion: u32,
    pub behavior: u32,
    pub thought: u32,
    pub body: u32,
    pub relation: u32,
}

impl DimensionCounts {
    pub fn from_insights<'a>(insights: impl IntoIterator<Item = &'a Insight>) -> Self {
        let mut counts = Self::default();
        for dimension in insights.into_iter().flat_map(|i| i.dimensions.iter()) {
            let slot = match dimension {
                Dimension::Emotion => &mut counts.emotion,
                Dimension::Behavior => &mut counts.behavior,
                Dimension::Thought => &mut counts.thought,
                Dimension::Body => &mut counts.body,
                Dimension::Relation => &mut counts.relation,
            };
            *slot += 1;
        }
        counts
    }

    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Emotion => self.emotion,
            Dimension::Behavior => self.behavior,
            Dimension::Thought => self.thought,
            Dimension::Body => self.body,
            Dimension::Relation => self.relation,
        }
    }
}
