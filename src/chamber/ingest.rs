//! Signal ingestion: reinforce a similar insight or create a new one
//!
//! For each signal the chamber looks at the insights of the same subject and
//! topic, scores each one's summary against the signal text with Jaccard
//! similarity, and reinforces the best match when it reaches the threshold.
//! Otherwise the signal becomes a new insight, classified once at creation.

use super::collection::Chamber;
use super::insight::{InsightBuilder, DEFAULT_TITLE_WORDS};
use super::signal::Signal;
use crate::classify::{DimensionClassifier, SemanticClassifier};
use crate::text::jaccard;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum similarity for a signal to reinforce an existing insight
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

/// What ingestion did with a signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IngestOutcome {
    /// A new insight was appended
    Created { insight_id: Uuid },
    /// An existing insight gained evidence
    Reinforced {
        insight_id: Uuid,
        evidence_count: u32,
        similarity: f64,
    },
}

impl IngestOutcome {
    /// The insight that was created or reinforced
    pub fn insight_id(&self) -> Uuid {
        match self {
            Self::Created { insight_id } | Self::Reinforced { insight_id, .. } => *insight_id,
        }
    }
}

/// Ingestion service with its classifiers passed in explicitly
#[derive(Debug, Clone)]
pub struct InsightChamber {
    semantic: SemanticClassifier,
    dimensions: DimensionClassifier,
    similarity_threshold: f64,
    title_max_words: usize,
}

impl InsightChamber {
    /// Create an ingestion service using the given classifiers
    pub fn new(semantic: SemanticClassifier, dimensions: DimensionClassifier) -> Self {
        Self {
            semantic,
            dimensions,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            title_max_words: DEFAULT_TITLE_WORDS,
        }
    }

    /// Override the reinforcement threshold
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Override the number of words kept in generated titles
    pub fn with_title_max_words(mut self, words: usize) -> Self {
        self.title_max_words = words;
        self
    }

    /// Ingest one signal into `chamber`.
    ///
    /// Never fails: empty text yields an insight with neutral semantics and
    /// the fallback dimension.
    pub fn ingest(&self, chamber: &mut Chamber, signal: &Signal) -> IngestOutcome {
        let mut best: Option<(usize, f64)> = None;
        let mut best_similarity = 0.0;
        for (idx, insight) in chamber.insights().iter().enumerate() {
            if !insight.belongs_to(&signal.subject_id, &signal.topic_id) {
                continue;
            }
            let similarity = jaccard(&signal.text, &insight.summary);
            if similarity > best_similarity {
                best_similarity = similarity;
                best = Some((idx, similarity));
            }
        }

        if let Some((idx, similarity)) = best.filter(|(_, s)| *s >= self.similarity_threshold) {
            let insight = &mut chamber.insights_mut()[idx];
            insight.reinforce(signal.timestamp);
            tracing::debug!(
                insight_id = %insight.id,
                evidence_count = insight.strength.evidence_count(),
                similarity,
                "Reinforced insight"
            );
            return IngestOutcome::Reinforced {
                insight_id: insight.id,
                evidence_count: insight.strength.evidence_count(),
                similarity,
            };
        }

        let insight = InsightBuilder::new(signal.subject_id.clone(), signal.topic_id.clone())
            .summary(signal.text.clone())
            .title_words(self.title_max_words)
            .first_seen(signal.timestamp)
            .semantic(self.semantic.classify(&signal.text))
            .dimensions(self.dimensions.classify(&signal.text))
            .build();
        let insight_id = insight.id;
        tracing::debug!(
            insight_id = %insight_id,
            subject_id = %signal.subject_id,
            topic_id = %signal.topic_id,
            "Created insight"
        );
        chamber.push(insight);

        IngestOutcome::Created { insight_id }
    }
}
