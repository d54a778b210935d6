//! Topic statistics: density, saturation and the recommended artifact
//!
//! All three are pure functions of a topic's insights. The artifact decision
//! is an ordered rule chain: the first matching rule wins, and two disjoint
//! regions of the (saturation, density) plane both recommend a path.

use crate::chamber::{Chamber, Insight};
use crate::meta::Phase;
use crate::text::{filter_stopwords, tokenize};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lexical diversity that maps to full density
pub const DEFAULT_DENSITY_REFERENCE: f64 = 0.25;

const SATURATION_COUNT_CAP: usize = 10;
const SATURATION_PER_INSIGHT: u32 = 7;
const DIMENSION_BONUS: (usize, u32) = (5, 4);
const TIME_REF_BONUS: (usize, u32) = (3, 3);
const VALENCE_BONUS: (usize, u32) = (4, 1);

/// Recommended output format for a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    Short,
    List,
    Path,
    Article,
}

impl ArtifactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Short => "short",
            ArtifactType::List => "list",
            ArtifactType::Path => "path",
            ArtifactType::Article => "article",
        }
    }
}

impl std::fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics for one (subject, topic) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicStats {
    pub topic_id: String,
    pub subject_id: String,
    /// 0..=100
    pub insight_saturation: u32,
    /// 0..=100
    pub concept_density: u32,
    pub artifact_type: ArtifactType,
    pub insight_count: usize,
    /// Assigned externally; never set by the calculator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_phase: Option<Phase>,
}

/// Computes topic statistics from a chamber snapshot
#[derive(Debug, Clone, Copy)]
pub struct TopicStatsCalculator {
    density_reference: f64,
}

impl Default for TopicStatsCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_DENSITY_REFERENCE)
    }
}

impl TopicStatsCalculator {
    /// `density_reference` is the unique/total token ratio scored as 100.
    /// Non-positive values fall back to the default.
    pub fn new(density_reference: f64) -> Self {
        let density_reference = if density_reference > 0.0 {
            density_reference
        } else {
            DEFAULT_DENSITY_REFERENCE
        };
        Self { density_reference }
    }

    /// Statistics for one subject and topic
    pub fn topic_stats(&self, chamber: &Chamber, subject_id: &str, topic_id: &str) -> TopicStats {
        let insights = chamber.insights_for_topic(subject_id, topic_id);
        self.stats_for(subject_id, topic_id, &insights)
    }

    /// Statistics for an already selected insight list
    pub fn stats_for(&self, subject_id: &str, topic_id: &str, insights: &[&Insight]) -> TopicStats {
        let saturation = saturation(insights.iter().copied());
        let density = self.density(insights.iter().copied());
        TopicStats {
            topic_id: topic_id.to_string(),
            subject_id: subject_id.to_string(),
            insight_saturation: saturation,
            concept_density: density,
            artifact_type: artifact_type(saturation, density),
            insight_count: insights.len(),
            user_phase: None,
        }
    }

    /// One entry per distinct (subject, topic) pair, in first-appearance order
    pub fn topics_overview(&self, chamber: &Chamber) -> Vec<TopicStats> {
        chamber
            .topic_keys()
            .into_iter()
            .map(|(subject_id, topic_id)| self.topic_stats(chamber, subject_id, topic_id))
            .collect()
    }

    /// Lexical diversity of the topic's text, scaled to 0..=100.
    pub fn density<'a>(&self, insights: impl IntoIterator<Item = &'a Insight>) -> u32 {
        let combined = insights
            .into_iter()
            .map(|i| format!("{}. {}", i.title, i.summary))
            .collect::<Vec<_>>()
            .join(" ");

        let tokens = filter_stopwords(tokenize(&combined));
        if tokens.is_empty() {
            return 0;
        }
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let raw = unique.len() as f64 / tokens.len() as f64;
        let normalized = (raw / self.density_reference).clamp(0.0, 1.0);
        (normalized * 100.0).round() as u32
    }
}

/// Amount and variety of material, scaled to 0..=100.
///
/// Up to 70 points for the insight count, plus bonuses for distinct
/// dimensions, time references and valences.
pub fn saturation<'a>(insights: impl IntoIterator<Item = &'a Insight>) -> u32 {
    let mut count = 0usize;
    let mut dimensions = HashSet::new();
    let mut time_refs = HashSet::new();
    let mut valences = HashSet::new();

    for insight in insights {
        count += 1;
        dimensions.extend(insight.dimensions.iter().copied());
        if let Some(sem) = insight.semantic {
            time_refs.insert(sem.time_ref);
            valences.insert(sem.valence);
        }
    }
    if count == 0 {
        return 0;
    }

    let bonus = |distinct: usize, (cap, points): (usize, u32)| distinct.min(cap) as u32 * points;
    let base = count.min(SATURATION_COUNT_CAP) as u32 * SATURATION_PER_INSIGHT;
    let total = base
        + bonus(dimensions.len(), DIMENSION_BONUS)
        + bonus(time_refs.len(), TIME_REF_BONUS)
        + bonus(valences.len(), VALENCE_BONUS);
    total.min(100)
}

/// Recommended artifact for a saturation and density pair
pub fn artifact_type(saturation: u32, density: u32) -> ArtifactType {
    let mid = (30..60).contains(&saturation);
    if saturation < 30 && density < 30 {
        ArtifactType::Short
    } else if mid && density < 60 {
        ArtifactType::List
    } else if mid && density >= 60 {
        ArtifactType::Path
    } else if saturation >= 60 && density >= 60 {
        ArtifactType::Article
    } else if saturation >= 60 && density < 60 {
        ArtifactType::Path
    } else {
        ArtifactType::Short
    }
}
