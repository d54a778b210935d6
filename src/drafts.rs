//! Plain-text drafts built from a topic's insights
//!
//! These are templates over engine output, not analysis. The agent payload
//! carries the draft matching the topic's recommended artifact type.

use crate::chamber::Insight;
use crate::stats::{ArtifactType, TopicStats};

/// Default number of steps in a path
pub const DEFAULT_PATH_STEPS: usize = 5;
/// Default number of insights quoted in an article draft
pub const DEFAULT_ARTICLE_TOP_N: usize = 5;

const EMPTY_PATH: &str = "No insights to build a path from yet.";
const EMPTY_SYNTHESIS: &str = "No insights to synthesize yet.";
const EMPTY_ARTICLE: &str = "No insights to draft an article from yet.";

/// Draft templates with their size limits
#[derive(Debug, Clone, Copy)]
pub struct DraftWriter {
    path_max_steps: usize,
    article_top_n: usize,
}

impl Default for DraftWriter {
    fn default() -> Self {
        Self::new(DEFAULT_PATH_STEPS, DEFAULT_ARTICLE_TOP_N)
    }
}

impl DraftWriter {
    pub fn new(path_max_steps: usize, article_top_n: usize) -> Self {
        Self {
            path_max_steps,
            article_top_n,
        }
    }

    /// Oldest insights first as numbered steps: `"1. summary"`.
    pub fn path_steps(&self, insights: &[&Insight]) -> Vec<String> {
        if insights.is_empty() {
            return vec![EMPTY_PATH.to_string()];
        }
        let mut sorted = insights.to_vec();
        sorted.sort_by_key(|i| i.first_seen);
        sorted
            .iter()
            .take(self.path_max_steps)
            .enumerate()
            .map(|(idx, i)| format!("{}. {}", idx + 1, i.summary))
            .collect()
    }

    /// Header plus one bullet per insight, in the given order
    pub fn synthesis_text(&self, insights: &[&Insight], topic_id: &str) -> String {
        if insights.is_empty() {
            return EMPTY_SYNTHESIS.to_string();
        }
        let mut text = format!("Synthesis for topic {}:", topic_id);
        for insight in insights {
            text.push_str("\n- ");
            text.push_str(&insight.summary);
        }
        text
    }

    /// Header with the topic's numbers, the strongest insights, and a
    /// closing note.
    pub fn article_draft(&self, insights: &[&Insight], stats: &TopicStats, topic_id: &str) -> String {
        if insights.is_empty() {
            return EMPTY_ARTICLE.to_string();
        }

        let mut sorted = insights.to_vec();
        sorted.sort_by(|a, b| b.strength.total_score().cmp(&a.strength.total_score()));
        let body = sorted
            .iter()
            .take(self.article_top_n)
            .enumerate()
            .map(|(idx, i)| format!("{}) {}", idx + 1, i.summary))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Article draft for topic {} (based on {} insights, saturation {}/100, concept density {}/100):\n\n{}\n\n→ This is a rough draft. The AHA agent can help rewrite it as flowing text.",
            topic_id, stats.insight_count, stats.insight_saturation, stats.concept_density, body
        )
    }

    /// The draft matching `stats.artifact_type`.
    ///
    /// Short and list topics get the synthesis; path topics get the steps,
    /// one per line.
    pub fn narrative(&self, insights: &[&Insight], stats: &TopicStats) -> String {
        match stats.artifact_type {
            ArtifactType::Short | ArtifactType::List => {
                self.synthesis_text(insights, &stats.topic_id)
            }
            ArtifactType::Path => self.path_steps(insights).join("\n"),
            ArtifactType::Article => self.article_draft(insights, stats, &stats.topic_id),
        }
    }
}
