//! Engine facade
//!
//! Wires the classifiers, ingestion, statistics, meta builder and draft
//! writer from one [`AhaConfig`]. The caller owns the [`Chamber`]; the
//! engine holds no per-subject state and performs no storage I/O.

use crate::agent::{strongest_first, AgentState};
use crate::chamber::{Chamber, IngestOutcome, Insight, InsightChamber, Signal};
use crate::classify::{DimensionClassifier, SemanticClassifier};
use crate::config::{AhaConfig, EngineConfig};
use crate::drafts::DraftWriter;
use crate::error::Result;
use crate::meta::{MetaProfile, MetaProfileBuilder, NoPhases, PhaseSource};
use crate::stats::{DimensionCounts, SemanticCounts, TopicStats, TopicStatsCalculator};
use crate::text::split_sentences;
use chrono::{DateTime, Utc};

/// Insight engine configured from [`EngineConfig`]
#[derive(Debug, Clone)]
pub struct Engine {
    chamber: InsightChamber,
    stats: TopicStatsCalculator,
    meta: MetaProfileBuilder,
    drafts: DraftWriter,
    top_insights: usize,
}

impl Engine {
    /// Build an engine with the Norwegian lexicon
    pub fn new(config: &AhaConfig) -> Result<Self> {
        config.validate()?;
        Self::with_classifiers(
            &config.engine,
            SemanticClassifier::norwegian()?,
            DimensionClassifier::norwegian(),
        )
    }

    /// Build an engine around caller-supplied classifiers
    pub fn with_classifiers(
        config: &EngineConfig,
        semantic: SemanticClassifier,
        dimensions: DimensionClassifier,
    ) -> Result<Self> {
        let chamber = InsightChamber::new(semantic, dimensions)
            .with_similarity_threshold(config.similarity_threshold)
            .with_title_max_words(config.title_max_words);
        let stats = TopicStatsCalculator::new(config.density_reference);
        let meta = MetaProfileBuilder::new(stats).with_concept_example_cap(config.concept_example_cap);

        Ok(Self {
            chamber,
            stats,
            meta,
            drafts: DraftWriter::new(config.path_max_steps, config.article_top_n),
            top_insights: config.top_insights,
        })
    }

    /// Ingest one signal
    pub fn ingest(&self, chamber: &mut Chamber, signal: &Signal) -> IngestOutcome {
        self.chamber.ingest(chamber, signal)
    }

    /// Ingest `text` now, as one signal or one signal per sentence
    pub fn ingest_text(
        &self,
        chamber: &mut Chamber,
        text: &str,
        subject_id: &str,
        topic_id: &str,
        split: bool,
    ) -> Vec<IngestOutcome> {
        self.ingest_text_at(chamber, text, subject_id, topic_id, split, Utc::now())
    }

    /// As [`Engine::ingest_text`] with an explicit timestamp
    pub fn ingest_text_at(
        &self,
        chamber: &mut Chamber,
        text: &str,
        subject_id: &str,
        topic_id: &str,
        split: bool,
        at: DateTime<Utc>,
    ) -> Vec<IngestOutcome> {
        let parts = if split {
            split_sentences(text)
        } else {
            vec![text.to_string()]
        };
        parts
            .iter()
            .map(|part| self.ingest(chamber, &Signal::at(part.as_str(), subject_id, topic_id, at)))
            .collect()
    }

    pub fn insights_for_topic<'a>(
        &self,
        chamber: &'a Chamber,
        subject_id: &str,
        topic_id: &str,
    ) -> Vec<&'a Insight> {
        chamber.insights_for_topic(subject_id, topic_id)
    }

    pub fn topic_stats(&self, chamber: &Chamber, subject_id: &str, topic_id: &str) -> TopicStats {
        self.stats.topic_stats(chamber, subject_id, topic_id)
    }

    pub fn semantic_counts(&self, insights: &[&Insight]) -> SemanticCounts {
        SemanticCounts::from_insights(insights.iter().copied())
    }

    pub fn dimension_summary(&self, insights: &[&Insight]) -> DimensionCounts {
        DimensionCounts::from_insights(insights.iter().copied())
    }

    pub fn topics_overview(&self, chamber: &Chamber) -> Vec<TopicStats> {
        self.stats.topics_overview(chamber)
    }

    /// Meta profile without any assigned phases
    pub fn meta_profile(&self, chamber: &Chamber, subject_id: &str) -> MetaProfile {
        self.meta.build(chamber, subject_id, &NoPhases)
    }

    /// Meta profile with phases from `phases`
    pub fn meta_profile_with_phases(
        &self,
        chamber: &Chamber,
        subject_id: &str,
        phases: &dyn PhaseSource,
    ) -> MetaProfile {
        self.meta.build(chamber, subject_id, phases)
    }

    pub fn path_steps(&self, insights: &[&Insight]) -> Vec<String> {
        self.drafts.path_steps(insights)
    }

    pub fn synthesis_text(&self, insights: &[&Insight], topic_id: &str) -> String {
        self.drafts.synthesis_text(insights, topic_id)
    }

    pub fn article_draft(&self, insights: &[&Insight], stats: &TopicStats, topic_id: &str) -> String {
        self.drafts.article_draft(insights, stats, topic_id)
    }

    /// Payload for the narrative generator.
    ///
    /// The topic's stats carry the phase from `phases`; the meta profile is
    /// included only when `with_meta` is set.
    pub fn agent_state(
        &self,
        chamber: &Chamber,
        subject_id: &str,
        topic_id: &str,
        phases: &dyn PhaseSource,
        with_meta: bool,
    ) -> AgentState {
        let insights = chamber.insights_for_topic(subject_id, topic_id);
        let mut topic_stats = self.stats.stats_for(subject_id, topic_id, &insights);
        topic_stats.user_phase = phases.phase_for(subject_id, topic_id);

        AgentState {
            topic_id: topic_id.to_string(),
            subject_id: subject_id.to_string(),
            topic_narrative: self.drafts.narrative(&insights, &topic_stats),
            topic_semantics: self.semantic_counts(&insights),
            topic_dimensions: self.dimension_summary(&insights),
            top_insights: strongest_first(&insights, self.top_insights),
            meta_profile: with_meta.then(|| self.meta.build(chamber, subject_id, phases)),
            field_profile: None,
            topic_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::Phase;
    use chrono::{Duration, TimeZone};
    use std::collections::HashMap;

    fn engine() -> Engine {
        Engine::new(&AhaConfig::default()).unwrap()
    }

    const JOURNAL: [&str; 5] = [
        "jeg er alltid stressa på jobb",
        "sjefen ringer meg sent om kvelden",
        "jeg er alltid stressa på jobb",
        "sover dårlig fordi jeg grubler",
        "føler meg glad når jeg går tur",
    ];

    #[test]
    fn test_reinforcement_scenario() {
        let engine = engine();
        let mut chamber = Chamber::new();

        engine.ingest(&mut chamber, &Signal::new("jeg er alltid stressa på jobb", "u1", "jobb"));
        let first = engine.insights_for_topic(&chamber, "u1", "jobb");
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].strength.evidence_count(), 1);
        assert_eq!(first[0].strength.total_score(), 10);

        engine.ingest(&mut chamber, &Signal::new("jeg er alltid stressa på jobb", "u1", "jobb"));
        let second = engine.insights_for_topic(&chamber, "u1", "jobb");
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].strength.evidence_count(), 2);
        assert_eq!(second[0].strength.total_score(), 20);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let engine = engine();
        let t0 = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();
        let replay = || {
            let mut chamber = Chamber::new();
            for (i, text) in JOURNAL.iter().enumerate() {
                engine.ingest(
                    &mut chamber,
                    &Signal::at(*text, "u1", "jobb", t0 + Duration::hours(i as i64)),
                );
            }
            chamber
        };

        let a = replay();
        let b = replay();
        let strip = |c: &Chamber| -> Vec<_> {
            c.insights()
                .iter()
                .map(|i| {
                    (
                        i.title.clone(),
                        i.summary.clone(),
                        i.strength,
                        i.first_seen,
                        i.last_updated,
                        i.semantic,
                        i.dimensions.clone(),
                    )
                })
                .collect()
        };
        assert_eq!(strip(&a), strip(&b));
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_stats_and_profile_are_pure() {
        let engine = engine();
        let mut chamber = Chamber::new();
        for text in JOURNAL {
            engine.ingest(&mut chamber, &Signal::new(text, "u1", "jobb"));
        }
        engine.ingest(&mut chamber, &Signal::new("vondt i kroppen", "u1", "helse"));
        let snapshot = chamber.clone();

        assert_eq!(
            engine.topic_stats(&chamber, "u1", "jobb"),
            engine.topic_stats(&chamber, "u1", "jobb")
        );
        let now = Utc::now();
        let meta = MetaProfileBuilder::new(TopicStatsCalculator::default());
        assert_eq!(
            meta.build_at(&chamber, "u1", &NoPhases, now),
            meta.build_at(&chamber, "u1", &NoPhases, now)
        );
        assert_eq!(chamber, snapshot);
    }

    #[test]
    fn test_empty_meta_profile() {
        let profile = engine().meta_profile(&Chamber::new(), "u1");
        assert!(profile.topics.is_empty());
        assert!(profile.patterns.is_empty());
        assert_eq!(profile.global.avg_saturation, 0.0);
        assert_eq!(profile.global.pressure_index, 0.0);
        assert_eq!(profile.global.negativity_index, 0.0);
    }

    #[test]
    fn test_ingest_text_split() {
        let engine = engine();
        let mut chamber = Chamber::new();
        let outcomes = engine.ingest_text(
            &mut chamber,
            "Jeg er alltid stressa på jobb. Sjefen ringer meg sent! Ok.",
            "u1",
            "jobb",
            true,
        );

        // "Ok" is shorter than a sentence
        assert_eq!(outcomes.len(), 2);
        assert_eq!(chamber.len(), 2);

        let whole = engine.ingest_text(&mut Chamber::new(), "   ", "u1", "jobb", false);
        assert_eq!(whole.len(), 1);
    }

    #[test]
    fn test_counts_and_overview() {
        let engine = engine();
        let mut chamber = Chamber::new();
        for text in JOURNAL {
            engine.ingest(&mut chamber, &Signal::new(text, "u1", "jobb"));
        }
        engine.ingest(&mut chamber, &Signal::new("vondt i kroppen", "u2", "helse"));

        let insights = engine.insights_for_topic(&chamber, "u1", "jobb");
        let semantics = engine.semantic_counts(&insights);
        let total = semantics.valence.negative
            + semantics.valence.positive
            + semantics.valence.mixed
            + semantics.valence.neutral;
        assert_eq!(total as usize, insights.len());
        assert!(engine.dimension_summary(&insights).emotion >= 1);

        let overview = engine.topics_overview(&chamber);
        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].topic_id, "jobb");
        assert_eq!(overview[1].subject_id, "u2");
    }

    #[test]
    fn test_agent_state() {
        let engine = engine();
        let mut chamber = Chamber::new();
        for text in JOURNAL {
            engine.ingest(&mut chamber, &Signal::new(text, "u1", "jobb"));
        }
        let mut phases = HashMap::new();
        phases.insert("jobb".to_string(), Phase::Press);

        let state = engine.agent_state(&chamber, "u1", "jobb", &phases, true);

        assert_eq!(state.topic_stats.user_phase, Some(Phase::Press));
        assert_eq!(state.top_insights.len(), 4);
        assert_eq!(state.top_insights[0].summary, "jeg er alltid stressa på jobb");
        assert_eq!(state.topic_stats.insight_count, 4);
        assert!(!state.topic_narrative.is_empty());
        let meta = state.meta_profile.as_ref().unwrap();
        assert_eq!(meta.topics[0].stats.user_phase, Some(Phase::Press));

        let bare = engine.agent_state(&chamber, "u1", "jobb", &NoPhases, false);
        assert!(bare.meta_profile.is_none());
        assert!(bare.topic_stats.user_phase.is_none());
    }

    #[test]
    fn test_config_drives_engine() {
        let mut config = AhaConfig::default();
        config.engine.top_insights = 1;
        config.engine.similarity_threshold = 1.0;
        let engine = Engine::new(&config).unwrap();
        let mut chamber = Chamber::new();

        engine.ingest(&mut chamber, &Signal::new("alltid stressa jobb møter", "u1", "jobb"));
        engine.ingest(&mut chamber, &Signal::new("alltid stressa jobb veldig", "u1", "jobb"));
        assert_eq!(chamber.len(), 2);

        let state = engine.agent_state(&chamber, "u1", "jobb", &NoPhases, false);
        assert_eq!(state.top_insights.len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AhaConfig::default();
        config.engine.similarity_threshold = -0.1;
        assert!(Engine::new(&config).is_err());
    }
}
