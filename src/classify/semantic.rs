//! Rule-based semantic tagging of a single statement
//!
//! Every axis is an ordered rule chain over keyword lists. The order of the
//! checks is part of the contract: reordering them changes the labels
//! produced for texts that match more than one list.

use super::lexicon::{contains_any, count_hits, SemanticLexicon, NORWEGIAN_SEMANTICS};
use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How strongly the statement is phrased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    High,
    #[default]
    Medium,
    Low,
}

/// How often the described situation occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Always,
    Often,
    Rare,
    #[default]
    Unknown,
}

/// Emotional colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Valence {
    Positive,
    Negative,
    Mixed,
    #[default]
    Neutral,
}

/// Requirement, possibility or obstruction language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Obligation,
    Possibility,
    Obstruction,
    #[default]
    Neutral,
}

/// Time the statement refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRef {
    #[default]
    Now,
    Past,
    Future,
    Mixed,
}

/// Who the statement is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    #[serde(rename = "self")]
    SelfRef,
    Other,
    #[default]
    Diffuse,
}

/// Pace of change described
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tempo {
    Sudden,
    Gradual,
    Slow,
    #[default]
    Unknown,
}

/// Hedging or commentary about the statement itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaComment {
    Meta,
    Uncertain,
    #[default]
    None,
}

/// Output of [`SemanticClassifier::classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SemanticTags {
    pub intensity: Intensity,
    pub frequency: Frequency,
    pub valence: Valence,
    pub modality: Modality,
    pub subject_type: SubjectType,
    pub time_ref: TimeRef,
    pub tempo: Tempo,
    pub meta: MetaComment,
    pub has_contrast: bool,
    pub has_absolute: bool,
}

/// Stateless semantic classifier over an injected lexicon
#[derive(Debug, Clone)]
pub struct SemanticClassifier {
    lexicon: &'static SemanticLexicon,
    self_pattern: Option<Regex>,
    other_pattern: Option<Regex>,
}

impl SemanticClassifier {
    /// Create a classifier over the given lexicon.
    ///
    /// The subject-type word lists are compiled into whole-word patterns.
    pub fn new(lexicon: &'static SemanticLexicon) -> Result<Self> {
        Ok(Self {
            lexicon,
            self_pattern: whole_word_pattern("subject_self", lexicon.subject_self)?,
            other_pattern: whole_word_pattern("subject_other", lexicon.subject_other)?,
        })
    }

    /// Classifier over the built-in Norwegian lexicon
    pub fn norwegian() -> Result<Self> {
        Self::new(&NORWEGIAN_SEMANTICS)
    }

    /// Tag `text` along every semantic axis.
    pub fn classify(&self, text: &str) -> SemanticTags {
        let lower = text.to_lowercase();
        let lex = self.lexicon;
        let has = |list: &[&str]| contains_any(&lower, list);

        let intensity = if has(lex.intensity_high) {
            Intensity::High
        } else if has(lex.intensity_low) {
            Intensity::Low
        } else {
            Intensity::Medium
        };

        let frequency = if has(lex.frequency_always) {
            Frequency::Always
        } else if has(lex.frequency_often) {
            Frequency::Often
        } else if has(lex.frequency_rare) {
            Frequency::Rare
        } else {
            Frequency::Unknown
        };

        let mut modality = if has(lex.modality_obligation) {
            Modality::Obligation
        } else if has(lex.modality_possibility) {
            Modality::Possibility
        } else {
            Modality::Neutral
        };
        if has(lex.modality_obstruction) {
            modality = Modality::Obstruction;
        }

        let mut time_refs = Vec::with_capacity(3);
        if has(lex.time_now) {
            time_refs.push(TimeRef::Now);
        }
        if has(lex.time_past) {
            time_refs.push(TimeRef::Past);
        }
        if has(lex.time_future) {
            time_refs.push(TimeRef::Future);
        }
        let time_ref = match time_refs.as_slice() {
            [] => TimeRef::Now,
            [single] => *single,
            _ => TimeRef::Mixed,
        };

        let subject_type = if matches_word(&self.self_pattern, &lower) {
            SubjectType::SelfRef
        } else if matches_word(&self.other_pattern, &lower) {
            SubjectType::Other
        } else {
            SubjectType::Diffuse
        };

        let positive = count_hits(&lower, lex.valence_positive);
        let negative = count_hits(&lower, lex.valence_negative);
        let valence = if positive > negative && positive > 0 {
            Valence::Positive
        } else if negative > positive && negative > 0 {
            Valence::Negative
        } else if positive > 0 && negative > 0 {
            Valence::Mixed
        } else {
            Valence::Neutral
        };

        let tempo = if has(lex.tempo_sudden) {
            Tempo::Sudden
        } else if has(lex.tempo_gradual) {
            Tempo::Gradual
        } else if has(lex.tempo_slow) {
            Tempo::Slow
        } else {
            Tempo::Unknown
        };

        let meta = if has(lex.meta) {
            MetaComment::Meta
        } else if has(lex.meta_uncertain) {
            MetaComment::Uncertain
        } else {
            MetaComment::None
        };

        SemanticTags {
            intensity,
            frequency,
            valence,
            modality,
            subject_type,
            time_ref,
            tempo,
            meta,
            has_contrast: has(lex.contrast),
            has_absolute: has(lex.absolute),
        }
    }
}

fn whole_word_pattern(name: &str, words: &[&str]) -> Result<Option<Regex>> {
    if words.is_empty() {
        return Ok(None);
    }
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    // ASCII boundaries: `æ`, `ø` and `å` count as separators
    Regex::new(&format!(r"(?-u:\b)(?:{alternation})(?-u:\b)"))
        .map(Some)
        .map_err(|e| Error::Config(format!("Invalid word list '{name}': {e}")))
}

fn matches_word(pattern: &Option<Regex>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|p| p.is_match(text))
}
