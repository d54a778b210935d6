//! Category tagging (emotion, behavior, thought, body, relation)

use super::lexicon::{contains_any, DimensionLexicon, NORWEGIAN_DIMENSIONS};
use serde::{Deserialize, Serialize};

/// Experience category an insight touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Emotion,
    Behavior,
    Thought,
    Body,
    Relation,
}

impl Dimension {
    /// All dimensions in their fixed order
    pub const ALL: [Dimension; 5] = [
        Dimension::Emotion,
        Dimension::Behavior,
        Dimension::Thought,
        Dimension::Body,
        Dimension::Relation,
    ];
}

/// Stateless dimension classifier over an injected lexicon
#[derive(Debug, Clone, Copy)]
pub struct DimensionClassifier {
    lexicon: &'static DimensionLexicon,
}

impl DimensionClassifier {
    /// Create a classifier over the given lexicon
    pub fn new(lexicon: &'static DimensionLexicon) -> Self {
        Self { lexicon }
    }

    /// Classifier over the built-in Norwegian lexicon
    pub fn norwegian() -> Self {
        Self::new(&NORWEGIAN_DIMENSIONS)
    }

    /// Every dimension with at least one keyword hit, or `[Thought]` when
    /// nothing matches. Never empty.
    pub fn classify(&self, text: &str) -> Vec<Dimension> {
        let lower = text.to_lowercase();
        let dims: Vec<Dimension> = Dimension::ALL
            .into_iter()
            .filter(|d| contains_any(&lower, self.keywords(*d)))
            .collect();

        if dims.is_empty() {
            vec![Dimension::Thought]
        } else {
            dims
        }
    }

    fn keywords(&self, dimension: Dimension) -> &'static [&'static str] {
        match dimension {
            Dimension::Emotion => self.lexicon.emotion,
            Dimension::Behavior => self.lexicon.behavior,
            Dimension::Thought => self.lexicon.thought,
            Dimension::Body => self.lexicon.body,
            Dimension::Relation => self.lexicon.relation,
        }
    }
}

impl Default for DimensionClassifier {
    fn default() -> Self {
        Self::norwegian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dimension() {
        let dims = DimensionClassifier::norwegian().classify("vondt i kroppen");
        assert_eq!(dims, vec![Dimension::Body]);
    }

    #[test]
    fn test_multiple_dimensions_in_fixed_order() {
        let dims = DimensionClassifier::norwegian()
            .classify("sjefen gjør meg redd, og jeg utsetter alt");
        assert_eq!(
            dims,
            vec![Dimension::Emotion, Dimension::Behavior, Dimension::Relation]
        );
    }

    #[test]
    fn test_fallback_to_thought() {
        let dims = DimensionClassifier::norwegian().classify("xyz");
        assert_eq!(dims, vec![Dimension::Thought]);
    }

    #[test]
    fn test_empty_text_falls_back() {
        let dims = DimensionClassifier::norwegian().classify("");
        assert_eq!(dims, vec![Dimension::Thought]);
    }

    #[test]
    fn test_substring_matching_is_case_insensitive() {
        let dims = DimensionClassifier::norwegian().classify("Jeg er SLITEN");
        assert!(dims.contains(&Dimension::Body));
        assert!(!dims.is_empty());
    }

    #[test]
    fn test_dimension_serialization() {
        let json = serde_json::to_string(&Dimension::Behavior).unwrap();
        assert_eq!(json, "\"behavior\"");
    }
}
