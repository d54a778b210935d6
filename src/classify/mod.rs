//! Deterministic keyword classifiers
//!
//! Both classifiers read immutable keyword tables from [`lexicon`] and keep
//! no state between calls.

pub mod dimension;
pub mod lexicon;
pub mod semantic;

pub use dimension::{Dimension, DimensionClassifier};
pub use lexicon::{DimensionLexicon, SemanticLexicon, NORWEGIAN_DIMENSIONS, NORWEGIAN_SEMANTICS};
pub use semantic::{
    Frequency, Intensity, MetaComment, Modality, SemanticClassifier, SemanticTags, SubjectType,
    Tempo, TimeRef, Valence,
};
