//! Cross-topic meta layer
//!
//! Lifecycle stages, the global profile, cross-topic patterns and the
//! concept index, composed per subject by [`MetaProfileBuilder`].

pub mod builder;
pub mod concepts;
pub mod lifecycle;
pub mod patterns;
pub mod phase;
pub mod profile;

pub use builder::{MetaProfile, MetaProfileBuilder, StagedInsight};
pub use concepts::{concept_index, ConceptEntry, DEFAULT_EXAMPLE_CAP};
pub use lifecycle::Lifecycle;
pub use patterns::{detect_patterns, PatternId, PatternKind, PatternRecord};
pub use phase::{NoPhases, Phase, PhaseCounts, PhaseSource};
pub use profile::{GlobalProfile, TopicProfile};
