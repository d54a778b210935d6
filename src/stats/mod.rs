//! Per-topic statistics and tag distributions

pub mod counts;
pub mod topic;

pub use counts::{
    DimensionCounts, FrequencyCounts, MetaCounts, ModalityCounts, SemanticCounts, TempoCounts,
    TimeRefCounts, ValenceCounts,
};
pub use topic::{
    artifact_type, saturation, ArtifactType, TopicStats, TopicStatsCalculator,
    DEFAULT_DENSITY_REFERENCE,
};
