//! Insight chamber: signals, insights and ingestion
//!
//! Signals are raw submissions; insights are the deduplicated records they
//! reinforce or create. The [`Chamber`] holds every insight for every
//! subject and topic and is owned by the caller.

pub mod collection;
pub mod ingest;
pub mod insight;
pub mod signal;
pub mod store;

pub use collection::Chamber;
pub use ingest::{IngestOutcome, InsightChamber, DEFAULT_SIMILARITY_THRESHOLD};
pub use insight::{ConceptMention, Insight, InsightBuilder, Strength};
pub use signal::Signal;
pub use store::{ChamberStore, JsonFileStore};
