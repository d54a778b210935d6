//! AHA - Rule-based insight engine for journaling text
//!
//! AHA turns short journal messages into deduplicated, reinforceable
//! insights per subject and topic, tags them with deterministic keyword
//! classifiers, and derives topic statistics and a cross-topic meta profile
//! for a downstream coaching agent.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          Engine                                │
//! │                                                                │
//! │  text ──▶ Signal ──▶ InsightChamber ──▶ Chamber (caller-owned) │
//! │                       │        │                               │
//! │              SemanticClassifier DimensionClassifier            │
//! │                                                                │
//! │  Chamber ──▶ TopicStatsCalculator ──▶ TopicStats, counts       │
//! │  Chamber ──▶ MetaProfileBuilder   ──▶ MetaProfile              │
//! │                     ▲                                          │
//! │                PhaseSource (external)                          │
//! │                                                                │
//! │  stats + insights ──▶ DraftWriter ──▶ AgentState ──▶ generator │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core is synchronous and never fails on input; errors only arise at
//! the boundaries (configuration, chamber storage, generator replies).
//!
//! ## Modules
//!
//! - [`text`]: Tokenization, titles, sentence splitting and similarity
//! - [`classify`]: Semantic and dimension keyword classifiers
//! - [`chamber`]: Signals, insights, ingestion and persistence
//! - [`stats`]: Topic statistics and tag distributions
//! - [`meta`]: Lifecycle, global profile, patterns and concept index
//! - [`drafts`]: Path, synthesis and article drafts
//! - [`agent`]: Narrative generator payload and reply validation
//! - [`engine`]: Facade wiring everything from configuration
//! - [`config`]: Configuration management

pub mod agent;
pub mod chamber;
pub mod classify;
pub mod config;
pub mod drafts;
pub mod engine;
pub mod error;
pub mod meta;
pub mod stats;
pub mod text;

pub use chamber::{Chamber, IngestOutcome, Insight, Signal};
pub use config::AhaConfig;
pub use engine::Engine;
pub use error::{Error, Result};
