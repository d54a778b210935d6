//! Narrative generator boundary
//!
//! The engine does not write coaching text itself. It hands an
//! [`AgentState`] to an external generator (typically LLM-backed) and
//! validates the [`AgentReply`] that comes back.

pub mod payload;
pub mod reply;

pub use payload::{strongest_first, AgentState, DEFAULT_TOP_INSIGHTS};
pub use reply::AgentReply;
