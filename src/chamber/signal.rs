//! Raw submissions fed into the chamber

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One raw text submission tied to a subject and topic.
///
/// Signals are consumed by ingestion and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub subject_id: String,
    pub topic_id: String,
    /// Message text, trimmed
    pub text: String,
}

impl Signal {
    /// Create a signal stamped with the current time.
    pub fn new(
        text: impl AsRef<str>,
        subject_id: impl Into<String>,
        topic_id: impl Into<String>,
    ) -> Self {
        Self::at(text, subject_id, topic_id, Utc::now())
    }

    /// Create a signal with an explicit timestamp.
    pub fn at(
        text: impl AsRef<str>,
        subject_id: impl Into<String>,
        topic_id: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            subject_id: subject_id.into(),
            topic_id: topic_id.into(),
            text: text.as_ref().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_signal_trims_text() {
        let signal = Signal::new("  jeg er sliten \n", "u1", "søvn");
        assert_eq!(signal.text, "jeg er sliten");
        assert_eq!(signal.subject_id, "u1");
        assert_eq!(signal.topic_id, "søvn");
    }

    #[test]
    fn test_signal_at_uses_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let signal = Signal::at("tekst", "u1", "jobb", ts);
        assert_eq!(signal.timestamp, ts);
    }

    #[test]
    fn test_signal_ids_unique() {
        let a = Signal::new("a", "u1", "t");
        let b = Signal::new("a", "u1", "t");
        assert_ne!(a.id, b.id);
    }
}
