//! Reply parsing for the narrative generator

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Coaching reply for one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReply {
    #[serde(alias = "theme_id")]
    pub topic_id: String,
    /// Two to four sentences on where the topic stands
    pub summary: String,
    /// Observations tied to the state data
    pub what_i_see: Vec<String>,
    /// Small, concrete experiments
    pub next_steps: Vec<String>,
    /// One open question
    pub one_question: String,
    pub tone: String,
}

impl AgentReply {
    /// Parse and validate a generator reply
    pub fn parse(json: &str) -> Result<Self> {
        let reply: AgentReply = serde_json::from_str(json.trim())
            .map_err(|e| Error::Agent(format!("Malformed reply: {}", e)))?;
        reply.validate()?;
        Ok(reply)
    }

    /// Reject blank fields and empty lists
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("topic_id", &self.topic_id),
            ("summary", &self.summary),
            ("one_question", &self.one_question),
            ("tone", &self.tone),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::Agent(format!("Reply field '{}' is blank", name)));
            }
        }

        for (name, items) in [("what_i_see", &self.what_i_see), ("next_steps", &self.next_steps)] {
            if items.is_empty() {
                return Err(Error::Agent(format!("Reply field '{}' is empty", name)));
            }
            if items.iter().any(|s| s.trim().is_empty()) {
                return Err(Error::Agent(format!(
                    "Reply field '{}' contains a blank entry",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "topic_id": "jobb",
        "summary": "Presset på jobb har vart en stund.",
        "what_i_see": ["Mye må og burde"],
        "next_steps": ["Skriv ned én typisk situasjon"],
        "one_question": "Når var det sist litt lettere?",
        "tone": "rolig, støttende"
    }"#;

    #[test]
    fn test_parse_valid_reply() {
        let reply = AgentReply::parse(VALID).unwrap();
        assert_eq!(reply.topic_id, "jobb");
        assert_eq!(reply.next_steps.len(), 1);
    }

    #[test]
    fn test_parse_accepts_theme_id() {
        let json = VALID.replace("\"topic_id\"", "\"theme_id\"");
        assert_eq!(AgentReply::parse(&json).unwrap().topic_id, "jobb");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let err = AgentReply::parse("not json").unwrap_err();
        assert!(matches!(err, Error::Agent(_)));

        let err = AgentReply::parse(r#"{"topic_id": "jobb"}"#).unwrap_err();
        assert!(matches!(err, Error::Agent(_)));
    }

    #[test]
    fn test_parse_rejects_empty_lists() {
        let json = VALID.replace(r#"["Mye må og burde"]"#, "[]");
        let err = AgentReply::parse(&json).unwrap_err();
        assert!(err.to_string().contains("what_i_see"));
    }

    #[test]
    fn test_parse_rejects_blank_strings() {
        let json = VALID.replace("rolig, støttende", "  ");
        let err = AgentReply::parse(&json).unwrap_err();
        assert!(err.to_string().contains("tone"));

        let json = VALID.replace("Skriv ned én typisk situasjon", "");
        assert!(AgentReply::parse(&json).is_err());
    }
}
