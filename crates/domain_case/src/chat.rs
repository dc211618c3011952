//! Chat response rules
//!
//! The site's help widget answers a fixed set of questions. Responses come
//! from an explicit rule table (patterns to response text) with a fallback,
//! so the matching behavior is data, not scattered string comparisons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CaseId, ChatMessageId};

/// Who sent a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Visitor,
    Assistant,
}

/// A chat message exchanged with the help widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    /// Case the conversation belongs to, if the visitor has one open
    pub case_id: Option<CaseId>,
    pub sender: Sender,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(case_id: Option<CaseId>, sender: Sender, body: impl Into<String>) -> Self {
        Self {
            id: ChatMessageId::new_v7(),
            case_id,
            sender,
            body: body.into(),
            sent_at: Utc::now(),
        }
    }
}

/// A single response rule: if any pattern matches, reply with the response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRule {
    /// Case-insensitive substrings that trigger this rule
    pub patterns: Vec<String>,
    /// The canned reply
    pub response: String,
}

/// Ordered rule table; first matching rule wins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRuleTable {
    rules: Vec<ResponseRule>,
    fallback: String,
}

impl ResponseRuleTable {
    /// Creates a table from explicit rules and a fallback reply
    pub fn new(rules: Vec<ResponseRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// The rules shipped with the marketing site
    pub fn builtin() -> Self {
        let rule = |patterns: &[&str], response: &str| ResponseRule {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            response: response.to_string(),
        };

        Self::new(
            vec![
                rule(
                    &["diminished value", "what is dv"],
                    "Diminished value is the resale value your vehicle loses after an \
                     accident, even once repairs are complete. Our appraisal documents \
                     that loss so you can recover it from the at-fault insurer.",
                ),
                rule(
                    &["how long", "turnaround"],
                    "Most appraisal reports are ready within two business days of \
                     receiving your repair invoice.",
                ),
                rule(
                    &["price", "cost", "fee"],
                    "The full appraisal is a flat fee, and qualifying vehicles are \
                     covered by our money-back guarantee.",
                ),
                rule(
                    &["guarantee", "refund"],
                    "If your recovered diminished value does not exceed our fee, the \
                     appraisal is free. Eligibility depends on your vehicle's \
                     pre-accident value.",
                ),
                rule(
                    &["state", "georgia", "florida", "north carolina"],
                    "We currently serve Georgia, Florida, and North Carolina.",
                ),
            ],
            "Thanks for reaching out! Start a free estimate and we'll take a look \
             at your claim, or email support for anything else.",
        )
    }

    /// Replies to a visitor message.
    ///
    /// Matching is case-insensitive substring containment; the first rule
    /// with any matching pattern wins, otherwise the fallback is returned.
    pub fn respond(&self, message: &str) -> &str {
        let needle = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| {
                rule.patterns
                    .iter()
                    .any(|pattern| needle.contains(&pattern.to_lowercase()))
            })
            .map(|rule| rule.response.as_str())
            .unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_case_insensitive() {
        let table = ResponseRuleTable::builtin();
        let reply = table.respond("What IS Diminished Value exactly?");
        assert!(reply.contains("resale value"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let table = ResponseRuleTable::new(
            vec![
                ResponseRule {
                    patterns: vec!["hello".to_string()],
                    response: "first".to_string(),
                },
                ResponseRule {
                    patterns: vec!["hello".to_string()],
                    response: "second".to_string(),
                },
            ],
            "fallback",
        );
        assert_eq!(table.respond("hello there"), "first");
    }

    #[test]
    fn test_fallback_for_unmatched_message() {
        let table = ResponseRuleTable::builtin();
        let reply = table.respond("completely unrelated question");
        assert!(reply.contains("free estimate"));
    }

    #[test]
    fn test_chat_message_construction() {
        let msg = ChatMessage::new(None, Sender::Visitor, "hi");
        assert_eq!(msg.sender, Sender::Visitor);
        assert!(msg.case_id.is_none());
        assert_eq!(msg.body, "hi");
    }
}
