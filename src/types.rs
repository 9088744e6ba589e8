//! Core types for the preference survey
//!
//! A survey is a short transcript of yes/no answers. Everything that
//! reaches disk is built from the types in this module.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of questions asked in one session
pub const MAX_QUESTIONS: usize = 5;

/// Timestamp layout used for persisted records
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A respondent's answer to a yes/no question
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One asked question and the answer it received
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub question: String,
    pub answer: Answer,
}

impl TranscriptEntry {
    pub fn new(question: impl Into<String>, answer: Answer) -> Self {
        Self {
            question: question.into(),
            answer,
        }
    }
}

/// Why a session stopped asking questions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionReason {
    /// All five questions were answered
    QuestionLimit,
    /// The selector could not produce a usable index
    SelectorFailed,
    /// No candidate questions were left to choose from
    PoolExhausted,
}

impl CompletionReason {
    pub fn describe(&self) -> &'static str {
        match self {
            CompletionReason::QuestionLimit => "question limit reached",
            CompletionReason::SelectorFailed => "failed to select next question",
            CompletionReason::PoolExhausted => "no questions remaining",
        }
    }
}

/// A completed survey as stored in the results file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurveyRecord {
    pub timestamp: String,
    pub responses: Vec<TranscriptEntry>,
}

impl SurveyRecord {
    /// Stamp a transcript with the current local time
    pub fn new(responses: Vec<TranscriptEntry>) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            responses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_serializes_lowercase() {
        let entry = TranscriptEntry::new("Is suffering meaningful?", Answer::No);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["question"], "Is suffering meaningful?");
        assert_eq!(json["answer"], "no");
    }

    #[test]
    fn test_answer_rejects_other_labels() {
        let parsed: Result<Answer, _> = serde_json::from_str("\"maybe\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_record_timestamp_layout() {
        let record = SurveyRecord::new(Vec::new());

        // YYYYMMDD_HHMMSS
        assert_eq!(record.timestamp.len(), 15);
        assert_eq!(record.timestamp.as_bytes()[8], b'_');
        assert!(chrono::NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).is_ok());
    }
}
