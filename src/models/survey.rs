//! Survey graph data model
//!
//! A survey is a directed graph of questions and answer-conditioned
//! transitions, loaded as immutable declarative data. Each answer carries an
//! [`Action`] that is queued during navigation and executed at completion.
//!
//! The persisted format is a JSON object keyed by survey id:
//!
//! ```json
//! {
//!   "start_business": {
//!     "title": "...", "tags": ["..."], "premium_only": false,
//!     "questions": [{"id": "q1", "text": "...", "answers": [...]}],
//!     "transitions": [{"from_question_id": "q1", "condition_answer_id": "a1",
//!                      "to_question_id": "q2"}]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text payload of a message action: either a single string or a list of
/// lines that get joined with newlines at execution time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextPayload {
    One(String),
    Many(Vec<String>),
}

impl TextPayload {
    /// Join list payloads into a single string
    pub fn join(&self) -> String {
        match self {
            Self::One(s) => s.clone(),
            Self::Many(lines) => lines.join("\n"),
        }
    }
}

/// A unit of survey-outcome content queued for delivery at completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    /// Send a text message
    SendMessage { text: TextPayload },
    /// Send a file attachment
    SendFile { file_path: String },
}

/// One selectable answer to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub text: String,
    pub action: Action,
}

/// One survey question with its ordered answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Look up an answer by id
    pub fn answer(&self, answer_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }
}

/// Edge of the survey graph: taking `condition_answer_id` on
/// `from_question_id` leads to `to_question_id` (None = terminal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from_question_id: String,
    pub condition_answer_id: String,
    #[serde(default)]
    pub to_question_id: Option<String>,
}

/// A complete survey definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub premium_only: bool,
    pub questions: Vec<Question>,
    pub transitions: Vec<Transition>,
}

impl Survey {
    /// Look up a question by id (linear scan; graphs are small)
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Resolve the next question for (current question, chosen answer).
    ///
    /// Returns the first matching transition's target. `Some(None)` means an
    /// explicit terminal transition; a missing match also means terminal and
    /// is reported as `None` by [`Survey::next_question_id`].
    pub fn next_question_id(&self, from_question_id: &str, answer_id: &str) -> Option<&str> {
        self.transitions
            .iter()
            .find(|t| t.from_question_id == from_question_id && t.condition_answer_id == answer_id)
            .and_then(|t| t.to_question_id.as_deref())
    }

    /// Whether a tag is attached to this survey
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Summary row used when listing surveys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveySummary {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub premium_only: bool,
}

/// All surveys keyed by id, as persisted
///
/// BTreeMap keeps listing order stable across loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyCatalog {
    surveys: BTreeMap<String, Survey>,
}

impl SurveyCatalog {
    /// Look up a survey by id
    pub fn survey(&self, survey_id: &str) -> Option<&Survey> {
        self.surveys.get(survey_id)
    }

    /// Summaries of every survey
    pub fn summaries(&self) -> Vec<SurveySummary> {
        self.surveys
            .iter()
            .map(|(id, s)| SurveySummary {
                id: id.clone(),
                title: s.title.clone(),
                tags: s.tags.clone(),
                premium_only: s.premium_only,
            })
            .collect()
    }

    /// Summaries of surveys carrying the given tag
    pub fn summaries_by_tag(&self, tag: &str) -> Vec<SurveySummary> {
        self.surveys
            .iter()
            .filter(|(_, s)| s.has_tag(tag))
            .map(|(id, s)| SurveySummary {
                id: id.clone(),
                title: s.title.clone(),
                tags: s.tags.clone(),
                premium_only: s.premium_only,
            })
            .collect()
    }

    /// Summaries of surveys with the tag that a user on the given premium
    /// status may start (premium-only surveys are hidden from free users)
    pub fn summaries_for_user(&self, tag: &str, is_premium: bool) -> Vec<SurveySummary> {
        self.summaries_by_tag(tag)
            .into_iter()
            .filter(|s| !s.premium_only || is_premium)
            .collect()
    }

    /// Number of surveys in the catalog
    pub fn len(&self) -> usize {
        self.surveys.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty()
    }
}
