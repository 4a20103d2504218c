//! Survey navigation state machine
//!
//! Walks a survey graph forward and backward given user answers. All
//! transition functions take the state by value and return the new state, so
//! the session layer can do an atomic read-snapshot / compute / write-back
//! without this module knowing how state is stored.
//!
//! Lifecycle: `start` creates a [`NavigationState`], each `answer` either
//! continues with a new state or finishes with the accumulated action queue,
//! and the caller discards the state on completion or cancellation.

use serde::{Deserialize, Serialize};

use crate::error::{OtchetnikError, OtchetnikResult};
use crate::models::{Action, Survey};

/// One recorded answer: which answer was chosen on which question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedAnswer {
    pub question_id: String,
    pub answer_id: String,
}

/// Mutable per-session navigation state
///
/// Invariants: `current_question_id` always references a question in the
/// survey, and `question_history` holds at least one entry while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub survey_id: String,
    pub current_question_id: String,
    /// Answers in submission order
    pub answers: Vec<RecordedAnswer>,
    /// Visited question ids, used as an undo stack
    pub question_history: Vec<String>,
    /// Actions accumulated for execution at completion, submission order
    pub action_queue: Vec<Action>,
}

/// Result of starting a survey
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// The survey has no questions; nothing to run
    Empty,
    /// Navigation began at the survey's first question
    Started(NavigationState),
}

/// Result of answering the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Moved to the next question
    Continue(NavigationState),
    /// No transition matched: the survey is finished and the caller must
    /// execute the action queue and discard the state
    Finished { actions: Vec<Action> },
}

/// Result of a back-navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// Returned to the previous question
    Moved(NavigationState),
    /// Already at the first question; nothing was undone
    AtStart(NavigationState),
}

/// Whether a user may start this survey. Premium-only surveys are gated on
/// the user's premium status; evaluated before [`start`].
pub fn can_start(survey: &Survey, is_premium: bool) -> bool {
    !survey.premium_only || is_premium
}

/// Begin navigating a survey
pub fn start(survey_id: &str, survey: &Survey) -> StartOutcome {
    let Some(first) = survey.questions.first() else {
        return StartOutcome::Empty;
    };

    StartOutcome::Started(NavigationState {
        survey_id: survey_id.to_string(),
        current_question_id: first.id.clone(),
        answers: Vec::new(),
        question_history: vec![first.id.clone()],
        action_queue: Vec::new(),
    })
}

/// Apply an answer to the current question
///
/// # Errors
///
/// - [`OtchetnikError::StateCorruption`] if the current question id is not in
///   the graph (well-formed surveys never trigger this)
/// - [`OtchetnikError::InvalidInput`] if the answer id does not belong to the
///   current question (stale callback data)
pub fn answer(
    survey: &Survey,
    mut state: NavigationState,
    answer_id: &str,
) -> OtchetnikResult<Step> {
    let question = survey.question(&state.current_question_id).ok_or_else(|| {
        OtchetnikError::StateCorruption(format!(
            "current question {} is not in survey {}",
            state.current_question_id, state.survey_id
        ))
    })?;

    let chosen = question.answer(answer_id).ok_or_else(|| {
        OtchetnikError::InvalidInput(format!(
            "answer {} is not valid for question {}",
            answer_id, question.id
        ))
    })?;

    state.answers.push(RecordedAnswer {
        question_id: question.id.clone(),
        answer_id: chosen.id.clone(),
    });
    state.action_queue.push(chosen.action.clone());

    match survey.next_question_id(&question.id, answer_id) {
        Some(next_id) => {
            state.current_question_id = next_id.to_string();
            state.question_history.push(next_id.to_string());
            Ok(Step::Continue(state))
        }
        None => Ok(Step::Finished {
            actions: state.action_queue,
        }),
    }
}

/// Undo the most recent answer
///
/// Pops exactly one history entry, one recorded answer and one queued action,
/// restoring the state produced before the last [`answer`] call. With only
/// the initial question on the stack this is a guarded no-op.
pub fn back(mut state: NavigationState) -> BackOutcome {
    if state.question_history.len() < 2 {
        return BackOutcome::AtStart(state);
    }

    state.question_history.pop();
    state.answers.pop();
    state.action_queue.pop();

    // History is non-empty after the length guard above
    state.current_question_id = state
        .question_history
        .last()
        .expect("history holds at least the initial question")
        .clone();

    BackOutcome::Moved(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_question_survey() -> Survey {
        serde_json::from_str(
            r#"{
              "title": "Тест",
              "tags": [],
              "premium_only": false,
              "questions": [
                {"id": "q1", "text": "Вопрос 1", "answers": [
                  {"id": "a1", "text": "Да",
                   "action": {"type": "send_message", "payload": {"text": "ответ 1"}}}
                ]},
                {"id": "q2", "text": "Вопрос 2", "answers": [
                  {"id": "a2", "text": "Нет",
                   "action": {"type": "send_message", "payload": {"text": "ответ 2"}}}
                ]}
              ],
              "transitions": [
                {"from_question_id": "q1", "condition_answer_id": "a1", "to_question_id": "q2"}
              ]
            }"#,
        )
        .unwrap()
    }

    fn started(survey: &Survey) -> NavigationState {
        match start("test", survey) {
            StartOutcome::Started(state) => state,
            StartOutcome::Empty => panic!("survey unexpectedly empty"),
        }
    }

    #[test]
    fn test_start_at_first_question() {
        let survey = two_question_survey();
        let state = started(&survey);

        assert_eq!(state.current_question_id, "q1");
        assert_eq!(state.question_history, vec!["q1"]);
        assert!(state.answers.is_empty());
        assert!(state.action_queue.is_empty());
    }

    #[test]
    fn test_start_empty_survey() {
        let survey = Survey {
            title: "Пустой".into(),
            tags: vec![],
            premium_only: false,
            questions: vec![],
            transitions: vec![],
        };
        assert_eq!(start("empty", &survey), StartOutcome::Empty);
    }

    #[test]
    fn test_two_question_walk_to_terminal() {
        let survey = two_question_survey();
        let state = started(&survey);

        // answer(a1) -> Active(q2)
        let state = match answer(&survey, state, "a1").unwrap() {
            Step::Continue(s) => s,
            Step::Finished { .. } => panic!("expected continue"),
        };
        assert_eq!(state.current_question_id, "q2");
        assert_eq!(state.question_history, vec!["q1", "q2"]);
        assert_eq!(state.action_queue.len(), 1);

        // answer(a2) has no transition -> terminal with both actions
        match answer(&survey, state, "a2").unwrap() {
            Step::Finished { actions } => assert_eq!(actions.len(), 2),
            Step::Continue(_) => panic!("expected finish"),
        }
    }

    #[test]
    fn test_invalid_answer_rejected() {
        let survey = two_question_survey();
        let state = started(&survey);

        let err = answer(&survey, state, "a99").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_corrupt_state_detected() {
        let survey = two_question_survey();
        let mut state = started(&survey);
        state.current_question_id = "q99".into();

        let err = answer(&survey, state, "a1").unwrap_err();
        assert!(err.is_state_corruption());
    }

    #[test]
    fn test_back_restores_prior_state() {
        let survey = two_question_survey();
        let before = started(&survey);

        let after = match answer(&survey, before.clone(), "a1").unwrap() {
            Step::Continue(s) => s,
            Step::Finished { .. } => panic!("expected continue"),
        };

        match back(after) {
            BackOutcome::Moved(restored) => assert_eq!(restored, before),
            BackOutcome::AtStart(_) => panic!("expected move"),
        }
    }

    #[test]
    fn test_back_at_first_question_is_noop() {
        let survey = two_question_survey();
        let state = started(&survey);

        match back(state.clone()) {
            BackOutcome::AtStart(unchanged) => assert_eq!(unchanged, state),
            BackOutcome::Moved(_) => panic!("expected guarded no-op"),
        }
    }

    #[test]
    fn test_premium_gate() {
        let mut survey = two_question_survey();
        assert!(can_start(&survey, false));

        survey.premium_only = true;
        assert!(!can_start(&survey, false));
        assert!(can_start(&survey, true));
    }
}
