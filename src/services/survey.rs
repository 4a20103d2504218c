//! Survey service
//!
//! Orchestrates survey navigation against the session store. Every mutating
//! operation follows read-snapshot / compute / write-back: the navigator
//! works on state values, and the snapshot is only written after the
//! transition succeeds.

use crate::error::{OtchetnikError, OtchetnikResult};
use crate::models::{Question, SurveySummary};
use crate::services::notify::{NotificationSink, SubscriptionLookup, UserDirectory};
use crate::services::session::{SessionKey, SessionStore};
use crate::storage::SurveyRepository;
use crate::survey::{self, BackOutcome, StartOutcome, Step, SurveyOutcome};

/// Result of a start request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartResult {
    /// The survey is premium-only and the user is not premium
    PremiumRequired,
    /// The survey has no questions
    EmptySurvey,
    /// Navigation began; show this question
    Question(QuestionView),
}

/// Result of answering the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerResult {
    /// Moved on; show this question
    Question(QuestionView),
    /// The survey finished; the session was discarded
    Completed(SurveyOutcome),
}

/// Result of a back request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackResult {
    /// Returned to the previous question
    Question(QuestionView),
    /// Already at the first question
    AtStart,
}

/// A question ready for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub question: Question,
    /// False on the first question: back navigation is unavailable
    pub can_go_back: bool,
}

/// Business logic for survey navigation
pub struct SurveyService<'a, S: SessionStore> {
    surveys: &'a SurveyRepository,
    sessions: &'a S,
}

impl<'a, S: SessionStore> SurveyService<'a, S> {
    pub fn new(surveys: &'a SurveyRepository, sessions: &'a S) -> Self {
        Self { surveys, sessions }
    }

    /// List all surveys, or only those carrying a tag
    pub fn list(&self, tag: Option<&str>) -> OtchetnikResult<Vec<SurveySummary>> {
        let catalog = self.surveys.catalog()?;
        Ok(match tag {
            Some(tag) => catalog.summaries_by_tag(tag),
            None => catalog.summaries(),
        })
    }

    /// List surveys with a tag that the given user may start
    pub fn list_for_user(&self, tag: &str, is_premium: bool) -> OtchetnikResult<Vec<SurveySummary>> {
        Ok(self.surveys.catalog()?.summaries_for_user(tag, is_premium))
    }

    /// [`SurveyService::list_for_user`] with the premium status resolved
    /// through the host's subscription lookup: any active tariff counts
    pub fn list_for_subscriber(
        &self,
        tag: &str,
        subscriptions: &dyn SubscriptionLookup,
        user_id: i64,
    ) -> OtchetnikResult<Vec<SurveySummary>> {
        let is_premium = subscriptions.active_tariff(user_id)?.is_some();
        self.list_for_user(tag, is_premium)
    }

    /// [`SurveyService::start`] with the premium status resolved through the
    /// host's user directory
    pub fn start_for_user(
        &self,
        key: SessionKey,
        survey_id: &str,
        users: &dyn UserDirectory,
        user_id: i64,
    ) -> OtchetnikResult<StartResult> {
        let is_premium = users.is_premium(user_id)?;
        self.start(key, survey_id, is_premium)
    }

    /// Start a survey for a session
    ///
    /// The premium gate is evaluated before any state is created. Any
    /// previous session state for the key is replaced.
    pub fn start(
        &self,
        key: SessionKey,
        survey_id: &str,
        is_premium: bool,
    ) -> OtchetnikResult<StartResult> {
        let survey = self.surveys.survey(survey_id)?;

        if !survey::can_start(&survey, is_premium) {
            return Ok(StartResult::PremiumRequired);
        }

        match survey::start(survey_id, &survey) {
            StartOutcome::Empty => Ok(StartResult::EmptySurvey),
            StartOutcome::Started(state) => {
                let view = self.view(&survey, &state.current_question_id, false)?;
                self.sessions.store(key, state)?;
                Ok(StartResult::Question(view))
            }
        }
    }

    /// Answer the current question of the active session
    ///
    /// On completion the action queue is flattened into a [`SurveyOutcome`]
    /// and the session is discarded. A corrupted session is reset before the
    /// error propagates.
    pub fn answer(&self, key: SessionKey, answer_id: &str) -> OtchetnikResult<AnswerResult> {
        let state = self.active_state(key)?;
        let survey = self.surveys.survey(&state.survey_id)?;

        match survey::answer(&survey, state, answer_id) {
            Ok(Step::Continue(state)) => {
                let view = self.view(&survey, &state.current_question_id, true)?;
                self.sessions.store(key, state)?;
                Ok(AnswerResult::Question(view))
            }
            Ok(Step::Finished { actions }) => {
                self.sessions.clear(key)?;
                Ok(AnswerResult::Completed(survey::collect_outcome(&actions)))
            }
            Err(err) => {
                if err.is_state_corruption() {
                    self.sessions.clear(key)?;
                }
                Err(err)
            }
        }
    }

    /// Undo the most recent answer of the active session
    pub fn back(&self, key: SessionKey) -> OtchetnikResult<BackResult> {
        let state = self.active_state(key)?;
        let survey = self.surveys.survey(&state.survey_id)?;

        match survey::back(state) {
            BackOutcome::Moved(state) => {
                let can_go_back = state.question_history.len() > 1;
                let view = self.view(&survey, &state.current_question_id, can_go_back)?;
                self.sessions.store(key, state)?;
                Ok(BackResult::Question(view))
            }
            BackOutcome::AtStart(state) => {
                self.sessions.store(key, state)?;
                Ok(BackResult::AtStart)
            }
        }
    }

    /// Cancel the active session, discarding its state
    pub fn cancel(&self, key: SessionKey) -> OtchetnikResult<()> {
        self.sessions.clear(key)
    }

    /// Push a completed survey's outcome through the delivery sink.
    /// Returns false when the outcome carried no content, so the caller can
    /// tell the user explicitly instead of staying silent.
    pub fn deliver(
        &self,
        sink: &dyn NotificationSink,
        user_id: i64,
        outcome: &SurveyOutcome,
    ) -> OtchetnikResult<bool> {
        if outcome.is_empty() {
            return Ok(false);
        }
        sink.send(user_id, outcome.text.as_deref(), &outcome.attachments)?;
        Ok(true)
    }

    fn active_state(&self, key: SessionKey) -> OtchetnikResult<crate::survey::NavigationState> {
        self.sessions.load(key)?.ok_or(OtchetnikError::NotFound {
            entity_type: "Active survey session",
            identifier: String::new(),
        })
    }

    fn view(
        &self,
        survey: &crate::models::Survey,
        question_id: &str,
        can_go_back: bool,
    ) -> OtchetnikResult<QuestionView> {
        let question = survey.question(question_id).ok_or_else(|| {
            OtchetnikError::StateCorruption(format!("question {} is not in the graph", question_id))
        })?;
        Ok(QuestionView {
            question: question.clone(),
            can_go_back,
        })
    }
}
