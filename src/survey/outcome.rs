//! Survey outcome execution
//!
//! Flattens the accumulated action queue into deliverable content: one
//! combined text message plus a batch of file attachments. A missing file
//! does not fail the batch; it is substituted with an inline placeholder so
//! the rest of the content still goes out.

use std::path::{Path, PathBuf};

use crate::models::Action;

/// Deliverable content produced from a finished survey's action queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyOutcome {
    /// Combined message text, if any non-blank text was queued
    pub text: Option<String>,
    /// Existing files to attach
    pub attachments: Vec<PathBuf>,
}

impl SurveyOutcome {
    /// True when the run produced neither text nor attachments. The caller
    /// must report this explicitly instead of staying silent.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.attachments.is_empty()
    }
}

/// Flatten an action queue into a [`SurveyOutcome`]
///
/// Text payloads are joined (list payloads newline-joined first), blank or
/// whitespace-only segments are dropped. File paths are checked against the
/// filesystem: existing files become attachments, missing ones become
/// placeholder lines in the text.
pub fn collect_outcome(actions: &[Action]) -> SurveyOutcome {
    collect_outcome_with(actions, |path| path.exists())
}

/// [`collect_outcome`] with an injectable existence check (for tests)
pub fn collect_outcome_with<F>(actions: &[Action], file_exists: F) -> SurveyOutcome
where
    F: Fn(&Path) -> bool,
{
    let mut segments: Vec<String> = Vec::new();
    let mut attachments: Vec<PathBuf> = Vec::new();

    for action in actions {
        match action {
            Action::SendMessage { text } => {
                let joined = text.join();
                if !joined.trim().is_empty() {
                    segments.push(joined);
                }
            }
            Action::SendFile { file_path } => {
                if file_path.is_empty() {
                    continue;
                }
                let path = PathBuf::from(file_path);
                if file_exists(&path) {
                    attachments.push(path);
                } else {
                    segments.push(format!("[Файл не найден: {}]", file_path));
                }
            }
        }
    }

    let text = if segments.is_empty() {
        None
    } else {
        Some(segments.join("\n\n"))
    };

    SurveyOutcome { text, attachments }
}
