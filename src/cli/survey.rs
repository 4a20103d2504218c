//! Survey CLI commands
//!
//! `survey run` walks a survey interactively on stdin: answers are chosen by
//! number, "назад" undoes the last answer, "отмена" cancels the run.

use std::io::{self, BufRead, Write};

use clap::Subcommand;

use crate::error::{OtchetnikError, OtchetnikResult};
use crate::services::{
    AnswerResult, BackResult, ConsoleSink, InMemorySessionStore, QuestionView, SessionKey,
    StartResult, SurveyService,
};
use crate::storage::Storage;

/// Survey subcommands
#[derive(Subcommand)]
pub enum SurveyCommands {
    /// List available surveys
    List {
        /// Only surveys carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Run a survey interactively
    Run {
        /// Survey id
        id: String,
        /// Treat the user as premium
        #[arg(long)]
        premium: bool,
    },
}

/// Handle a survey command
pub fn handle_survey_command(storage: &Storage, cmd: SurveyCommands) -> OtchetnikResult<()> {
    let sessions = InMemorySessionStore::new();
    let service = SurveyService::new(&storage.surveys, &sessions);

    match cmd {
        SurveyCommands::List { tag } => {
            let summaries = service.list(tag.as_deref())?;
            if summaries.is_empty() {
                println!("Опросники не найдены.");
                return Ok(());
            }
            for summary in summaries {
                let premium_mark = if summary.premium_only { " [премиум]" } else { "" };
                println!("{}  {}{}", summary.id, summary.title, premium_mark);
            }
        }
        SurveyCommands::Run { id, premium } => {
            run_interactive(&service, &id, premium)?;
        }
    }

    Ok(())
}

/// The CLI runs one local session
fn cli_key() -> SessionKey {
    SessionKey::new(0, 0)
}

fn run_interactive(
    service: &SurveyService<'_, InMemorySessionStore>,
    survey_id: &str,
    premium: bool,
) -> OtchetnikResult<()> {
    let key = cli_key();

    let mut view = match service.start(key, survey_id, premium)? {
        StartResult::PremiumRequired => {
            println!("Для доступа к этому опроснику нужен премиум-тариф.");
            return Ok(());
        }
        StartResult::EmptySurvey => {
            println!("Опросник пуст.");
            return Ok(());
        }
        StartResult::Question(view) => view,
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_question(&view);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            service.cancel(key)?;
            println!("Опрос прерван.");
            return Ok(());
        };
        let input = line?.trim().to_lowercase();

        match input.as_str() {
            "отмена" | "cancel" | "q" => {
                service.cancel(key)?;
                println!("Опрос прерван.");
                return Ok(());
            }
            "назад" | "back" => match service.back(key)? {
                BackResult::Question(prev) => view = prev,
                BackResult::AtStart => println!("Невозможно вернуться к предыдущему вопросу."),
            },
            _ => {
                let Some(answer_id) = resolve_answer(&view, &input) else {
                    println!("Выберите вариант ответа из предложенных.");
                    continue;
                };

                match service.answer(key, &answer_id) {
                    Ok(AnswerResult::Question(next)) => view = next,
                    Ok(AnswerResult::Completed(outcome)) => {
                        let sink = ConsoleSink;
                        if !service.deliver(&sink, 0, &outcome)? {
                            println!("Все рекомендации пустые.");
                        }
                        return Ok(());
                    }
                    Err(err @ OtchetnikError::InvalidInput(_)) => {
                        println!("{}", err);
                    }
                    Err(err) => return Err(err),
                }
            }
        }
    }
}

fn print_question(view: &QuestionView) {
    println!("\n{}", view.question.text);
    for (i, answer) in view.question.answers.iter().enumerate() {
        println!("  {}. {}", i + 1, answer.text);
    }
    if view.can_go_back {
        println!("  (назад — предыдущий вопрос, отмена — прервать)");
    } else {
        println!("  (отмена — прервать)");
    }
}

/// Map a numeric choice onto the answer id at that position
fn resolve_answer(view: &QuestionView, input: &str) -> Option<String> {
    let choice: usize = input.parse().ok()?;
    view.question
        .answers
        .get(choice.checked_sub(1)?)
        .map(|a| a.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn view() -> QuestionView {
        QuestionView {
            question: serde_json::from_str::<Question>(
                r#"{"id": "q1", "text": "?", "answers": [
                  {"id": "a1", "text": "Да",
                   "action": {"type": "send_message", "payload": {"text": "x"}}},
                  {"id": "a2", "text": "Нет",
                   "action": {"type": "send_message", "payload": {"text": "y"}}}
                ]}"#,
            )
            .unwrap(),
            can_go_back: false,
        }
    }

    #[test]
    fn test_resolve_answer_by_number() {
        let view = view();
        assert_eq!(resolve_answer(&view, "1").as_deref(), Some("a1"));
        assert_eq!(resolve_answer(&view, "2").as_deref(), Some("a2"));
        assert_eq!(resolve_answer(&view, "3"), None);
        assert_eq!(resolve_answer(&view, "0"), None);
        assert_eq!(resolve_answer(&view, "да"), None);
    }
}
