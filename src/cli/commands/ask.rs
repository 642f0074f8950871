use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Read};

use super::chat::load_resolved_config;
use crate::answer::AnswerClient;
use crate::chat::{ChatSession, SubmitOutcome, TerminalView};
use crate::error::FailureKind;

const MAX_QUESTION_SIZE: u64 = 64 * 1024;

pub struct AskOptions {
    pub endpoint: Option<String>,
    pub question: Vec<String>,
}

/// Sends one question and prints the exchange.
///
/// Returns the process exit code: success only when an answer arrived.
pub async fn run_ask(options: AskOptions) -> Result<i32> {
    let config = load_resolved_config(options.endpoint)?;
    let question = if options.question.is_empty() {
        read_stdin_question()?
    } else {
        options.question.join(" ")
    };

    let session = ChatSession::new(AnswerClient::new(config.endpoint), TerminalView::new());
    let outcome = session.submit(&question).await;

    if outcome == SubmitOutcome::Ignored {
        eprintln!("Error: Question is empty");
    }
    Ok(exit_code(outcome))
}

fn read_stdin_question() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut question = String::new();
    stdin
        .lock()
        .take(MAX_QUESTION_SIZE)
        .read_to_string(&mut question)
        .context("Failed to read question from stdin")?;
    Ok(question)
}

const fn exit_code(outcome: SubmitOutcome) -> i32 {
    match outcome {
        SubmitOutcome::Answered => exitcode::OK,
        SubmitOutcome::Ignored => exitcode::USAGE,
        SubmitOutcome::Rejected | SubmitOutcome::Failed(FailureKind::Application) => {
            exitcode::SOFTWARE
        }
        SubmitOutcome::Failed(FailureKind::Transport) => exitcode::UNAVAILABLE,
    }
}
