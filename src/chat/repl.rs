use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Text};
use tracing::debug;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::session::ChatSession;
use super::ui;
use super::view::TerminalView;
use crate::answer::AnswerClient;
use crate::config::ResolvedConfig;

/// Interactive prompt loop around a terminal-backed [`ChatSession`].
pub struct ChatRepl {
    config: ResolvedConfig,
    session: ChatSession<AnswerClient, TerminalView>,
}

impl ChatRepl {
    pub fn new(config: ResolvedConfig) -> Self {
        let client = AnswerClient::new(config.endpoint.clone());
        Self {
            config,
            session: ChatSession::new(client, TerminalView::new()),
        }
    }

    pub async fn run(&self) -> Result<()> {
        ui::print_header(&self.config);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let line = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask a question, /help for commands, Ctrl+C to quit")
                .prompt();

            match line {
                Ok(line) => match parse_input(&line) {
                    Input::Question(text) => {
                        let outcome = self.session.submit(text).await;
                        debug!(?outcome, "submit finished");
                        println!();
                    }
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                },
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => ui::print_history(&self.session.transcript()),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }
}
