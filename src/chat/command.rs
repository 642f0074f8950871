use inquire::autocompletion::{Autocomplete, Replacement};

/// Slash commands understood by the REPL, with their help text.
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show the answering endpoint"),
    ("/help", "Show available commands"),
    ("/history", "Reprint the conversation so far"),
    ("/quit", "Leave the chat"),
];

/// Suggests slash commands once the line starts with `/`.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(Vec::new());
        }

        Ok(SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion
            .and_then(|s| s.split_whitespace().next().map(str::to_string)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    History,
    Quit,
    Unknown(String),
}

/// One line read from the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    /// Anything that is not a slash command, passed to the session as-is.
    Question(&'a str),
    Command(SlashCommand),
}

pub fn parse_input(line: &str) -> Input<'_> {
    line.trim_start()
        .strip_prefix('/')
        .map_or(Input::Question(line), |rest| {
            Input::Command(parse_slash_command(rest))
        })
}

fn parse_slash_command(rest: &str) -> SlashCommand {
    let mut words = rest.split_whitespace();

    match words.next() {
        Some("config") => SlashCommand::Config,
        Some("help" | "?") => SlashCommand::Help,
        Some("history") => SlashCommand::History,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        first => SlashCommand::Unknown(
            first.into_iter().chain(words).collect::<Vec<_>>().join(" "),
        ),
    }
}
