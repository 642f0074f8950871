use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "askbar")]
#[command(about = "Chat with a question-answering endpoint from the terminal")]
#[command(version)]
pub struct Args {
    /// Answering endpoint URL (overrides ASKBAR_ENDPOINT and the config file)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Print debug logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session (default)
    Chat,
    /// Ask a single question and print the exchange
    Ask {
        /// The question; read from stdin when omitted
        question: Vec<String>,
    },
    /// Set the default answering endpoint
    Configure {
        /// Show the current configuration instead of editing it
        #[arg(long)]
        show: bool,
    },
}
