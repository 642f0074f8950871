use anyhow::Result;
use clap::Parser;

use askbar::cli::commands::{ask, chat, configure};
use askbar::cli::{Args, Command};
use askbar::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    match args.command {
        None | Some(Command::Chat) => {
            chat::run_chat(chat::ChatOptions {
                endpoint: args.endpoint,
            })
            .await?;
        }
        Some(Command::Ask { question }) => {
            let code = ask::run_ask(ask::AskOptions {
                endpoint: args.endpoint,
                question,
            })
            .await?;
            if code != exitcode::OK {
                std::process::exit(code);
            }
        }
        Some(Command::Configure { show }) => {
            if show {
                configure::show_config(args.endpoint)?;
            } else {
                configure::run_configure()?;
            }
        }
    }

    Ok(())
}
