use anyhow::Result;

use crate::chat::ChatRepl;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

pub struct ChatOptions {
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_resolved_config(options.endpoint)?;
    ChatRepl::new(config).run().await
}

/// Merges the CLI endpoint with the environment and config file.
pub fn load_resolved_config(endpoint: Option<String>) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    resolve_config(&ResolveOptions { endpoint }, &file_config)
}
