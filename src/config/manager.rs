use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::answer::DEFAULT_ENDPOINT;
use crate::paths;

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV: &str = "ASKBAR_ENDPOINT";

/// Settings in the `[askbar]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskbarConfig {
    /// URL of the answering endpoint.
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/askbar/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub askbar: AskbarConfig,
}

/// Where the effective endpoint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    CommandLine,
    Environment,
    ConfigFile,
    Default,
}

impl fmt::Display for EndpointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandLine => f.write_str("--endpoint"),
            Self::Environment => f.write_str(ENDPOINT_ENV),
            Self::ConfigFile => f.write_str("config file"),
            Self::Default => f.write_str("default"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub source: EndpointSource,
}

/// CLI overrides that take precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
}

/// Resolves the endpoint: CLI option, then `ASKBAR_ENDPOINT`, then the
/// config file, then the built-in default.
///
/// # Errors
///
/// Returns an error if the chosen endpoint is not an http(s) URL.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let env_endpoint = std::env::var(ENDPOINT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());

    let (endpoint, source) = if let Some(endpoint) = &options.endpoint {
        (endpoint.clone(), EndpointSource::CommandLine)
    } else if let Some(endpoint) = env_endpoint {
        (endpoint, EndpointSource::Environment)
    } else if let Some(endpoint) = &config_file.askbar.endpoint {
        (endpoint.clone(), EndpointSource::ConfigFile)
    } else {
        (DEFAULT_ENDPOINT.to_string(), EndpointSource::Default)
    };

    validate_endpoint(&endpoint).with_context(|| format!("Invalid endpoint (from {source})"))?;

    Ok(ResolvedConfig { endpoint, source })
}

/// Checks that `endpoint` is an absolute http or https URL.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint).with_context(|| format!("'{endpoint}' is not a valid URL"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "'{endpoint}' uses unsupported scheme '{}'\n\n\
             The answering endpoint must be an http:// or https:// URL",
            url.scheme()
        );
    }

    Ok(())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Configuration is stored at `$XDG_CONFIG_HOME/askbar/config.toml`
    /// or `~/.config/askbar/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, or an empty one if it is absent.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
