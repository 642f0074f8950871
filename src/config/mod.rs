mod manager;

pub use manager::{
    AskbarConfig, ConfigFile, ConfigManager, ENDPOINT_ENV, EndpointSource, ResolveOptions,
    ResolvedConfig, resolve_config, validate_endpoint,
};
