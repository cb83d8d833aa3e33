use pve_dns_domain::{CliOverrides, Config, ConfigError};
use tracing_subscriber::EnvFilter;

/// Load and validate configuration; a missing API URL, missing token
/// credentials or a malformed CIDR refuses startup here.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
