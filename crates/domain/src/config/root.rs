use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::proxmox::ProxmoxConfig;
use super::server::ServerConfig;

/// Main configuration structure for PVE DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream cluster API and address filtering
    #[serde(default)]
    pub proxmox: ProxmoxConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pve-dns.toml in current directory
    /// 3. /etc/pve-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("pve-dns.toml").exists() {
            Self::from_file("pve-dns.toml")?
        } else if std::path::Path::new("/etc/pve-dns/config.toml").exists() {
            Self::from_file("/etc/pve-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.proxmox.normalize_api_url();
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// Missing credentials and malformed CIDR ranges are refused here,
    /// before any query is served.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.proxmox.api_url.is_empty() {
            return Err(ConfigError::Validation(
                "No cluster API URL configured".to_string(),
            ));
        }

        if self.proxmox.token_id.is_empty() || self.proxmox.token_secret.is_empty() {
            return Err(ConfigError::Validation(
                "Cluster API token id and secret are required".to_string(),
            ));
        }

        self.proxmox
            .allow_filter()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
