use serde::{Deserialize, Serialize};

use crate::allow_filter::AllowFilter;
use crate::errors::DomainError;

/// Upstream cluster API access and address filtering.
///
/// `api_url`, `token_id` and `token_secret` are required; the allow
/// lists are optional and empty means unrestricted.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProxmoxConfig {
    /// Base URL of the cluster API, e.g. `https://pve.local:8006/api2/json/`
    #[serde(default)]
    pub api_url: String,

    /// API token id, e.g. `dns@pve!resolver`
    #[serde(default)]
    pub token_id: String,

    /// API token secret
    #[serde(default)]
    pub token_secret: String,

    /// Skip TLS certificate validation (opt-in, off by default)
    #[serde(default)]
    pub insecure: bool,

    /// Interface-name allow-list; empty = all interfaces
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// CIDR allow-list; empty = all networks
    #[serde(default)]
    pub networks: Vec<String>,
}

impl ProxmoxConfig {
    /// The client appends endpoint paths directly, so the base URL must
    /// end with a slash.
    pub fn normalize_api_url(&mut self) {
        if !self.api_url.is_empty() && !self.api_url.ends_with('/') {
            self.api_url.push('/');
        }
    }

    /// Build the allow filter from the configured lists, parsing CIDR
    /// strings eagerly.
    pub fn allow_filter(&self) -> Result<AllowFilter, DomainError> {
        AllowFilter::new(self.interfaces.clone(), &self.networks)
    }
}
