use super::api::{AgentInterfaceList, ApiEnvelope, GuestDto, NodeDto};
use async_trait::async_trait;
use pve_dns_application::ports::InventorySource;
use pve_dns_domain::{ClusterNode, DomainError, Guest, NetworkInterface, ProxmoxConfig};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Formats the API token header value the way the cluster expects it.
pub fn auth_header(token_id: &str, token_secret: &str) -> String {
    format!("PVEAPIToken={}={}", token_id, token_secret)
}

/// Authenticated read-only client for the Proxmox VE cluster API.
///
/// Every call is a fresh round trip; there is no retry and no caching.
pub struct ProxmoxInventoryClient {
    http: reqwest::Client,
    api_url: String,
    auth: String,
}

impl ProxmoxInventoryClient {
    pub fn new(config: &ProxmoxConfig) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT);

        // Trust-all mode is an explicit opt-in for clusters running
        // self-signed certificates.
        if config.insecure {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|e| DomainError::Transport {
            url: config.api_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            auth: auth_header(&config.token_id, &config.token_secret),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let url = format!("{}{}", self.api_url, path);
        debug!(url = %url, "Querying cluster API");

        let response = self
            .http
            .get(&url)
            .header("Authorization", &self.auth)
            .send()
            .await
            .map_err(|e| DomainError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Upstream {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|e| DomainError::Transport {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| DomainError::Decode {
            url,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl InventorySource for ProxmoxInventoryClient {
    async fn list_nodes(&self) -> Result<Vec<ClusterNode>, DomainError> {
        let envelope: ApiEnvelope<Vec<NodeDto>> = self.get_json("nodes").await?;
        Ok(envelope.data.into_iter().map(ClusterNode::from).collect())
    }

    async fn list_guests(&self, node: &str) -> Result<Vec<Guest>, DomainError> {
        let envelope: ApiEnvelope<Vec<GuestDto>> =
            self.get_json(&format!("nodes/{}/qemu", node)).await?;
        Ok(envelope
            .data
            .into_iter()
            .map(|dto| dto.into_guest(node))
            .collect())
    }

    async fn guest_interfaces(
        &self,
        node: &str,
        vmid: u32,
    ) -> Result<Vec<NetworkInterface>, DomainError> {
        let envelope: ApiEnvelope<AgentInterfaceList> = self
            .get_json(&format!(
                "nodes/{}/qemu/{}/agent/network-get-interfaces",
                node, vmid
            ))
            .await?;
        Ok(envelope
            .data
            .result
            .into_iter()
            .map(NetworkInterface::from)
            .collect())
    }
}
