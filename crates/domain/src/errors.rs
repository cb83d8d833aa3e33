use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Transport error calling {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Upstream API returned status {status} for {url}")]
    Upstream { status: u16, url: String },

    #[error("Failed to decode upstream response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),
}
