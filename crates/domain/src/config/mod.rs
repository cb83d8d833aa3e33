mod errors;
mod logging;
mod proxmox;
mod root;
mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use proxmox::ProxmoxConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
