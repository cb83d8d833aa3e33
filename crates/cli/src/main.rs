use clap::Parser;
use pve_dns_application::use_cases::{AnswerQueryUseCase, ResolveGuestUseCase};
use pve_dns_domain::CliOverrides;
use pve_dns_infrastructure::dns::DnsServerHandler;
use pve_dns_infrastructure::proxmox::ProxmoxInventoryClient;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "pve-dns")]
#[command(version)]
#[command(about = "DNS server answering guest hostname queries from a Proxmox VE cluster")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting PVE DNS v{}", env!("CARGO_PKG_VERSION"));

    // Wire the resolution pipeline: cluster API client behind the
    // inventory port, allow filter built once from configuration.
    let allow_filter = config.proxmox.allow_filter()?;
    let inventory = Arc::new(ProxmoxInventoryClient::new(&config.proxmox)?);
    let resolver = Arc::new(ResolveGuestUseCase::new(inventory, allow_filter));
    let answer_query = Arc::new(AnswerQueryUseCase::new(resolver));
    let handler = DnsServerHandler::new(answer_query);

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    server::start_dns_server(dns_addr, handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
