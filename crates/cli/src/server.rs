use hickory_server::ServerFuture;
use pve_dns_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

const TCP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    let tcp_listener = TcpListener::bind(socket_addr).await?;

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, TCP_REQUEST_TIMEOUT);

    info!(bind_address = %socket_addr, "DNS server ready");

    server.block_until_done().await?;
    Ok(())
}
