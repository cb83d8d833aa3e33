use pve_dns_application::ports::InventorySource;
use pve_dns_domain::{DomainError, ProxmoxConfig};
use pve_dns_infrastructure::proxmox::ProxmoxInventoryClient;

mod helpers;
use helpers::{refused_addr, MockApiServer};

fn config(api_url: String) -> ProxmoxConfig {
    ProxmoxConfig {
        api_url,
        token_id: "dns@pve!resolver".to_string(),
        token_secret: "s3cret".to_string(),
        insecure: false,
        interfaces: vec![],
        networks: vec![],
    }
}

#[tokio::test]
async fn test_list_nodes_success() {
    let server = MockApiServer::start(
        200,
        r#"{"data": [{"node": "pve1", "status": "online"}, {"node": "pve2", "status": "online"}]}"#,
    )
    .await
    .unwrap();

    let client = ProxmoxInventoryClient::new(&config(server.url())).unwrap();
    let nodes = client.list_nodes().await.unwrap();

    let names: Vec<_> = nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["pve1", "pve2"]);
}

#[tokio::test]
async fn test_list_guests_success() {
    let server = MockApiServer::start(
        200,
        r#"{"data": [{"vmid": 100, "name": "db", "status": "running"}]}"#,
    )
    .await
    .unwrap();

    let client = ProxmoxInventoryClient::new(&config(server.url())).unwrap();
    let guests = client.list_guests("pve1").await.unwrap();

    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0].node, "pve1");
    assert_eq!(guests[0].vmid, 100);
    assert_eq!(guests[0].name, "db");
}

#[tokio::test]
async fn test_non_success_status_maps_to_upstream_error() {
    let server = MockApiServer::start(500, r#"{"data": null}"#).await.unwrap();

    let client = ProxmoxInventoryClient::new(&config(server.url())).unwrap();
    let err = client.list_nodes().await.unwrap_err();

    assert!(matches!(err, DomainError::Upstream { status: 500, .. }));
}

#[tokio::test]
async fn test_unauthorized_maps_to_upstream_error() {
    let server = MockApiServer::start(401, "").await.unwrap();

    let client = ProxmoxInventoryClient::new(&config(server.url())).unwrap();
    let err = client.guest_interfaces("pve1", 100).await.unwrap_err();

    assert!(matches!(err, DomainError::Upstream { status: 401, .. }));
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode_error() {
    let server = MockApiServer::start(200, r#"{"data": "not-a-list"}"#).await.unwrap();

    let client = ProxmoxInventoryClient::new(&config(server.url())).unwrap();
    let err = client.list_nodes().await.unwrap_err();

    assert!(matches!(err, DomainError::Decode { .. }));
}

#[tokio::test]
async fn test_connection_failure_maps_to_transport_error() {
    let addr = refused_addr().await.unwrap();

    let client =
        ProxmoxInventoryClient::new(&config(format!("http://{}/api2/json/", addr))).unwrap();
    let err = client.list_nodes().await.unwrap_err();

    assert!(matches!(err, DomainError::Transport { .. }));
}
