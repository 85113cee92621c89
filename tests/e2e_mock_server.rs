//! E2E tests using the mock Dashboard server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use meraki_sdk::mock_server::{Fixtures, MockServer, MockState};
use meraki_sdk::{
    AdminTag, FirewallRule, FirewallRules, List, MerakiClient, MerakiError, Organization, Vlan,
};
use serde_json::json;

fn client_for(server: &MockServer) -> MerakiClient {
    MerakiClient::new("test-key", server.url(), true).unwrap()
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Organization Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_resolve_org_then_list_networks() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let org_id = meraki_sdk::get_org_by_name(&client, "Test Organization")
        .await
        .expect("Failed to look up organization")
        .expect("Organization should exist");
    assert_eq!(org_id, "1000");

    let networks = meraki_sdk::get_org_networks(&client, &org_id)
        .await
        .expect("Failed to list networks");
    assert_eq!(networks.len(), 1);
    assert_eq!(networks[0].name, "Main Office");

    let devices = meraki_sdk::get_network_devices(&client, &networks[0].id)
        .await
        .expect("Failed to list devices");
    assert_eq!(devices.len(), 2);
    assert!(devices.iter().any(|d| d.model.as_deref() == Some("MX67")));

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_org_name_is_none() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let org_id = meraki_sdk::get_org_by_name(&client, "No Such Org")
        .await
        .unwrap();
    assert!(org_id.is_none());

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_trait_matches_convenience_function() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let via_trait = Organization::list(&client, &()).await.unwrap();
    let via_fn = meraki_sdk::get_orgs(&client).await.unwrap();
    assert_eq!(via_trait, via_fn);

    server.shutdown().await;
}

// =============================================================================
// Provisioning Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_provision_branch_network_workflow() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // Step 1: create the network
    let network = meraki_sdk::create_network(&client, "1000", "Branch 7", vec!["branch".into()])
        .await
        .expect("Failed to create network");
    assert_eq!(network.organization_id.as_deref(), Some("1000"));
    assert_eq!(network.time_zone.as_deref(), Some("Europe/Stockholm"));

    // Step 2: VLANs must be enabled before adding one
    let premature = meraki_sdk::add_vlan(
        &client,
        &network.id,
        Vlan::new("20", "Data", "10.20.0.0/24", "10.20.0.1"),
    )
    .await;
    assert!(matches!(
        premature,
        Err(MerakiError::Request { status: 400, .. })
    ));

    let settings = meraki_sdk::enable_vlans(&client, &network.id).await.unwrap();
    assert!(settings.vlans_enabled);

    // Step 3: add and update a VLAN
    let vlan = meraki_sdk::add_vlan(
        &client,
        &network.id,
        Vlan::new("20", "Data", "10.20.0.0/24", "10.20.0.1"),
    )
    .await
    .expect("Failed to add VLAN");
    assert_eq!(vlan.network_id.as_deref(), Some(network.id.as_str()));

    let updated = meraki_sdk::update_vlan(&client, &network.id, "20", json!({ "name": "Data-2" }))
        .await
        .expect("Failed to update VLAN");
    assert_eq!(updated.name, "Data-2");
    assert_eq!(updated.subnet, "10.20.0.0/24");

    let vlans = meraki_sdk::get_vlans(&client, &network.id).await.unwrap();
    assert_eq!(vlans.len(), 1);
    assert_eq!(vlans[0].name, "Data-2");

    // The new network shows up in the organization listing
    let networks = meraki_sdk::get_org_networks(&client, "1000").await.unwrap();
    assert!(networks.iter().any(|n| n.id == network.id));

    server.shutdown().await;
}

#[tokio::test]
async fn test_duplicate_network_name_is_request_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let result = meraki_sdk::create_network(&client, "1000", "Main Office", vec![]).await;

    match result {
        Err(MerakiError::Request { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("already been taken"));
        }
        other => panic!("Expected Request error, got {other:?}"),
    }

    server.shutdown().await;
}

#[tokio::test]
async fn test_add_admin_and_webhook() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let admin = meraki_sdk::add_org_admin(
        &client,
        "1000",
        "noc@example.com",
        vec![AdminTag::new("branch", "read-only")],
        None,
    )
    .await
    .expect("Failed to add admin");
    assert_eq!(admin.name, "noc");
    assert_eq!(admin.org_access.as_deref(), Some("none"));
    assert_eq!(admin.tags, vec![AdminTag::new("branch", "read-only")]);

    let again = meraki_sdk::add_org_admin(&client, "1000", "noc@example.com", vec![], None).await;
    assert!(matches!(again, Err(MerakiError::Request { status: 400, .. })));

    let webhook = meraki_sdk::add_webhook(
        &client,
        "L_100",
        "Alerts",
        "https://hooks.example.com/meraki",
        "s3cret",
    )
    .await
    .expect("Failed to add webhook");
    assert_eq!(webhook.url, "https://hooks.example.com/meraki");
    assert_eq!(webhook.network_id.as_deref(), Some("L_100"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_firewall_rules_round_trip() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let initial = meraki_sdk::get_firewall_rules(&client, "L_100").await.unwrap();
    assert!(initial.custom_rules().is_empty());
    assert_eq!(initial.rules.len(), 1);

    let rules = FirewallRules {
        rules: vec![FirewallRule {
            comment: Some("Block telnet".to_string()),
            policy: "deny".to_string(),
            protocol: "tcp".to_string(),
            src_port: "Any".to_string(),
            src_cidr: "Any".to_string(),
            dest_port: "23".to_string(),
            dest_cidr: "Any".to_string(),
            syslog_enabled: false,
        }],
    };
    meraki_sdk::update_firewall_rules(&client, "L_100", rules)
        .await
        .expect("Failed to update firewall rules");

    let current = meraki_sdk::get_firewall_rules(&client, "L_100").await.unwrap();
    assert_eq!(current.custom_rules().len(), 1);
    assert_eq!(current.custom_rules()[0].dest_port, "23");

    server.shutdown().await;
}

#[tokio::test]
async fn test_alerts_and_s2s_vpn() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let alerts = json!({ "defaultDestinations": { "emails": ["noc@example.com"] } });
    meraki_sdk::update_alerts(&client, "L_100", &alerts)
        .await
        .expect("Failed to update alerts");
    let current = meraki_sdk::get_alerts(&client, "L_100").await.unwrap();
    assert_eq!(current, alerts);

    let vpn = json!({ "mode": "hub", "subnets": [] });
    let updated = meraki_sdk::update_s2s_vpn(&client, "L_100", &vpn).await.unwrap();
    assert_eq!(updated["mode"], "hub");

    let missing_mode = meraki_sdk::update_s2s_vpn(&client, "L_100", &json!({})).await;
    assert!(matches!(
        missing_mode,
        Err(MerakiError::Request { status: 400, .. })
    ));

    server.shutdown().await;
}

// =============================================================================
// Error Classification Tests
// =============================================================================

#[tokio::test]
async fn test_wrong_api_key_is_fatal() {
    let state = MockServer::default_state().with_required_api_key("real-key");
    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    let err = meraki_sdk::get_orgs(&client).await.unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(err.status(), Some(401));

    let good = MerakiClient::new("real-key", server.url(), true).unwrap();
    assert_eq!(meraki_sdk::get_orgs(&good).await.unwrap().len(), 2);

    server.shutdown().await;
}

#[tokio::test]
async fn test_rate_limit_is_fatal() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    server.state().write().await.forced_status = Some(429);

    let err = meraki_sdk::get_org_networks(&client, "1000").await.unwrap_err();
    assert!(matches!(err, MerakiError::Fatal { status: 429, .. }));

    server.state().write().await.forced_status = None;
    assert!(meraki_sdk::get_org_networks(&client, "1000").await.is_ok());

    server.shutdown().await;
}

#[tokio::test]
async fn test_server_error_is_not_fatal() {
    let state = MockState::new().with_forced_status(503);
    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    let err = meraki_sdk::get_orgs(&client).await.unwrap_err();
    assert!(matches!(err, MerakiError::Api { status: 503, .. }));
    assert!(!err.is_fatal());

    server.shutdown().await;
}

// =============================================================================
// Custom State Tests
// =============================================================================

#[tokio::test]
async fn test_custom_state_with_two_orgs_of_same_name() {
    let state = MockState::new()
        .with_organization(Fixtures::organization("1", "Lab"))
        .with_organization(Fixtures::organization("2", "Lab"));
    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    let org_id = meraki_sdk::get_org_by_name(&client, "Lab").await.unwrap();
    assert_eq!(org_id.as_deref(), Some("2"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_empty_server_returns_empty_lists() {
    let state = MockState::new()
        .with_organization(Fixtures::organization("1", "Empty"))
        .with_network(Fixtures::network("L_1", "1", "Bare"));
    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    let devices = meraki_sdk::get_network_devices(&client, "L_1").await.unwrap();
    assert!(devices.is_empty());

    let vlans = meraki_sdk::get_vlans(&client, "L_1").await.unwrap();
    assert!(vlans.is_empty());

    let missing = meraki_sdk::get_network_devices(&client, "L_404").await;
    assert!(matches!(missing, Err(MerakiError::Request { status: 404, .. })));

    server.shutdown().await;
}
