//! Mock Meraki Dashboard API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Dashboard
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server maintains state across requests,
//! enabling realistic workflow testing (create a network, enable VLANs, add
//! a VLAN, read it back).
//!
//! # Example
//!
//! ```ignore
//! use meraki_sdk::mock_server::MockServer;
//! use meraki_sdk::MerakiClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = MerakiClient::new("test-key", server.url(), true).unwrap();
//!
//!     // Server comes with default fixtures
//!     let org_id = meraki_sdk::get_org_by_name(&client, "Test Organization").await.unwrap();
//!     assert_eq!(org_id.as_deref(), Some("1000"));
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::{MockError, MockState};
