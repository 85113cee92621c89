//! Create trait for adding entities under a parent.

use async_trait::async_trait;

use crate::client::MerakiClient;
use crate::error::Result;

/// Create a new entity under a parent scope.
///
/// The scope is the parent the entity lives in (an organization id for
/// networks and admins, a network id for webhooks and VLANs).
///
/// # Example
///
/// ```ignore
/// use meraki_sdk::{MerakiClient, Network, NewNetwork, Create};
///
/// let client = MerakiClient::from_env()?;
/// let network = Network::create(
///     &client,
///     "549236",
///     NewNetwork::appliance("Branch 12", vec!["branch".to_string()]),
/// ).await?;
/// ```
#[async_trait]
pub trait Create: Sized + Send {
    /// Identifier of the parent (e.g. `str` organization id).
    type Scope: ?Sized + Sync;

    /// Request body for the new entity.
    type Params: Send + Sync;

    /// Create the entity and return the API's representation of it.
    ///
    /// A 200/201 response is logged at INFO with an entity-specific message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn create(client: &MerakiClient, scope: &Self::Scope, params: Self::Params)
        -> Result<Self>;
}
