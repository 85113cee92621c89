//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::MerakiClient;
use crate::error::Result;

/// List all entities under a parent scope.
///
/// The Dashboard endpoints wrapped here return the whole collection in
/// one response, so there is no paging.
///
/// # Example
///
/// ```ignore
/// use meraki_sdk::{MerakiClient, Network, Organization, List};
///
/// let client = MerakiClient::from_env()?;
/// let orgs = Organization::list(&client, &()).await?;
/// let networks = Network::list(&client, &orgs[0].id).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Identifier of the parent (`()` for top-level collections).
    type Scope: ?Sized + Sync;

    /// List every entity under `scope`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn list(client: &MerakiClient, scope: &Self::Scope) -> Result<Vec<Self>>;
}
