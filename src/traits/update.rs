//! Update trait for replacing or patching settings.

use async_trait::async_trait;

use crate::client::MerakiClient;
use crate::error::Result;

/// Apply a PUT to an existing entity or settings object.
///
/// `Id` addresses the target: a network id for network-wide settings, a
/// [`VlanRef`](crate::VlanRef) for a single VLAN. `Params` is the body,
/// either a typed struct or a partial `serde_json::Value`.
///
/// # Example
///
/// ```ignore
/// use meraki_sdk::{MerakiClient, VlanSettings, Update};
///
/// let client = MerakiClient::from_env()?;
/// let settings = VlanSettings::update(
///     &client,
///     "L_646829496481105433".to_string(),
///     VlanSettings { vlans_enabled: true },
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Sized + Send {
    /// Address of the target.
    type Id: Send;

    /// PUT body.
    type Params: Send;

    /// Send the update and decode the API's view of the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is rejected locally, the request fails
    /// or the API answers with a non-success status.
    async fn update(client: &MerakiClient, id: Self::Id, params: Self::Params) -> Result<Self>;
}
