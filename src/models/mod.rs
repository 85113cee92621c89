//! Meraki Dashboard API model types.

mod admin;
mod appliance;
mod device;
mod network;
mod organization;
mod webhook;

pub use admin::*;
pub use appliance::*;
pub use device::*;
pub use network::*;
pub use organization::*;
pub use webhook::*;
