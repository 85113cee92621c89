//! Trait definitions for Meraki operations.
//!
//! Each entity type implements the traits it supports, encapsulating
//! endpoint paths and request bodies in the implementations.

mod create;
mod list;
mod update;

pub use create::Create;
pub use list::List;
pub use update::Update;
