//! Organization admin model.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{log_created, segment, MerakiClient};
use crate::error::{MerakiError, Result};
use crate::traits::Create;

/// Organization-level access granted to admins created by [`add_org_admin`].
pub const DEFAULT_ORG_ACCESS: &str = "none";

/// A Dashboard administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// Admin ID.
    pub id: String,

    pub name: String,

    pub email: String,

    /// Organization-wide privilege ("full", "read-only", "enterprise" or "none").
    #[serde(default)]
    pub org_access: Option<String>,

    /// Tag-scoped privileges.
    #[serde(default)]
    pub tags: Vec<AdminTag>,

    /// Account status (e.g., "ok", "pending").
    #[serde(default)]
    pub account_status: Option<String>,

    #[serde(default)]
    pub two_factor_auth_enabled: bool,

    #[serde(default)]
    pub has_api_key: bool,

    /// Last time the admin was active.
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
}

/// A tag-scoped admin privilege.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminTag {
    /// Network tag the privilege applies to.
    pub tag: String,
    /// Access level ("full", "read-only", "guest-ambassador" or "monitor-only").
    pub access: String,
}

impl AdminTag {
    pub fn new(tag: impl Into<String>, access: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            access: access.into(),
        }
    }
}

/// Request body for creating an admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub org_access: String,
    pub tags: Vec<AdminTag>,
}

impl NewAdmin {
    /// A tag-scoped admin with no organization-wide access.
    ///
    /// When `name` is `None` the local part of `email` is used.
    pub fn new(email: impl Into<String>, tags: Vec<AdminTag>, name: Option<String>) -> Self {
        let email = email.into();
        let name = name.unwrap_or_else(|| default_name(&email).to_string());
        Self {
            name,
            email,
            org_access: DEFAULT_ORG_ACCESS.to_string(),
            tags,
        }
    }
}

/// The part of an email address before the `@`.
fn default_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[async_trait]
impl Create for Admin {
    type Scope = str; // Organization ID
    type Params = NewAdmin;

    #[tracing::instrument(skip(client))]
    async fn create(client: &MerakiClient, org_id: &str, params: NewAdmin) -> Result<Self> {
        if !params.email.contains('@') {
            return Err(MerakiError::InvalidInput(format!(
                "'{}' is not an email address",
                params.email
            )));
        }

        let path = format!("organizations/{}/admins", segment(org_id));
        let response = client.post(&path, &params).await?;
        log_created(
            &response,
            "UserCreated",
            format_args!("User {} - {} created", params.name, params.email),
        );
        response.json().await.map_err(MerakiError::Http)
    }
}

/// Add an admin to an organization.
///
/// The admin gets no organization-wide access; `tags` decide what they can
/// manage. `name` defaults to the local part of `email`.
pub async fn add_org_admin(
    client: &MerakiClient,
    org_id: &str,
    email: &str,
    tags: Vec<AdminTag>,
    name: Option<String>,
) -> Result<Admin> {
    Admin::create(client, org_id, NewAdmin::new(email, tags, name)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_admin_defaults_name_from_email() {
        let admin = NewAdmin::new("jane.doe@example.com", vec![], None);
        assert_eq!(admin.name, "jane.doe");
        assert_eq!(admin.org_access, "none");
    }

    #[test]
    fn test_new_admin_explicit_name() {
        let admin = NewAdmin::new("jd@example.com", vec![], Some("Jane Doe".to_string()));
        assert_eq!(admin.name, "Jane Doe");
    }

    #[test]
    fn test_new_admin_body() {
        let admin = NewAdmin::new(
            "ops@example.com",
            vec![AdminTag::new("west", "read-only")],
            None,
        );
        let json = serde_json::to_value(&admin).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "ops",
                "email": "ops@example.com",
                "orgAccess": "none",
                "tags": [{ "tag": "west", "access": "read-only" }]
            })
        );
    }

    #[test]
    fn test_admin_deserialize() {
        let json = r#"{
            "id": "212406",
            "name": "Miles Meraki",
            "email": "miles@meraki.com",
            "orgAccess": "none",
            "accountStatus": "ok",
            "twoFactorAuthEnabled": false,
            "hasApiKey": true,
            "lastActive": "2024-03-05T18:22:41Z",
            "tags": [{ "tag": "west", "access": "read-only" }],
            "networks": [],
            "authenticationMethod": "Email"
        }"#;

        let admin: Admin = serde_json::from_str(json).unwrap();
        assert_eq!(admin.id, "212406");
        assert!(admin.has_api_key);
        assert_eq!(admin.tags[0].tag, "west");
        assert!(admin.last_active.is_some());
    }
}
