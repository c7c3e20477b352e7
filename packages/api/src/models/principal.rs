//! # Signed-in user, as reported by `/.auth/me`
//!
//! The hosting platform answers `/.auth/me` with
//! `{ "clientPrincipal": { identityProvider, userId, userDetails, userRoles } }`,
//! where `clientPrincipal` is `null` for anonymous visitors. [`LoggedInUser`]
//! is that envelope and [`ClientPrincipal`] the user inside it.
//!
//! `userDetails` is usually an email address; [`ClientPrincipal::username`]
//! keeps the part before the `@` for the navbar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPrincipal {
    pub identity_provider: String,
    pub user_id: String,
    pub user_details: String,
    #[serde(default)]
    pub user_roles: Vec<String>,
}

impl ClientPrincipal {
    /// Fixed principal used when `auth.dev_mode` is on.
    pub fn dev() -> Self {
        Self {
            identity_provider: "dev".to_string(),
            user_id: "dev-user-id".to_string(),
            user_details: "devuser@example.com".to_string(),
            user_roles: vec!["authenticated".to_string()],
        }
    }

    /// `userDetails` up to the first `@`.
    pub fn username(&self) -> &str {
        self.user_details
            .split('@')
            .next()
            .unwrap_or(&self.user_details)
    }

    /// Uppercased first letter of the username, for the avatar bubble.
    pub fn initial(&self) -> String {
        self.username()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.user_roles.iter().any(|r| r == role)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    #[serde(default)]
    pub client_principal: Option<ClientPrincipal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signed_in() {
        let user: LoggedInUser = serde_json::from_str(
            r#"{"clientPrincipal":{"identityProvider":"aad","userId":"42",
                "userDetails":"jane.doe@contoso.com","userRoles":["anonymous","authenticated"]}}"#,
        )
        .unwrap();
        let principal = user.client_principal.unwrap();
        assert_eq!(principal.username(), "jane.doe");
        assert_eq!(principal.initial(), "J");
        assert!(principal.has_role("authenticated"));
    }

    #[test]
    fn test_parse_anonymous() {
        let user: LoggedInUser = serde_json::from_str(r#"{"clientPrincipal":null}"#).unwrap();
        assert!(user.client_principal.is_none());
        let user: LoggedInUser = serde_json::from_str("{}").unwrap();
        assert!(user.client_principal.is_none());
    }

    #[test]
    fn test_dev_principal() {
        let dev = ClientPrincipal::dev();
        assert_eq!(dev.username(), "devuser");
        assert_eq!(dev.initial(), "D");
        assert_eq!(dev.identity_provider, "dev");
    }

    #[test]
    fn test_username_without_at() {
        let mut principal = ClientPrincipal::dev();
        principal.user_details = "github-user".into();
        assert_eq!(principal.username(), "github-user");
        principal.user_details = String::new();
        assert_eq!(principal.initial(), "?");
    }
}
