//! Sign-in through the hosting platform's identity provider.
//!
//! Login and logout are plain browser redirects; the app never sees
//! credentials. Who is signed in comes from [`ME_URL`].

mod session;

pub use session::{token_from_session, SESSION_TOKEN_KEY};

use crate::error::ApiError;
use crate::models::{ClientPrincipal, LoggedInUser};
use crate::transport::{ApiRequest, Method, Transport};

pub const LOGOUT_URL: &str = "/.auth/logout";
pub const ME_URL: &str = "/.auth/me";

/// Redirect target that starts a login with `provider`.
pub fn login_url(provider: &str) -> String {
    let provider = provider.trim();
    let provider = if provider.is_empty() { "aad" } else { provider };
    format!("/.auth/login/{provider}")
}

/// Ask the platform who is signed in. `Ok(None)` for anonymous visitors.
///
/// `transport` must point at the site origin, not the REST API.
pub async fn fetch_current_user<T: Transport>(
    transport: &T,
) -> Result<Option<ClientPrincipal>, ApiError> {
    let response = transport.send(ApiRequest::new(Method::Get, ME_URL)).await?;
    if !response.is_success() {
        return Err(ApiError::from_response(response.status, &response.body));
    }
    let user: LoggedInUser =
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(user.client_principal)
}
