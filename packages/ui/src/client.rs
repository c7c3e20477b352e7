use api::{ApiClient, HttpTransport};
use dioxus::prelude::*;
use domain::AdminConfig;

use crate::auth::session_token;
use crate::config::use_admin_config;

/// REST client for the configured API, carrying the session token if any.
pub fn make_client(config: &AdminConfig) -> ApiClient<HttpTransport> {
    ApiClient::new(HttpTransport::new(config.api.base_url.clone())).with_token(session_token())
}

/// Client built from the current [`AdminConfig`] context.
pub fn use_api() -> ApiClient<HttpTransport> {
    let config = use_admin_config();
    let client = make_client(&config.peek());
    client
}
