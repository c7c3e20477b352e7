//! # API crate: REST client and server functions for the address admin
//!
//! Everything the UI needs to talk to the outside world lives here: a typed
//! client for the address-book REST API, the identity-provider helpers, and
//! the few Dioxus server functions the host process exposes itself.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`transport`] | - | The [`Transport`] seam and its reqwest implementation [`HttpTransport`] |
//! | [`memory`] | - | [`MemoryTransport`], a scripted transport for tests |
//! | [`client`] | - | [`ApiClient`]: bearer token, JSON encode/decode, central error logging |
//! | [`services`] | - | Per-entity CRUD + paged search, profile picture upload |
//! | [`bulk`] | - | [`delete_many`], sequential or concurrent multi-row delete |
//! | [`error`] | - | [`ApiError`] and [`extract_error_message`] |
//! | [`auth`] | - | Login/logout redirects, `/.auth/me`, session token |
//! | [`models`] | - | [`ClientPrincipal`] / [`LoggedInUser`] |
//! | [`settings`] | native only | Loads [`AdminConfig`] from `admin.toml` and the environment |
//!
//! ## Server functions exposed here
//!
//! Each is compiled twice: with real logic behind `#[cfg(feature = "server")]`
//! and as a client stub that forwards the call over HTTP.
//!
//! - `get_roles_for_user`: `GET /api/roles`
//! - `get_admin_config`: `GET /api/config`

use dioxus::prelude::*;

pub mod auth;
pub mod bulk;
pub mod client;
pub mod error;
pub mod memory;
pub mod models;
pub mod services;
#[cfg(not(target_arch = "wasm32"))]
pub mod settings;
pub mod transport;

pub use auth::{fetch_current_user, login_url, LOGOUT_URL, ME_URL};
pub use bulk::{delete_many, BulkMode};
pub use client::ApiClient;
pub use domain::AdminConfig;
pub use error::{extract_error_message, ApiError, ErrorMessageDto, DEFAULT_ERROR_MESSAGE};
pub use memory::MemoryTransport;
pub use models::{ClientPrincipal, LoggedInUser};
pub use services::{
    AddressService, AddressTypeService, CountryService, EntityService, GenderService,
    PersonService, StateService,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

/// Roles granted to every signed-in user.
pub const DEFAULT_ROLES: [&str; 2] = ["user", "admin"];

/// Roles for the current user.
#[cfg(feature = "server")]
#[get("/api/roles")]
pub async fn get_roles_for_user() -> Result<Vec<String>, ServerFnError> {
    Ok(DEFAULT_ROLES.iter().map(|r| r.to_string()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/roles")]
pub async fn get_roles_for_user() -> Result<Vec<String>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Effective front-end configuration of the host process.
#[cfg(feature = "server")]
#[get("/api/config")]
pub async fn get_admin_config() -> Result<AdminConfig, ServerFnError> {
    settings::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load admin settings");
        ServerFnError::new(e.to_string())
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/config")]
pub async fn get_admin_config() -> Result<AdminConfig, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
