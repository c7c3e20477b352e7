//! Authentication context and the navbar user menu.
//!
//! Identity comes from the hosting platform (`/.auth/me`); login and logout
//! are full-page redirects. In dev mode a fixed principal is used instead.

use api::ClientPrincipal;
use dioxus::prelude::*;

use crate::config::use_admin_config;
use crate::Icon;
use crate::icons::FaUser;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub principal: Option<ClientPrincipal>,
    /// Roles granted by the host, empty until known.
    pub roles: Vec<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            principal: None,
            roles: Vec::new(),
            loading: true,
        }
    }
}

const ADMIN_ROLE: &str = "admin";

impl AuthState {
    /// Admin through either the host's role list or the principal's own roles.
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ADMIN_ROLE)
            || self
                .principal
                .as_ref()
                .is_some_and(|p| p.has_role(ADMIN_ROLE))
    }
}

pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Bearer token the identity provider left in `sessionStorage`.
#[cfg(target_arch = "wasm32")]
pub fn session_token() -> Option<String> {
    let storage = web_sys::window()?.session_storage().ok()??;
    api::auth::token_from_session(storage.get_item(api::auth::SESSION_TOKEN_KEY).ok()?)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session_token() -> Option<String> {
    None
}

/// Transport pointed at the site origin, where `/.auth/*` lives.
#[cfg(target_arch = "wasm32")]
fn site_transport() -> Option<api::HttpTransport> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(api::HttpTransport::new(origin))
}

#[cfg(not(target_arch = "wasm32"))]
fn site_transport() -> Option<api::HttpTransport> {
    None
}

fn redirect(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("Redirect to {} is only available in the browser", url);
}

/// Resolves the signed-in user once and provides [`AuthState`] as context.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_admin_config();
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || async move {
        let principal = if config.peek().auth.dev_mode {
            Some(ClientPrincipal::dev())
        } else if let Some(transport) = site_transport() {
            match api::fetch_current_user(&transport).await {
                Ok(principal) => principal,
                Err(e) => {
                    tracing::error!("Failed to fetch user info: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let roles = if principal.is_some() {
            api::get_roles_for_user().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to fetch roles: {}", e);
                Vec::new()
            })
        } else {
            Vec::new()
        };

        auth_state.set(AuthState {
            principal,
            roles,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

#[component]
pub fn LoginButton(
    #[props(default = "Login".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let config = use_admin_config();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| redirect(&api::login_url(&config.peek().auth.provider)),
            "{label}"
        }
    }
}

#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                auth_state.set(AuthState {
                    loading: false,
                    ..AuthState::default()
                });
                redirect(api::LOGOUT_URL);
            },
            "{label}"
        }
    }
}

/// Initial-letter avatar with a dropdown of the user's details, or a login
/// button for anonymous visitors.
#[component]
pub fn UserAvatar() -> Element {
    let auth = use_auth();
    let mut open = use_signal(|| false);

    let state = auth();
    if state.loading {
        return rsx! {
            span { class: "user-avatar placeholder", Icon { icon: FaUser, width: 14, height: 14 } }
        };
    }

    let Some(ref principal) = state.principal else {
        return rsx! {
            LoginButton { class: "btn btn-outline" }
        };
    };

    let is_admin = state.is_admin();
    let username = principal.username().to_string();
    let initial = principal.initial();
    let roles = state.roles.join(", ");

    rsx! {
        div {
            class: "user-menu",
            button {
                class: "user-avatar",
                title: "{username}",
                onclick: move |_| open.toggle(),
                "{initial}"
            }
            if open() {
                div {
                    class: "user-menu-dropdown",
                    div {
                        class: "user-menu-name",
                        "{username}"
                        if is_admin {
                            span { class: "user-menu-badge", "Admin" }
                        }
                    }
                    div { class: "user-menu-detail", "{principal.user_details}" }
                    div { class: "user-menu-detail", "Provider: {principal.identity_provider}" }
                    if !roles.is_empty() {
                        div { class: "user-menu-detail", "Roles: {roles}" }
                    }
                    LogoutButton { class: "btn btn-outline w-full" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin_from_either_source() {
        let mut state = AuthState {
            principal: Some(ClientPrincipal::dev()),
            roles: vec!["user".to_string()],
            loading: false,
        };
        assert!(!state.is_admin());

        state.roles.push("admin".to_string());
        assert!(state.is_admin());

        state.roles.clear();
        if let Some(principal) = state.principal.as_mut() {
            principal.user_roles.push("admin".to_string());
        }
        assert!(state.is_admin());

        assert!(!AuthState::default().is_admin());
    }
}
