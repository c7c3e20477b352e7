//! Shared UI for the address admin: list and form pages per entity, the
//! navigation chrome, and the contexts (config, auth, activity log) they
//! read from.

pub mod components;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LoginButton, LogoutButton, UserAvatar};

mod client;
pub use client::{make_client, use_api};

mod config;
pub use config::{use_admin_config, ConfigProvider};

pub mod debounce;

mod navbar;
pub use navbar::{NavSection, TopNavBar, APP_TITLE};

pub mod paged_list;
pub use paged_list::{use_paged_list, AfterDelete, DeletePolicy, PagedList};

pub mod save;

mod settings_sidebar;
pub use settings_sidebar::{SettingsSection, SettingsSidebar};
