//! Front-end configuration, fetched once from the host.

use dioxus::prelude::*;
use domain::AdminConfig;

pub fn use_admin_config() -> Signal<AdminConfig> {
    use_context::<Signal<AdminConfig>>()
}

/// Loads [`AdminConfig`] from the `/api/config` server function and provides
/// it as context. Children render once it is known; when the host cannot
/// answer, built-in defaults are used.
#[component]
pub fn ConfigProvider(children: Element) -> Element {
    let mut config = use_context_provider(|| Signal::new(AdminConfig::default()));
    let mut loaded = use_signal(|| false);

    let _ = use_resource(move || async move {
        match api::get_admin_config().await {
            Ok(remote) => {
                tracing::info!(base_url = %remote.api.base_url, "Loaded admin config");
                config.set(remote);
            }
            Err(e) => {
                tracing::warn!("Using default admin config: {}", e);
            }
        }
        loaded.set(true);
    });

    if !loaded() {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }

    rsx! {
        {children}
    }
}
