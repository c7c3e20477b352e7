use dioxus::prelude::*;

use crate::config::use_admin_config;
use crate::navbar::APP_TITLE;

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "development"
    } else {
        "production"
    }
}

#[component]
pub fn AboutView() -> Element {
    let config = use_admin_config();
    let base_url = config.read().api.base_url.clone();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "About" }
            p { class: "view-text", "{APP_TITLE} manages persons, their addresses and the reference data behind them." }
            dl {
                class: "about-details",
                dt { "Version" }
                dd { {env!("CARGO_PKG_VERSION")} }
                dt { "Build" }
                dd { "{build_profile()}" }
                dt { "API" }
                dd { "{base_url}" }
            }
        }
    }
}
