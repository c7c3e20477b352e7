use dioxus::prelude::*;

use crate::auth::UserAvatar;
use crate::icons::{FaCircleInfo, FaGear, FaHouse};
use crate::{ActivityLogToggle, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

pub const APP_TITLE: &str = "AI Addresses";

/// Top-level areas reachable from the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Settings,
    About,
}

impl NavSection {
    pub const ALL: [NavSection; 3] = [NavSection::Home, NavSection::Settings, NavSection::About];

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Settings => "Settings",
            NavSection::About => "About",
        }
    }
}

fn nav_icon(section: NavSection) -> Element {
    match section {
        NavSection::Home => rsx! { Icon { icon: FaHouse, width: 14, height: 14 } },
        NavSection::Settings => rsx! { Icon { icon: FaGear, width: 14, height: 14 } },
        NavSection::About => rsx! { Icon { icon: FaCircleInfo, width: 14, height: 14 } },
    }
}

#[component]
pub fn TopNavBar(active: NavSection, on_navigate: EventHandler<NavSection>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-title", "{APP_TITLE}" }
            div {
                class: "navbar-links",
                for section in NavSection::ALL {
                    button {
                        class: if section == active { "navbar-link active" } else { "navbar-link" },
                        onclick: move |_| on_navigate.call(section),
                        {nav_icon(section)}
                        span { "{section.label()}" }
                    }
                }
            }
            div {
                class: "navbar-actions",
                ActivityLogToggle {}
                UserAvatar {}
            }
        }
    }
}
