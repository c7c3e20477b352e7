use dioxus::prelude::*;

use ui::{ActivityLogPanel, NavSection, SettingsSection, SettingsSidebar, TopNavBar};

use crate::Route;

fn nav_section(route: &Route) -> NavSection {
    match route {
        Route::About {} => NavSection::About,
        route if settings_section(route).is_some() => NavSection::Settings,
        Route::SettingsHome {} => NavSection::Settings,
        _ => NavSection::Home,
    }
}

fn settings_section(route: &Route) -> Option<SettingsSection> {
    match route {
        Route::Countries {}
        | Route::CountryCreate {}
        | Route::CountryEdit { .. }
        | Route::States { .. }
        | Route::StateCreate { .. }
        | Route::StateEdit { .. } => Some(SettingsSection::Country),
        Route::Genders {} | Route::GenderCreate {} | Route::GenderEdit { .. } => {
            Some(SettingsSection::Gender)
        }
        Route::AddressTypes {} | Route::AddressTypeCreate {} | Route::AddressTypeEdit { .. } => {
            Some(SettingsSection::AddressType)
        }
        _ => None,
    }
}

fn section_route(section: SettingsSection) -> Route {
    match section {
        SettingsSection::Country => Route::Countries {},
        SettingsSection::AddressType => Route::AddressTypes {},
        SettingsSection::Gender => Route::Genders {},
    }
}

/// Navbar, page outlet and the activity log panel.
#[component]
pub fn AppShell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    let on_navigate = move |section: NavSection| {
        let target = match section {
            NavSection::Home => Route::Persons {},
            NavSection::Settings => Route::Countries {},
            NavSection::About => Route::About {},
        };
        nav.push(target);
    };

    rsx! {
        div {
            class: "app-shell",
            TopNavBar { active: nav_section(&route), on_navigate }
            div {
                class: "app-body",
                main {
                    class: "app-main",
                    Outlet::<Route> {}
                }
            }
            ActivityLogPanel {}
        }
    }
}

#[component]
pub fn SettingsLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        div {
            class: "settings-layout",
            SettingsSidebar {
                active: settings_section(&route),
                on_navigate: move |section| {
                    nav.push(section_route(section));
                },
            }
            div {
                class: "settings-content",
                Outlet::<Route> {}
            }
        }
    }
}

/// `/settings` opens the first section.
#[component]
pub fn SettingsHome() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Countries {});
    rsx! {}
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Page not found" }
            p { class: "view-text", "Nothing lives at /{path}." }
            Link { to: Route::Persons {}, "Back to persons" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_section_for_routes() {
        assert_eq!(nav_section(&Route::Persons {}), NavSection::Home);
        assert_eq!(nav_section(&Route::AddressEdit { person_id: 1, address_id: 2 }), NavSection::Home);
        assert_eq!(nav_section(&Route::States { country_id: 3 }), NavSection::Settings);
        assert_eq!(nav_section(&Route::About {}), NavSection::About);
    }

    #[test]
    fn test_settings_section_for_routes() {
        assert_eq!(
            settings_section(&Route::StateEdit { country_id: 1, state_id: 2 }),
            Some(SettingsSection::Country)
        );
        assert_eq!(settings_section(&Route::GenderCreate {}), Some(SettingsSection::Gender));
        assert_eq!(
            settings_section(&Route::AddressTypeEdit { id: 4 }),
            Some(SettingsSection::AddressType)
        );
        assert_eq!(settings_section(&Route::Persons {}), None);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::PersonEdit { id: 7 }.to_string(), "/persons/7/edit");
        assert_eq!(
            Route::StateCreate { country_id: 2 }.to_string(),
            "/settings/country/2/states/create"
        );
        assert_eq!(Route::AddressTypes {}.to_string(), "/settings/address-type");
    }
}
