use dioxus::prelude::*;

/// Reference-data sections under Settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsSection {
    Country,
    AddressType,
    Gender,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 3] = [
        SettingsSection::Country,
        SettingsSection::AddressType,
        SettingsSection::Gender,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsSection::Country => "Country",
            SettingsSection::AddressType => "Address Type",
            SettingsSection::Gender => "Gender",
        }
    }
}

#[component]
pub fn SettingsSidebar(
    active: Option<SettingsSection>,
    on_navigate: EventHandler<SettingsSection>,
) -> Element {
    rsx! {
        aside {
            class: "settings-sidebar",
            h2 { class: "settings-sidebar-title", "Settings" }
            ul {
                for section in SettingsSection::ALL {
                    li {
                        button {
                            class: if Some(section) == active { "settings-link active" } else { "settings-link" },
                            onclick: move |_| on_navigate.call(section),
                            "{section.label()}"
                        }
                    }
                }
            }
        }
    }
}
