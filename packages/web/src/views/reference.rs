//! Settings pages: countries with their states, genders and address types.

use dioxus::prelude::*;

use ui::views::{
    AddressTypeFormView, AddressTypesView, CountriesView, CountryFormView, GenderFormView,
    GendersView, StateFormView, StatesView,
};

use crate::Route;

#[component]
pub fn Countries() -> Element {
    let nav = use_navigator();

    rsx! {
        CountriesView {
            on_create: move |_| {
                nav.push(Route::CountryCreate {});
            },
            on_edit: move |id| {
                nav.push(Route::CountryEdit { id });
            },
            on_states: move |country_id| {
                nav.push(Route::States { country_id });
            },
        }
    }
}

#[component]
pub fn CountryCreate() -> Element {
    let nav = use_navigator();

    rsx! {
        CountryFormView {
            id: None,
            on_done: move |_| {
                nav.push(Route::Countries {});
            },
        }
    }
}

#[component]
pub fn CountryEdit(id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        CountryFormView {
            key: "{id}",
            id: Some(id),
            on_done: move |_| {
                nav.push(Route::Countries {});
            },
        }
    }
}

#[component]
pub fn States(country_id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        StatesView {
            key: "{country_id}",
            country_id,
            on_create: move |_| {
                nav.push(Route::StateCreate { country_id });
            },
            on_edit: move |state_id| {
                nav.push(Route::StateEdit { country_id, state_id });
            },
            on_back: move |_| {
                nav.push(Route::Countries {});
            },
        }
    }
}

#[component]
pub fn StateCreate(country_id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        StateFormView {
            country_id,
            state_id: None,
            on_done: move |_| {
                nav.push(Route::States { country_id });
            },
        }
    }
}

#[component]
pub fn StateEdit(country_id: i64, state_id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        StateFormView {
            key: "{state_id}",
            country_id,
            state_id: Some(state_id),
            on_done: move |_| {
                nav.push(Route::States { country_id });
            },
        }
    }
}

#[component]
pub fn Genders() -> Element {
    let nav = use_navigator();

    rsx! {
        GendersView {
            on_create: move |_| {
                nav.push(Route::GenderCreate {});
            },
            on_edit: move |id| {
                nav.push(Route::GenderEdit { id });
            },
        }
    }
}

#[component]
pub fn GenderCreate() -> Element {
    let nav = use_navigator();

    rsx! {
        GenderFormView {
            id: None,
            on_done: move |_| {
                nav.push(Route::Genders {});
            },
        }
    }
}

#[component]
pub fn GenderEdit(id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        GenderFormView {
            key: "{id}",
            id: Some(id),
            on_done: move |_| {
                nav.push(Route::Genders {});
            },
        }
    }
}

#[component]
pub fn AddressTypes() -> Element {
    let nav = use_navigator();

    rsx! {
        AddressTypesView {
            on_create: move |_| {
                nav.push(Route::AddressTypeCreate {});
            },
            on_edit: move |id| {
                nav.push(Route::AddressTypeEdit { id });
            },
        }
    }
}

#[component]
pub fn AddressTypeCreate() -> Element {
    let nav = use_navigator();

    rsx! {
        AddressTypeFormView {
            id: None,
            on_done: move |_| {
                nav.push(Route::AddressTypes {});
            },
        }
    }
}

#[component]
pub fn AddressTypeEdit(id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        AddressTypeFormView {
            key: "{id}",
            id: Some(id),
            on_done: move |_| {
                nav.push(Route::AddressTypes {});
            },
        }
    }
}
