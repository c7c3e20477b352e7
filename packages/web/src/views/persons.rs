use dioxus::prelude::*;

use ui::views::{AddressFormView, AddressesView, PersonFormView, PersonsView};

use crate::Route;

#[component]
pub fn Persons() -> Element {
    let nav = use_navigator();

    rsx! {
        PersonsView {
            on_create: move |_| {
                nav.push(Route::PersonCreate {});
            },
            on_edit: move |id| {
                nav.push(Route::PersonEdit { id });
            },
            on_addresses: move |person_id| {
                nav.push(Route::Addresses { person_id });
            },
        }
    }
}

#[component]
pub fn PersonCreate() -> Element {
    let nav = use_navigator();

    rsx! {
        PersonFormView {
            id: None,
            on_done: move |_| {
                nav.push(Route::Persons {});
            },
        }
    }
}

#[component]
pub fn PersonEdit(id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        PersonFormView {
            key: "{id}",
            id: Some(id),
            on_done: move |_| {
                nav.push(Route::Persons {});
            },
        }
    }
}

#[component]
pub fn Addresses(person_id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        AddressesView {
            key: "{person_id}",
            person_id,
            on_create: move |_| {
                nav.push(Route::AddressCreate { person_id });
            },
            on_edit: move |address_id| {
                nav.push(Route::AddressEdit { person_id, address_id });
            },
            on_back: move |_| {
                nav.push(Route::Persons {});
            },
        }
    }
}

#[component]
pub fn AddressCreate(person_id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        AddressFormView {
            person_id,
            address_id: None,
            on_done: move |_| {
                nav.push(Route::Addresses { person_id });
            },
        }
    }
}

#[component]
pub fn AddressEdit(person_id: i64, address_id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        AddressFormView {
            key: "{address_id}",
            person_id,
            address_id: Some(address_id),
            on_done: move |_| {
                nav.push(Route::Addresses { person_id });
            },
        }
    }
}
