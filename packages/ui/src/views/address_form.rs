use api::extract_error_message;
use dioxus::prelude::*;
use domain::{
    Address, AddressDraft, AddressType, Country, PagedQuery, SearchQuery, State, StateFilter,
};

use crate::activity_log::use_activity_log;
use crate::client::use_api;
use crate::components::{FormShell, Input, Label};
use crate::save::save_entity;

/// States offered for one country are fetched in a single page this large.
const STATE_PAGE_SIZE: u32 = 100;

fn states_query(country_id: i64) -> SearchQuery<StateFilter> {
    SearchQuery::new(
        PagedQuery::new(STATE_PAGE_SIZE),
        StateFilter {
            country_id: Some(country_id),
        },
    )
}

/// Create (`address_id: None`) or edit an address of `person_id`.
#[component]
pub fn AddressFormView(
    person_id: i64,
    address_id: Option<i64>,
    on_done: EventHandler<()>,
) -> Element {
    let client = use_api();
    let mut activity_log = use_activity_log();
    let mut draft = use_signal(|| AddressDraft::new(person_id));
    let mut address_types = use_signal(Vec::<AddressType>::new);
    let mut countries = use_signal(Vec::<Country>::new);
    let mut states = use_signal(Vec::<State>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match client.service::<AddressType>().get_all().await {
                Ok(list) => address_types.set(list),
                Err(e) => error.set(Some(extract_error_message(&e, "Failed to load address types."))),
            }
            match client.service::<Country>().get_all().await {
                Ok(list) => countries.set(list),
                Err(e) => error.set(Some(extract_error_message(&e, "Failed to load countries."))),
            }
            if let Some(id) = address_id {
                match client.service::<Address>().get_by_id(id).await {
                    Ok(address) => draft.set(AddressDraft::from_address(&address)),
                    Err(e) => error.set(Some(extract_error_message(&e, "Failed to load address."))),
                }
            }
        }
    });

    let selected_country = use_memo(move || draft.read().selected_country_id);
    let states_client = client.clone();
    let _states = use_resource(move || {
        let client = states_client.clone();
        let country_id = selected_country();
        async move {
            let Some(country_id) = country_id else {
                states.set(Vec::new());
                return;
            };
            match client.service::<State>().search(&states_query(country_id)).await {
                Ok(page) => states.set(page.items),
                Err(e) => {
                    states.set(Vec::new());
                    error.set(Some(extract_error_message(&e, "Failed to load states.")));
                }
            }
        }
    });

    let submit_client = client.clone();
    let handle_submit = move |_: ()| {
        let current = draft();
        if let Err(message) = current.validate() {
            error.set(Some(message));
            return;
        }
        let client = submit_client.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let address = current.to_address(address_id);
            let result = save_entity(&client, address_id, &address, &mut activity_log).await;
            saving.set(false);
            match result {
                Ok(()) => on_done.call(()),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let current = draft();
    let title = if address_id.is_some() { "Edit address" } else { "Create address" };
    let type_options = address_types();
    let country_options = countries();
    let state_options = states();
    let selected = |id: Option<i64>| id.map(|id| id.to_string()).unwrap_or_default();
    let selected_type = selected(current.address_type_id);
    let selected_country_value = selected(current.selected_country_id);
    let selected_state = selected(current.state_id);

    rsx! {
        FormShell {
            title: "{title}",
            error: error(),
            saving: saving(),
            on_submit: handle_submit,
            on_cancel: move |_| on_done.call(()),

            div {
                class: "form-field",
                Label { html_for: "street", "Street" }
                Input {
                    id: "street",
                    value: current.street.clone(),
                    oninput: move |evt: FormEvent| draft.write().street = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "city", "City" }
                Input {
                    id: "city",
                    value: current.city.clone(),
                    oninput: move |evt: FormEvent| draft.write().city = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "postal-code", "Postal code" }
                Input {
                    id: "postal-code",
                    value: current.postal_code.clone(),
                    oninput: move |evt: FormEvent| draft.write().postal_code = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "country", "Country" }
                select {
                    id: "country",
                    class: "input",
                    value: "{selected_country_value}",
                    onchange: move |evt: FormEvent| draft.write().select_country(evt.value().parse().ok()),
                    option { value: "", "Select country" }
                    for country in country_options.iter().filter(|c| c.id.is_some()) {
                        option {
                            value: "{country.id.unwrap_or_default()}",
                            selected: country.id == current.selected_country_id,
                            "{country.name}"
                        }
                    }
                }
            }
            div {
                class: "form-field",
                Label { html_for: "state", "State" }
                select {
                    id: "state",
                    class: "input",
                    value: "{selected_state}",
                    disabled: current.selected_country_id.is_none(),
                    onchange: move |evt: FormEvent| {
                        let state_id = evt.value().parse().ok();
                        let loaded = states.peek().clone();
                        draft.write().select_state(state_id, &loaded);
                    },
                    option { value: "", "Select state" }
                    for state in state_options.iter().filter(|s| s.id.is_some()) {
                        option {
                            value: "{state.id.unwrap_or_default()}",
                            selected: state.id == current.state_id,
                            "{state.name}"
                        }
                    }
                }
            }
            div {
                class: "form-field",
                Label { html_for: "address-type", "Address type" }
                select {
                    id: "address-type",
                    class: "input",
                    value: "{selected_type}",
                    onchange: move |evt: FormEvent| draft.write().address_type_id = evt.value().parse().ok(),
                    option { value: "", "Select address type" }
                    for address_type in type_options.iter().filter(|t| t.id.is_some()) {
                        option {
                            value: "{address_type.id.unwrap_or_default()}",
                            selected: address_type.id == current.address_type_id,
                            "{address_type.name}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_query() {
        let params = states_query(3).to_params();
        assert_eq!(
            params,
            vec![
                ("sortDescending", "false".to_string()),
                ("pageNumber", "1".to_string()),
                ("pageSize", "100".to_string()),
                ("countryId", "3".to_string()),
            ]
        );
    }
}
