use api::extract_error_message;
use dioxus::prelude::*;
use domain::{Country, State, StateDraft};

use crate::activity_log::use_activity_log;
use crate::client::use_api;
use crate::components::{FormShell, Input, Label};
use crate::save::save_entity;

/// Create (`state_id: None`) or edit a state of `country_id`.
///
/// The country is fixed by the route; an edited state keeps the country it
/// was loaded with.
#[component]
pub fn StateFormView(
    country_id: i64,
    state_id: Option<i64>,
    on_done: EventHandler<()>,
) -> Element {
    let client = use_api();
    let mut activity_log = use_activity_log();
    let mut draft = use_signal(|| StateDraft::new(country_id));
    let mut country_name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match client.service::<Country>().get_by_id(country_id).await {
                Ok(country) => country_name.set(country.name),
                Err(e) => tracing::warn!("Failed to load country {}: {}", country_id, e),
            }
            let Some(state_id) = state_id else { return };
            match client.service::<State>().get_by_id(state_id).await {
                Ok(state) => draft.set(StateDraft::from_state(&state)),
                Err(e) => error.set(Some(extract_error_message(&e, "Failed to load state."))),
            }
        }
    });

    let handle_submit = move |_: ()| {
        let current = draft();
        if let Err(message) = current.validate() {
            error.set(Some(message));
            return;
        }
        let client = client.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let result =
                save_entity(&client, state_id, &current.to_state(state_id), &mut activity_log).await;
            saving.set(false);
            match result {
                Ok(()) => on_done.call(()),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let verb = if state_id.is_some() { "Edit" } else { "Create" };
    let country = country_name();
    let title = if country.is_empty() {
        format!("{verb} state")
    } else {
        format!("{verb} state of {country}")
    };
    let current = draft();

    rsx! {
        FormShell {
            title,
            error: error(),
            saving: saving(),
            on_submit: handle_submit,
            on_cancel: move |_| on_done.call(()),
            div {
                class: "form-field",
                Label { html_for: "code", "Code" }
                Input {
                    id: "code",
                    value: current.code,
                    oninput: move |evt: FormEvent| draft.write().code = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "name", "Name" }
                Input {
                    id: "name",
                    value: current.name,
                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                }
            }
        }
    }
}
