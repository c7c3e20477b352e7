use api::extract_error_message;
use dioxus::prelude::*;
use domain::{AddressType, AddressTypeDraft};

use crate::activity_log::use_activity_log;
use crate::client::use_api;
use crate::components::{FormShell, Input, Label};
use crate::save::save_entity;

#[component]
pub fn AddressTypeFormView(id: Option<i64>, on_done: EventHandler<()>) -> Element {
    let client = use_api();
    let mut activity_log = use_activity_log();
    let mut draft = use_signal(AddressTypeDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            let Some(id) = id else { return };
            match client.service::<AddressType>().get_by_id(id).await {
                Ok(address_type) => draft.set(AddressTypeDraft::from_address_type(&address_type)),
                Err(e) => error.set(Some(extract_error_message(&e, "Failed to load address type."))),
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
            let address_type = current.to_address_type(id);
            let result = save_entity(&client, id, &address_type, &mut activity_log).await;
            saving.set(false);
            match result {
                Ok(()) => on_done.call(()),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let title = if id.is_some() { "Edit address type" } else { "Create address type" };
    let name = draft.read().name.clone();

    rsx! {
        FormShell {
            title: "{title}",
            error: error(),
            saving: saving(),
            on_submit: handle_submit,
            on_cancel: move |_| on_done.call(()),
            div {
                class: "form-field",
                Label { html_for: "name", "Name" }
                Input {
                    id: "name",
                    value: name,
                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                }
            }
        }
    }
}
