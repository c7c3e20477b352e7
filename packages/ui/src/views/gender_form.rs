use api::extract_error_message;
use dioxus::prelude::*;
use domain::{CodeNameDraft, Gender};

use crate::activity_log::use_activity_log;
use crate::client::use_api;
use crate::components::FormShell;
use crate::save::save_entity;

use super::country_form::CodeNameFields;

/// Create (`id: None`) or edit a gender.
#[component]
pub fn GenderFormView(id: Option<i64>, on_done: EventHandler<()>) -> Element {
    let client = use_api();
    let mut activity_log = use_activity_log();
    let mut draft = use_signal(CodeNameDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            let Some(id) = id else { return };
            match client.service::<Gender>().get_by_id(id).await {
                Ok(gender) => draft.set(CodeNameDraft::from_gender(&gender)),
                Err(e) => error.set(Some(extract_error_message(&e, "Failed to load gender."))),
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
            let result = save_entity(&client, id, &current.to_gender(id), &mut activity_log).await;
            saving.set(false);
            match result {
                Ok(()) => on_done.call(()),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let title = if id.is_some() { "Edit gender" } else { "Create gender" };

    rsx! {
        FormShell {
            title: "{title}",
            error: error(),
            saving: saving(),
            on_submit: handle_submit,
            on_cancel: move |_| on_done.call(()),
            CodeNameFields { draft }
        }
    }
}
