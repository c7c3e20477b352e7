use api::extract_error_message;
use dioxus::prelude::*;
use domain::forms::today_string;
use domain::{Gender, Person, PersonDraft};

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::client::use_api;
use crate::components::{FormShell, Input, Label, ProfilePicture};
use crate::save::save_entity;

/// Create (`id: None`) or edit a person.
#[component]
pub fn PersonFormView(id: Option<i64>, on_done: EventHandler<()>) -> Element {
    let client = use_api();
    let mut activity_log = use_activity_log();
    let mut draft = use_signal(|| PersonDraft::new(&today_string()));
    let mut genders = use_signal(Vec::<Gender>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut uploading = use_signal(|| false);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match client.service::<Gender>().get_all().await {
                Ok(list) => {
                    if id.is_none() {
                        draft.write().default_gender(&list);
                    }
                    genders.set(list);
                }
                Err(e) => error.set(Some(extract_error_message(&e, "Failed to load genders."))),
            }

            if let Some(id) = id {
                match client.service::<Person>().get_by_id(id).await {
                    Ok(person) => draft.set(PersonDraft::from_person(&person, &today_string())),
                    Err(e) => error.set(Some(extract_error_message(&e, "Failed to load person."))),
                }
            }
        }
    });

    let upload_client = client.clone();
    let handle_upload = move |evt: FormEvent| {
        let Some(file) = evt.files().first().cloned() else {
            return;
        };
        let client = upload_client.clone();
        spawn(async move {
            uploading.set(true);
            let name = file.name();
            let uploaded = match file.read_bytes().await {
                Ok(bytes) => client
                    .service::<Person>()
                    .upload_image(&name, image_mime(&name), bytes.to_vec())
                    .await
                    .ok(),
                Err(e) => {
                    tracing::error!("Failed to read {}: {:?}", name, e);
                    None
                }
            };
            match uploaded {
                Some(path) => {
                    draft.write().profile_picture_url = path;
                    error.set(None);
                }
                None => {
                    error.set(Some("Failed to upload image".to_string()));
                    log_activity(&mut activity_log, LogLevel::Error, "Failed to upload image");
                }
            }
            uploading.set(false);
        });
    };

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
            let result = save_entity(&client, id, &current.to_person(id), &mut activity_log).await;
            saving.set(false);
            match result {
                Ok(()) => on_done.call(()),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let current = draft();
    let title = if id.is_some() { "Edit person" } else { "Create person" };
    let selected_gender = current.gender_id.map(|g| g.to_string()).unwrap_or_default();
    let gender_options = genders();

    rsx! {
        FormShell {
            title: "{title}",
            error: error(),
            saving: saving() || uploading(),
            on_submit: handle_submit,
            on_cancel: move |_| on_done.call(()),

            div {
                class: "form-field profile-field",
                ProfilePicture { url: current.profile_picture_url.clone(), alt: "Profile picture" }
                input {
                    r#type: "file",
                    accept: "image/*",
                    disabled: uploading(),
                    onchange: handle_upload,
                }
                if uploading() {
                    span { class: "form-help", "Uploading..." }
                }
            }

            div {
                class: "form-field",
                Label { html_for: "first-name", "First name" }
                Input {
                    id: "first-name",
                    value: current.first_name.clone(),
                    oninput: move |evt: FormEvent| draft.write().first_name = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "last-name", "Last name" }
                Input {
                    id: "last-name",
                    value: current.last_name.clone(),
                    oninput: move |evt: FormEvent| draft.write().last_name = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "date-of-birth", "Date of birth" }
                Input {
                    id: "date-of-birth",
                    kind: "date",
                    value: current.date_of_birth.clone(),
                    oninput: move |evt: FormEvent| draft.write().date_of_birth = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "gender", "Gender" }
                select {
                    id: "gender",
                    class: "input",
                    value: "{selected_gender}",
                    onchange: move |evt: FormEvent| draft.write().gender_id = evt.value().parse().ok(),
                    option { value: "", "Select gender" }
                    for gender in gender_options.iter().filter(|g| g.id.is_some()) {
                        option {
                            value: "{gender.id.unwrap_or_default()}",
                            selected: gender.id == current.gender_id,
                            "{gender.name}"
                        }
                    }
                }
            }
        }
    }
}

/// Content type for an uploaded image, guessed from its extension.
pub(crate) fn image_mime(file_name: &str) -> Option<String> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime("me.PNG").as_deref(), Some("image/png"));
        assert_eq!(image_mime("photo.jpeg").as_deref(), Some("image/jpeg"));
        assert_eq!(image_mime("notes.txt"), None);
        assert_eq!(image_mime("no-extension"), None);
    }
}
