use dioxus::prelude::*;

use super::{Button, ButtonVariant, FieldError};

/// Title, submit/cancel buttons and the inline error around a form's fields.
#[component]
pub fn FormShell(
    title: String,
    error: Option<String>,
    saving: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "view-page form-page",
            h1 { class: "view-title", "{title}" }
            form {
                class: "entity-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                {children}
                FieldError { message: error }
                div {
                    class: "form-actions",
                    Button { submit: true, disabled: saving,
                        if saving { "Saving..." } else { "Save" }
                    }
                    Button { variant: ButtonVariant::Outline, onclick: move |_| on_cancel.call(()), "Cancel" }
                }
            }
        }
    }
}
