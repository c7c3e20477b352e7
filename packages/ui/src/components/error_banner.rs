use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: Option<String>, on_dismiss: Option<EventHandler<()>>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            span { "{message}" }
            if let Some(handler) = on_dismiss {
                button {
                    class: "error-banner-close",
                    title: "Dismiss",
                    onclick: move |_| handler.call(()),
                    "×"
                }
            }
        }
    }
}
