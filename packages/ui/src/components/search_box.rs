use dioxus::prelude::*;

use crate::debounce::use_debounced;
use crate::Icon;
use crate::icons::FaMagnifyingGlass;

/// Search input that reports the term after typing pauses.
#[component]
pub fn SearchBox(
    #[props(default = "Search...".to_string())] placeholder: String,
    on_search: EventHandler<String>,
) -> Element {
    let mut text = use_signal(String::new);
    let search = use_debounced(on_search);

    rsx! {
        div {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: move |evt: FormEvent| {
                    let value = evt.value();
                    text.set(value.clone());
                    search.call(value);
                },
            }
        }
    }
}
