use dioxus::prelude::*;

use super::{Button, ButtonVariant, SearchBox};
use crate::Icon;
use crate::icons::{FaPlus, FaTrash};

/// Search, create and bulk-delete controls above a list.
#[component]
pub fn ListToolbar(
    create_label: String,
    selected_count: usize,
    on_search: EventHandler<String>,
    on_create: EventHandler<()>,
    on_delete_selected: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "list-toolbar",
            SearchBox { on_search }
            div {
                class: "list-toolbar-actions",
                if selected_count > 0 {
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_delete_selected.call(()),
                        Icon { icon: FaTrash, width: 12, height: 12 }
                        " Delete selected ({selected_count})"
                    }
                }
                Button {
                    onclick: move |_| on_create.call(()),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " {create_label}"
                }
            }
        }
    }
}
