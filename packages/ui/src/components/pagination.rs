use dioxus::prelude::*;

/// Previous / next controls, page position and the page-size dropdown.
#[component]
pub fn Pagination(
    page_number: u32,
    page_count: u64,
    total_count: u64,
    has_previous: bool,
    has_next: bool,
    page_size: u32,
    page_sizes: Vec<u32>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_page_size: EventHandler<u32>,
) -> Element {
    rsx! {
        div {
            class: "pagination",
            div {
                class: "pagination-size",
                label { r#for: "page-size", "Rows per page" }
                select {
                    id: "page-size",
                    value: "{page_size}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(size) = evt.value().parse::<u32>() {
                            on_page_size.call(size);
                        }
                    },
                    for size in page_sizes {
                        option { value: "{size}", selected: size == page_size, "{size}" }
                    }
                }
            }
            span { class: "pagination-info", "Page {page_number} of {page_count} ({total_count} total)" }
            div {
                class: "pagination-buttons",
                button {
                    class: "btn btn-outline",
                    disabled: !has_previous,
                    onclick: move |_| on_previous.call(()),
                    "Previous"
                }
                button {
                    class: "btn btn-outline",
                    disabled: !has_next,
                    onclick: move |_| on_next.call(()),
                    "Next"
                }
            }
        }
    }
}
