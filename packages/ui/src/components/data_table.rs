use dioxus::prelude::*;
use domain::PagedQuery;

/// Column header that toggles sorting on `field` and shows the active direction.
#[component]
pub fn SortableHeader(
    label: String,
    field: String,
    query: PagedQuery,
    on_sort: EventHandler<String>,
) -> Element {
    let indicator = query.sort_indicator(&field).unwrap_or("");
    let field_for_click = field.clone();

    rsx! {
        th {
            class: "sortable",
            onclick: move |_| on_sort.call(field_for_click.clone()),
            "{label} "
            span { class: "sort-indicator", "{indicator}" }
        }
    }
}

#[component]
pub fn SelectAllCheckbox(checked: bool, disabled: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        th {
            class: "select-column",
            input {
                r#type: "checkbox",
                "aria-label": "Select all",
                checked,
                disabled,
                onchange: move |evt: FormEvent| on_change.call(evt.checked()),
            }
        }
    }
}

#[component]
pub fn RowCheckbox(id: i64, checked: bool, on_change: EventHandler<(i64, bool)>) -> Element {
    rsx! {
        td {
            class: "select-column",
            input {
                r#type: "checkbox",
                "aria-label": "Select row {id}",
                checked,
                onchange: move |evt: FormEvent| on_change.call((id, evt.checked())),
            }
        }
    }
}
