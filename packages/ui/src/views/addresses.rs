use api::BulkMode;
use dioxus::prelude::*;
use domain::{Address, AddressFilter, Person};

use crate::client::use_api;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, ErrorBanner, ListToolbar, Pagination, RowCheckbox,
    SelectAllCheckbox, SortableHeader,
};
use crate::config::use_admin_config;
use crate::paged_list::{use_paged_list, AfterDelete, DeletePolicy};
use crate::Icon;
use crate::icons::{FaArrowLeft, FaPen, FaTrash};

pub(super) const POLICY: DeletePolicy = DeletePolicy::new(BulkMode::Sequential, AfterDelete::RemoveLocally);

/// Addresses belonging to one person.
#[component]
pub fn AddressesView(
    person_id: i64,
    on_create: EventHandler<()>,
    on_edit: EventHandler<i64>,
    on_back: EventHandler<()>,
) -> Element {
    let config = use_admin_config();
    let client = use_api();
    let list = use_paged_list::<Address>(
        AddressFilter {
            person_id: Some(person_id),
        },
        POLICY,
    );
    let mut person_name = use_signal(String::new);

    let _person = use_resource(move || {
        let client = client.clone();
        async move {
            match client.service::<Person>().get_by_id(person_id).await {
                Ok(person) => person_name.set(person.full_name()),
                Err(e) => tracing::warn!("Failed to load person {}: {}", person_id, e),
            }
        }
    });

    let state = list.state.read().clone();
    let page_sizes = config.read().page_size_options();
    let heading = if person_name().is_empty() {
        "Addresses".to_string()
    } else {
        format!("Addresses of {}", person_name())
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    " Persons"
                }
                h1 { class: "view-title", "{heading}" }
            }

            ErrorBanner { message: state.error.clone(), on_dismiss: move |_| list.dismiss_error() }

            ListToolbar {
                create_label: "Create address",
                selected_count: state.selected.len(),
                on_search: move |term| list.set_search_term(term),
                on_create: move |_| on_create.call(()),
                on_delete_selected: move |_| list.request_delete_selected(),
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        SelectAllCheckbox {
                            checked: state.all_selected(),
                            disabled: state.items.is_empty(),
                            on_change: move |checked| list.select_all(checked),
                        }
                        SortableHeader { label: "Street", field: "street", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        SortableHeader { label: "City", field: "city", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        SortableHeader { label: "Postal code", field: "postalCode", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        SortableHeader { label: "State", field: "stateId", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        SortableHeader { label: "Type", field: "addressTypeId", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        th { class: "actions-column", "Actions" }
                    }
                }
                tbody {
                    if state.loading && state.items.is_empty() {
                        tr { td { colspan: "7", class: "table-status", "Loading..." } }
                    } else if state.items.is_empty() {
                        tr { td { colspan: "7", class: "table-status", "No addresses found." } }
                    }
                    for address in state.items.iter() {
                        if let Some(id) = address.id {
                            tr {
                                key: "{id}",
                                class: if state.is_selected(id) { "selected" } else { "" },
                                RowCheckbox { id, checked: state.is_selected(id), on_change: move |(id, checked)| list.select_row(id, checked) }
                                td { "{address.street}" }
                                td { "{address.city}" }
                                td { {address.postal_code.clone().unwrap_or_default()} }
                                td { {address.state.as_ref().map(|s| s.name.clone()).unwrap_or_default()} }
                                td { {address.address_type.as_ref().map(|t| t.name.clone()).unwrap_or_default()} }
                                td {
                                    class: "actions-column",
                                    button { class: "icon-button", title: "Edit", onclick: move |_| on_edit.call(id),
                                        Icon { icon: FaPen, width: 12, height: 12 }
                                    }
                                    button { class: "icon-button danger", title: "Delete", onclick: move |_| list.request_delete(vec![id]),
                                        Icon { icon: FaTrash, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                page_number: state.query.page_number,
                page_count: state.page_count(),
                total_count: state.total_count,
                has_previous: state.has_previous(),
                has_next: state.has_next(),
                page_size: state.query.page_size,
                page_sizes,
                on_previous: move |_| list.previous_page(),
                on_next: move |_| list.next_page(),
                on_page_size: move |size| list.set_page_size(size),
            }
        }

        if let Some((title, message)) = list.delete_prompt() {
            ConfirmDialog {
                title,
                message,
                busy: (list.deleting)(),
                on_confirm: move |_| list.confirm_delete(),
                on_cancel: move |_| list.cancel_delete(),
            }
        }
    }
}
