use api::BulkMode;
use dioxus::prelude::*;
use domain::{Entity, NoFilter, Person};

use crate::components::{
    ConfirmDialog, ErrorBanner, ListToolbar, Pagination, ProfilePicture, RowCheckbox,
    SelectAllCheckbox, SortableHeader,
};
use crate::config::use_admin_config;
use crate::paged_list::{use_paged_list, AfterDelete, DeletePolicy};
use crate::Icon;
use crate::icons::{FaLocationDot, FaPen, FaTrash};

pub(super) const POLICY: DeletePolicy = DeletePolicy::new(BulkMode::Sequential, AfterDelete::Refetch);

/// Paged, searchable person list.
#[component]
pub fn PersonsView(
    on_create: EventHandler<()>,
    on_edit: EventHandler<i64>,
    on_addresses: EventHandler<i64>,
) -> Element {
    let config = use_admin_config();
    let list = use_paged_list::<Person>(NoFilter, POLICY);
    let state = list.state.read().clone();
    let page_sizes = config.read().page_size_options();
    let plural = Person::PLURAL;

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Persons" }

            ErrorBanner { message: state.error.clone(), on_dismiss: move |_| list.dismiss_error() }

            ListToolbar {
                create_label: "Create person",
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
                        th { "Picture" }
                        SortableHeader { label: "ID", field: "id", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        SortableHeader { label: "First name", field: "firstName", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        SortableHeader { label: "Last name", field: "lastName", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        SortableHeader { label: "Date of birth", field: "dateOfBirth", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        SortableHeader { label: "Gender", field: "genderId", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        th { class: "actions-column", "Actions" }
                    }
                }
                tbody {
                    if state.loading && state.items.is_empty() {
                        tr { td { colspan: "8", class: "table-status", "Loading..." } }
                    } else if state.items.is_empty() {
                        tr { td { colspan: "8", class: "table-status", "No {plural} found." } }
                    }
                    for person in state.items.iter().filter(|p| p.id.is_some()) {
                        PersonRow {
                            key: "{person.id.unwrap_or_default()}",
                            person: person.clone(),
                            selected: person.id.is_some_and(|id| state.is_selected(id)),
                            on_select: move |(id, checked)| list.select_row(id, checked),
                            on_edit,
                            on_addresses,
                            on_delete: move |id| list.request_delete(vec![id]),
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

#[component]
fn PersonRow(
    person: Person,
    selected: bool,
    on_select: EventHandler<(i64, bool)>,
    on_edit: EventHandler<i64>,
    on_addresses: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let Some(id) = person.id else {
        return rsx! {};
    };
    let gender = person
        .gender
        .as_ref()
        .map(|g| g.name.clone())
        .unwrap_or_default();
    let date_of_birth = domain::forms::date_only(&person.date_of_birth).to_string();

    rsx! {
        tr {
            class: if selected { "selected" } else { "" },
            RowCheckbox { id, checked: selected, on_change: on_select }
            td {
                ProfilePicture { url: person.profile_picture_url.clone(), alt: person.full_name() }
            }
            td { "{id}" }
            td { "{person.first_name}" }
            td { "{person.last_name}" }
            td { "{date_of_birth}" }
            td { "{gender}" }
            td {
                class: "actions-column",
                button { class: "icon-button", title: "Edit", onclick: move |_| on_edit.call(id),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                button { class: "icon-button", title: "Addresses", onclick: move |_| on_addresses.call(id),
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                }
                button { class: "icon-button danger", title: "Delete", onclick: move |_| on_delete.call(id),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                }
            }
        }
    }
}
