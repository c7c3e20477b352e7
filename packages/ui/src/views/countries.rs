use api::BulkMode;
use dioxus::prelude::*;
use domain::{Country, NoFilter};

use crate::components::{
    ConfirmDialog, ErrorBanner, ListToolbar, Pagination, RowCheckbox, SelectAllCheckbox,
    SortableHeader,
};
use crate::config::use_admin_config;
use crate::paged_list::{use_paged_list, AfterDelete, DeletePolicy};
use crate::Icon;
use crate::icons::{FaMap, FaPen, FaTrash};

pub(super) const POLICY: DeletePolicy = DeletePolicy::new(BulkMode::Concurrent, AfterDelete::Refetch);

#[component]
pub fn CountriesView(
    on_create: EventHandler<()>,
    on_edit: EventHandler<i64>,
    on_states: EventHandler<i64>,
) -> Element {
    let config = use_admin_config();
    let list = use_paged_list::<Country>(NoFilter, POLICY);
    let state = list.state.read().clone();
    let page_sizes = config.read().page_size_options();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Countries" }

            ErrorBanner { message: state.error.clone(), on_dismiss: move |_| list.dismiss_error() }

            ListToolbar {
                create_label: "Create country",
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
                        SortableHeader { label: "ID", field: "id", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        SortableHeader { label: "Code", field: "code", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        SortableHeader { label: "Name", field: "name", query: state.query.clone(), on_sort: move |f| list.toggle_sort(f) }
                        th { class: "actions-column", "Actions" }
                    }
                }
                tbody {
                    if state.loading && state.items.is_empty() {
                        tr { td { colspan: "5", class: "table-status", "Loading..." } }
                    } else if state.items.is_empty() {
                        tr { td { colspan: "5", class: "table-status", "No countries found." } }
                    }
                    for country in state.items.iter() {
                        if let Some(id) = country.id {
                            tr {
                                key: "{id}",
                                class: if state.is_selected(id) { "selected" } else { "" },
                                RowCheckbox { id, checked: state.is_selected(id), on_change: move |(id, checked)| list.select_row(id, checked) }
                                td { "{id}" }
                                td { "{country.code}" }
                                td { "{country.name}" }
                                td {
                                    class: "actions-column",
                                    button { class: "icon-button", title: "Edit", onclick: move |_| on_edit.call(id),
                                        Icon { icon: FaPen, width: 12, height: 12 }
                                    }
                                    button { class: "icon-button", title: "States", onclick: move |_| on_states.call(id),
                                        Icon { icon: FaMap, width: 12, height: 12 }
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
