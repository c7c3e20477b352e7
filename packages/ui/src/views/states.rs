use api::BulkMode;
use dioxus::prelude::*;
use domain::{Country, State, StateFilter};

use crate::client::use_api;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, ErrorBanner, ListToolbar, Pagination, RowCheckbox,
    SelectAllCheckbox, SortableHeader,
};
use crate::config::use_admin_config;
use crate::paged_list::{use_paged_list, AfterDelete, DeletePolicy};
use crate::Icon;
use crate::icons::{FaArrowLeft, FaPen, FaTrash};

pub(super) const POLICY: DeletePolicy = DeletePolicy::new(BulkMode::Concurrent, AfterDelete::RemoveLocally);

/// States of one country.
#[component]
pub fn StatesView(
    country_id: i64,
    on_create: EventHandler<()>,
    on_edit: EventHandler<i64>,
    on_back: EventHandler<()>,
) -> Element {
    let config = use_admin_config();
    let client = use_api();
    let list = use_paged_list::<State>(
        StateFilter {
            country_id: Some(country_id),
        },
        POLICY,
    );
    let mut country_name = use_signal(String::new);

    let _country = use_resource(move || {
        let client = client.clone();
        async move {
            match client.service::<Country>().get_by_id(country_id).await {
                Ok(country) => country_name.set(country.name),
                Err(e) => tracing::warn!("Failed to load country {}: {}", country_id, e),
            }
        }
    });

    let state = list.state.read().clone();
    let page_sizes = config.read().page_size_options();
    let heading = if country_name().is_empty() {
        "States".to_string()
    } else {
        format!("States of {}", country_name())
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    " Countries"
                }
                h1 { class: "view-title", "{heading}" }
            }

            ErrorBanner { message: state.error.clone(), on_dismiss: move |_| list.dismiss_error() }

            ListToolbar {
                create_label: "Create state",
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
                        tr { td { colspan: "5", class: "table-status", "No states found." } }
                    }
                    for item in state.items.iter() {
                        if let Some(id) = item.id {
                            tr {
                                key: "{id}",
                                class: if state.is_selected(id) { "selected" } else { "" },
                                RowCheckbox { id, checked: state.is_selected(id), on_change: move |(id, checked)| list.select_row(id, checked) }
                                td { "{id}" }
                                td { "{item.code}" }
                                td { "{item.name}" }
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
