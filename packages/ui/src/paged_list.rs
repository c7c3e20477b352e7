//! # Paged list controller
//!
//! [`PagedList`] drives one list page: it owns a [`ListState`] signal, issues
//! search requests through the entity's service and applies the response with
//! the state's request tickets, so a slow response never overwrites a newer
//! one. Event handlers call its methods directly; `Signal` is `Copy`, so
//! the controller is `Copy` too and can be moved into closures freely.
//!
//! Deletes always go through a confirmation step
//! ([`request_delete`](PagedList::request_delete) then
//! [`confirm_delete`](PagedList::confirm_delete)) and follow the page's
//! [`DeletePolicy`].

use api::{delete_many, extract_error_message, ApiClient, BulkMode, HttpTransport};
use dioxus::prelude::*;
use domain::{Entity, ListState, PagedQuery};

pub use domain::AfterDelete;

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
use crate::client::use_api;
use crate::config::use_admin_config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeletePolicy {
    pub mode: BulkMode,
    pub after: AfterDelete,
}

impl DeletePolicy {
    pub const fn new(mode: BulkMode, after: AfterDelete) -> Self {
        Self { mode, after }
    }
}

pub struct PagedList<E: Entity> {
    pub state: Signal<ListState<E>>,
    /// Ids waiting for the user to confirm their deletion.
    pub pending_delete: Signal<Option<Vec<i64>>>,
    pub deleting: Signal<bool>,
    log: Signal<ActivityLog>,
    client: Signal<ApiClient<HttpTransport>>,
    policy: DeletePolicy,
}

impl<E: Entity> Clone for PagedList<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for PagedList<E> {}

/// Create the controller for a list of `E` and load the first page.
pub fn use_paged_list<E: Entity>(filter: E::Filter, policy: DeletePolicy) -> PagedList<E> {
    let config = use_admin_config();
    let client = use_api();
    let client = use_signal(move || client);
    let log = use_activity_log();
    let state = use_signal(|| {
        let page_size = config.peek().paging.default_page_size;
        ListState::<E>::new(PagedQuery::new(page_size), filter)
    });
    let pending_delete = use_signal(|| None);
    let deleting = use_signal(|| false);

    let list = PagedList {
        state,
        pending_delete,
        deleting,
        log,
        client,
        policy,
    };

    use_hook(move || list.reload());

    list
}

impl<E: Entity> PagedList<E> {
    /// Fetch the current page; stale responses are dropped.
    pub async fn load(&self) {
        let mut state = self.state;
        let mut log = self.log;
        let ticket = state.write().begin_request();
        let query = state.peek().search_query();

        let client = self.client.peek().clone();
        let outcome = client
            .service::<E>()
            .search(&query)
            .await
            .map_err(|e| extract_error_message(&e, &load_failed_message::<E>()));

        if let Err(message) = &outcome {
            log_activity(&mut log, LogLevel::Error, message);
        }
        if !state.write().finish_request(ticket, outcome) {
            tracing::debug!(entity = E::LABEL, "Discarded stale list response");
        }
    }

    /// [`load`](Self::load) in a new task.
    pub fn reload(&self) {
        let list = *self;
        spawn(async move { list.load().await });
    }

    pub fn set_search_term(&self, term: String) {
        let mut state = self.state;
        if state.peek().query.search_term.as_deref().unwrap_or("") == term.trim() {
            return;
        }
        state.write().set_search_term(&term);
        self.reload();
    }

    pub fn toggle_sort(&self, field: String) {
        let mut state = self.state;
        state.write().toggle_sort(&field);
        self.reload();
    }

    pub fn set_page_size(&self, page_size: u32) {
        let mut state = self.state;
        state.write().set_page_size(page_size);
        self.reload();
    }

    pub fn previous_page(&self) {
        let mut state = self.state;
        if state.write().previous_page() {
            self.reload();
        }
    }

    pub fn next_page(&self) {
        let mut state = self.state;
        if state.write().next_page() {
            self.reload();
        }
    }

    pub fn select_row(&self, id: i64, checked: bool) {
        let mut state = self.state;
        state.write().select_row(id, checked);
    }

    pub fn select_all(&self, checked: bool) {
        let mut state = self.state;
        state.write().select_all(checked);
    }

    pub fn dismiss_error(&self) {
        let mut state = self.state;
        state.write().clear_error();
    }

    /// Ask for confirmation before deleting `ids`.
    pub fn request_delete(&self, ids: Vec<i64>) {
        if ids.is_empty() {
            return;
        }
        let mut pending = self.pending_delete;
        pending.set(Some(ids));
    }

    pub fn request_delete_selected(&self) {
        let ids = self.state.peek().selected_ids();
        self.request_delete(ids);
    }

    pub fn cancel_delete(&self) {
        let mut pending = self.pending_delete;
        pending.set(None);
    }

    /// Title and message for the confirmation dialog, while one is pending.
    pub fn delete_prompt(&self) -> Option<(String, String)> {
        let pending = self.pending_delete.read();
        let count = pending.as_ref()?.len();
        Some(delete_prompt_text::<E>(count))
    }

    /// Delete the pending ids according to the page's policy.
    pub fn confirm_delete(&self) {
        let Some(ids) = self.pending_delete.peek().clone() else {
            return;
        };
        let list = *self;
        spawn(async move {
            list.delete(ids).await;
        });
    }

    async fn delete(&self, ids: Vec<i64>) {
        let mut deleting = self.deleting;
        let mut pending = self.pending_delete;
        let mut state = self.state;
        let mut log = self.log;

        deleting.set(true);
        let client = self.client.peek().clone();
        let service = client.service::<E>();
        let result = delete_many(&service, &ids, self.policy.mode).await;
        deleting.set(false);
        pending.set(None);

        let outcome = match result {
            Ok(()) => {
                log_activity(&mut log, LogLevel::Success, &deleted_message::<E>(ids.len()));
                Ok(())
            }
            Err(e) => {
                let message = extract_error_message(&e, &delete_failed_message::<E>(ids.len()));
                log_activity(&mut log, LogLevel::Error, &message);
                Err(message)
            }
        };

        let reload = state.write().apply_delete_outcome(&ids, self.policy.after, outcome);
        if reload {
            self.load().await;
        }
    }
}

/// `"address type"` -> `"Address type"`.
pub fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn load_failed_message<E: Entity>() -> String {
    format!("Failed to load {}.", E::PLURAL)
}

pub fn deleted_message<E: Entity>(count: usize) -> String {
    if count == 1 {
        format!("{} deleted successfully", capitalized(E::LABEL))
    } else {
        format!("Selected {} deleted successfully", E::PLURAL)
    }
}

pub fn delete_failed_message<E: Entity>(count: usize) -> String {
    if count == 1 {
        format!("Failed to delete {}.", E::LABEL)
    } else {
        format!("Failed to delete selected {}.", E::PLURAL)
    }
}

fn delete_prompt_text<E: Entity>(count: usize) -> (String, String) {
    if count == 1 {
        (
            format!("Delete {}", E::LABEL),
            format!("Are you sure you want to delete this {}?", E::LABEL),
        )
    } else {
        (
            format!("Delete {}", E::PLURAL),
            format!("Are you sure you want to delete {count} {}?", E::PLURAL),
        )
    }
}
