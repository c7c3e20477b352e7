//! # List page state
//!
//! [`ListState`] is the whole state of one paged list view: the query being
//! shown, the page of items that came back, the row selection and the
//! loading/error flags. UI components keep one inside a signal and call the
//! methods below from event handlers; nothing here performs I/O.
//!
//! Selection only ever refers to rows of the page currently loaded. Moving to
//! another page clears it, and loading a page drops ids that are no longer
//! rendered.
//!
//! Requests are ticketed: [`ListState::begin_request`] hands out an increasing
//! number and [`ListState::finish_request`] ignores any response whose ticket is
//! not the latest, so a slow response can never overwrite a newer one.

use std::collections::BTreeSet;

use crate::models::Entity;
use crate::paging::{self, PagedQuery, PagedResult, SearchQuery};

/// What happens to the page once a delete succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterDelete {
    Refetch,
    RemoveLocally,
}

/// Ticket identifying one in-flight list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<E: Entity> {
    pub query: PagedQuery,
    pub filter: E::Filter,
    pub items: Vec<E>,
    pub total_count: u64,
    pub selected: BTreeSet<i64>,
    pub loading: bool,
    pub error: Option<String>,
    latest_request: u64,
}

impl<E: Entity> Default for ListState<E> {
    fn default() -> Self {
        Self::new(PagedQuery::default(), E::Filter::default())
    }
}

impl<E: Entity> ListState<E> {
    pub fn new(query: PagedQuery, filter: E::Filter) -> Self {
        Self {
            query,
            filter,
            items: Vec::new(),
            total_count: 0,
            selected: BTreeSet::new(),
            loading: true,
            error: None,
            latest_request: 0,
        }
    }

    /// The search request for the current query and filter.
    pub fn search_query(&self) -> SearchQuery<E::Filter> {
        SearchQuery::new(self.query.clone(), self.filter.clone())
    }

    pub fn set_search_term(&mut self, term: &str) {
        if self.query.page_number != 1 {
            self.selected.clear();
        }
        self.query.set_search_term(term);
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.query.toggle_sort(field);
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        if self.query.page_number != 1 {
            self.selected.clear();
        }
        self.query.set_page_size(page_size);
    }

    pub fn page_count(&self) -> u64 {
        paging::page_count(self.total_count, self.query.page_size)
    }

    pub fn has_previous(&self) -> bool {
        paging::has_previous(self.query.page_number)
    }

    pub fn has_next(&self) -> bool {
        paging::has_next(self.query.page_number, self.query.page_size, self.total_count)
    }

    /// Move to the previous page. Returns `false` when already on the first one.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.query.page_number -= 1;
        self.selected.clear();
        true
    }

    /// Move to the next page. Returns `false` when there is none.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.query.page_number += 1;
        self.selected.clear();
        true
    }

    /// Start a request: marks the list loading and clears the error.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        RequestTicket(self.latest_request)
    }

    /// Apply the outcome of a request started with [`begin_request`](Self::begin_request).
    ///
    /// Returns `false` (and changes nothing) if a newer request was started since.
    pub fn finish_request(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<PagedResult<E>, String>,
    ) -> bool {
        if ticket.0 != self.latest_request {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                self.items = page.items;
                self.total_count = page.total_count;
                let visible = self.visible_ids();
                self.selected.retain(|id| visible.contains(id));
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Ids of the rows currently rendered, in display order.
    pub fn visible_ids(&self) -> Vec<i64> {
        self.items.iter().filter_map(Entity::id).collect()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn select_row(&mut self, id: i64, checked: bool) {
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    /// Header checkbox: select exactly the rendered rows, or clear the selection.
    pub fn select_all(&mut self, checked: bool) {
        self.selected.clear();
        if checked {
            self.selected.extend(self.visible_ids());
        }
    }

    /// True when the page has rows and every one of them is selected.
    pub fn all_selected(&self) -> bool {
        let visible = self.visible_ids();
        !visible.is_empty() && visible.iter().all(|id| self.selected.contains(id))
    }

    pub fn selected_ids(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Drop deleted rows from the page and the selection without re-fetching.
    pub fn remove_ids(&mut self, ids: &[i64]) {
        let before = self.items.len();
        self.items
            .retain(|item| item.id().map_or(true, |id| !ids.contains(&id)));
        let removed = (before - self.items.len()) as u64;
        self.total_count = self.total_count.saturating_sub(removed);
        for id in ids {
            self.selected.remove(id);
        }
    }

    /// Apply the result of deleting `ids`.
    ///
    /// On success either clears the selection (`Refetch`) or drops the rows
    /// locally; on failure records the message and keeps the rows. Returns
    /// whether the page must be fetched again.
    pub fn apply_delete_outcome(
        &mut self,
        ids: &[i64],
        after: AfterDelete,
        outcome: Result<(), String>,
    ) -> bool {
        match outcome {
            Ok(()) => match after {
                AfterDelete::Refetch => {
                    self.selected.clear();
                    true
                }
                AfterDelete::RemoveLocally => {
                    self.remove_ids(ids);
                    false
                }
            },
            Err(message) => {
                self.set_error(message);
                false
            }
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, AddressFilter, Gender};

    fn gender(id: i64, name: &str) -> Gender {
        Gender {
            id: Some(id),
            code: name[..1].to_string(),
            name: name.to_string(),
            persons: Vec::new(),
        }
    }

    fn loaded(ids: &[i64], total: u64) -> ListState<Gender> {
        let mut state = ListState::<Gender>::default();
        let ticket = state.begin_request();
        let items = ids.iter().map(|id| gender(*id, "Other")).collect();
        state.finish_request(ticket, Ok(PagedResult { items, total_count: total }));
        state
    }

    #[test]
    fn test_new_state_is_loading() {
        let state = ListState::<Gender>::default();
        assert!(state.loading);
        assert_eq!(state.query.page_number, 1);
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn test_finish_request_applies_page() {
        let state = loaded(&[1, 2, 3], 23);
        assert!(!state.loading);
        assert_eq!(state.visible_ids(), vec![1, 2, 3]);
        assert_eq!(state.page_count(), 3);
        assert!(state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ListState::<Gender>::default();
        let first = state.begin_request();
        let second = state.begin_request();

        let applied = state.finish_request(
            second,
            Ok(PagedResult {
                items: vec![gender(2, "Female")],
                total_count: 1,
            }),
        );
        assert!(applied);

        let applied = state.finish_request(
            first,
            Ok(PagedResult {
                items: vec![gender(1, "Male")],
                total_count: 1,
            }),
        );
        assert!(!applied);
        assert_eq!(state.visible_ids(), vec![2]);
    }

    #[test]
    fn test_error_outcome() {
        let mut state = ListState::<Gender>::default();
        let ticket = state.begin_request();
        state.finish_request(ticket, Err("Failed to load genders.".into()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to load genders."));

        state.begin_request();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_select_all_selects_exactly_rendered_rows() {
        let mut state = loaded(&[4, 5, 6], 3);
        state.select_row(99, true);
        state.select_all(true);
        assert_eq!(state.selected_ids(), vec![4, 5, 6]);
        assert!(state.all_selected());

        state.select_all(false);
        assert!(state.selected.is_empty());
        assert!(!state.all_selected());
    }

    #[test]
    fn test_all_selected_false_on_empty_page() {
        let mut state = loaded(&[], 0);
        state.select_all(true);
        assert!(!state.all_selected());
        assert!(!state.has_selection());
    }

    #[test]
    fn test_select_row_toggles() {
        let mut state = loaded(&[1, 2], 2);
        state.select_row(1, true);
        assert!(state.is_selected(1));
        assert!(!state.all_selected());
        state.select_row(2, true);
        assert!(state.all_selected());
        state.select_row(1, false);
        assert_eq!(state.selected_ids(), vec![2]);
    }

    #[test]
    fn test_remove_ids_updates_list_and_selection() {
        let mut state = loaded(&[1, 2, 3], 13);
        state.select_all(true);
        state.remove_ids(&[1, 3]);
        assert_eq!(state.visible_ids(), vec![2]);
        assert_eq!(state.selected_ids(), vec![2]);
        assert_eq!(state.total_count, 11);
    }

    #[test]
    fn test_delete_then_refetch_clears_selection() {
        let mut state = loaded(&[1, 2, 3], 3);
        state.select_all(true);
        let reload = state.apply_delete_outcome(&[1, 2, 3], AfterDelete::Refetch, Ok(()));
        assert!(reload);
        assert!(state.selected.is_empty());
        assert_eq!(state.visible_ids(), vec![1, 2, 3]);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_delete_then_remove_locally() {
        let mut state = loaded(&[1, 2, 3], 8);
        state.select_row(2, true);
        state.select_row(3, true);
        let reload = state.apply_delete_outcome(&[2], AfterDelete::RemoveLocally, Ok(()));
        assert!(!reload);
        assert_eq!(state.visible_ids(), vec![1, 3]);
        assert_eq!(state.selected_ids(), vec![3]);
        assert_eq!(state.total_count, 7);
    }

    #[test]
    fn test_failed_delete_keeps_rows() {
        for after in [AfterDelete::Refetch, AfterDelete::RemoveLocally] {
            let mut state = loaded(&[1, 2], 2);
            state.select_all(true);
            let reload = state.apply_delete_outcome(
                &[1, 2],
                after,
                Err("Failed to delete selected genders.".into()),
            );
            assert!(!reload);
            assert_eq!(state.visible_ids(), vec![1, 2]);
            assert_eq!(state.selected_ids(), vec![1, 2]);
            assert_eq!(state.total_count, 2);
            assert_eq!(state.error.as_deref(), Some("Failed to delete selected genders."));
        }
    }

    #[test]
    fn test_page_navigation_clears_selection() {
        let mut state = loaded(&[1, 2], 25);
        state.select_all(true);
        assert!(state.next_page());
        assert_eq!(state.query.page_number, 2);
        assert!(state.selected.is_empty());

        state.select_row(11, true);
        assert!(state.previous_page());
        assert!(state.selected.is_empty());
        assert!(!state.previous_page());
    }

    #[test]
    fn test_next_page_stops_at_last() {
        let mut state = loaded(&[1], 10);
        assert!(!state.next_page());
        assert_eq!(state.query.page_number, 1);
    }

    #[test]
    fn test_search_resets_page_number() {
        let mut state = loaded(&[1], 40);
        state.next_page();
        state.next_page();
        state.set_search_term("fem");
        assert_eq!(state.query.page_number, 1);
    }

    #[test]
    fn test_reload_drops_selection_of_missing_rows() {
        let mut state = loaded(&[1, 2, 3], 3);
        state.select_all(true);
        let ticket = state.begin_request();
        state.finish_request(
            ticket,
            Ok(PagedResult {
                items: vec![gender(2, "Female")],
                total_count: 1,
            }),
        );
        assert_eq!(state.selected_ids(), vec![2]);
    }

    #[test]
    fn test_filter_flows_into_search_query() {
        let state = ListState::<Address>::new(
            PagedQuery::default(),
            AddressFilter { person_id: Some(12) },
        );
        let params = state.search_query().to_params();
        assert!(params.contains(&("personId", "12".to_string())));
    }
}
