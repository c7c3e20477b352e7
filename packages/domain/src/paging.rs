//! # Paged search queries and results
//!
//! Every list page talks to a `GET {path}/search` endpoint with the same set of
//! query parameters and receives a [`PagedResult`]. This module holds the query
//! type, its query-string encoding and the page arithmetic the list views need.
//!
//! Page numbers are 1-based throughout.

use serde::{Deserialize, Serialize};

/// Page sizes offered by list views.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Page size a list view starts with.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Search parameters shared by every entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedQuery {
    pub search_term: Option<String>,
    pub sort_by: Option<String>,
    pub sort_descending: bool,
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for PagedQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PagedQuery {
    /// First page, unsorted, no search term.
    pub fn new(page_size: u32) -> Self {
        Self {
            search_term: None,
            sort_by: None,
            sort_descending: false,
            page_number: 1,
            page_size,
        }
    }

    /// Replace the search term. Always resets to the first page.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = if term.trim().is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        self.page_number = 1;
    }

    /// Click on a sortable column header.
    ///
    /// The active column flips direction; any other column becomes active,
    /// ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_by.as_deref() == Some(field) {
            self.sort_descending = !self.sort_descending;
        } else {
            self.sort_by = Some(field.to_string());
            self.sort_descending = false;
        }
    }

    /// Direction arrow for a column header, if that column is the active sort.
    pub fn sort_indicator(&self, field: &str) -> Option<&'static str> {
        if self.sort_by.as_deref() == Some(field) {
            Some(if self.sort_descending { "↓" } else { "↑" })
        } else {
            None
        }
    }

    /// Change the page size. Resets to the first page.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.page_number = 1;
    }
}

/// Entity-specific additions to a search query string.
pub trait SearchFilter: Clone + Default + PartialEq + std::fmt::Debug + 'static {
    fn append_params(&self, params: &mut Vec<(&'static str, String)>);
}

/// Filter for entities that have none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoFilter;

impl SearchFilter for NoFilter {
    fn append_params(&self, _params: &mut Vec<(&'static str, String)>) {}
}

/// A [`PagedQuery`] together with an entity filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchQuery<F> {
    pub query: PagedQuery,
    pub filter: F,
}

impl<F: SearchFilter> SearchQuery<F> {
    pub fn new(query: PagedQuery, filter: F) -> Self {
        Self { query, filter }
    }

    /// Query-string pairs in the order the API documents them.
    ///
    /// `searchTerm` is only sent when non-blank and `sortBy` only when a sort
    /// column is active; paging fields are always present.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let q = &self.query;
        let mut params = Vec::with_capacity(6);
        if let Some(term) = q.search_term.as_deref().map(str::trim) {
            if !term.is_empty() {
                params.push(("searchTerm", term.to_string()));
            }
        }
        if let Some(sort_by) = &q.sort_by {
            params.push(("sortBy", sort_by.clone()));
        }
        params.push(("sortDescending", q.sort_descending.to_string()));
        params.push(("pageNumber", q.page_number.to_string()));
        params.push(("pageSize", q.page_size.to_string()));
        self.filter.append_params(&mut params);
        params
    }
}

/// One page of search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_count: u64,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// Number of pages needed for `total` items, never less than 1.
pub fn page_count(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(u64::from(page_size)).max(1)
}

/// Whether a "Previous" button should be enabled.
pub fn has_previous(page_number: u32) -> bool {
    page_number > 1
}

/// Whether a "Next" button should be enabled.
pub fn has_next(page_number: u32, page_size: u32, total: u64) -> bool {
    u64::from(page_number) * u64::from(page_size) < total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressFilter, StateFilter};

    #[test]
    fn test_page_count_is_ceiling_with_minimum_one() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(100, 20), 5);
        assert_eq!(page_count(101, 100), 2);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn test_page_count_matches_ceiling_for_many_inputs() {
        for size in [1u32, 3, 10, 20, 50, 100] {
            for total in 0u64..250 {
                let expected = ((total as f64) / (size as f64)).ceil().max(1.0) as u64;
                assert_eq!(page_count(total, size), expected, "total={total} size={size}");
            }
        }
    }

    #[test]
    fn test_prev_next_bounds() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(has_next(1, 10, 11));
        assert!(!has_next(2, 10, 20));
        assert!(!has_next(1, 10, 0));
    }

    #[test]
    fn test_toggle_sort() {
        let mut q = PagedQuery::default();
        q.toggle_sort("name");
        assert_eq!(q.sort_by.as_deref(), Some("name"));
        assert!(!q.sort_descending);

        q.toggle_sort("name");
        assert!(q.sort_descending);
        assert_eq!(q.sort_indicator("name"), Some("↓"));

        q.toggle_sort("code");
        assert_eq!(q.sort_by.as_deref(), Some("code"));
        assert!(!q.sort_descending);
        assert_eq!(q.sort_indicator("name"), None);
    }

    #[test]
    fn test_search_term_resets_page() {
        let mut q = PagedQuery::default();
        q.page_number = 4;
        q.set_search_term("smith");
        assert_eq!(q.page_number, 1);
        assert_eq!(q.search_term.as_deref(), Some("smith"));

        q.page_number = 3;
        q.set_search_term("");
        assert_eq!(q.page_number, 1);
        assert!(q.search_term.is_none());
    }

    #[test]
    fn test_page_size_resets_page() {
        let mut q = PagedQuery::default();
        q.page_number = 2;
        q.set_page_size(50);
        assert_eq!(q.page_size, 50);
        assert_eq!(q.page_number, 1);
    }

    #[test]
    fn test_params_minimal() {
        let search = SearchQuery::new(PagedQuery::default(), NoFilter);
        assert_eq!(
            search.to_params(),
            vec![
                ("sortDescending", "false".to_string()),
                ("pageNumber", "1".to_string()),
                ("pageSize", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_full_with_filters() {
        let mut query = PagedQuery::new(20);
        query.set_search_term("  oak ");
        query.toggle_sort("city");
        query.toggle_sort("city");
        query.page_number = 2;

        let params = SearchQuery::new(query.clone(), AddressFilter { person_id: Some(9) }).to_params();
        assert_eq!(
            params,
            vec![
                ("searchTerm", "oak".to_string()),
                ("sortBy", "city".to_string()),
                ("sortDescending", "true".to_string()),
                ("pageNumber", "2".to_string()),
                ("pageSize", "20".to_string()),
                ("personId", "9".to_string()),
            ]
        );

        let params = SearchQuery::new(query, StateFilter { country_id: Some(3) }).to_params();
        assert_eq!(params.last(), Some(&("countryId", "3".to_string())));
    }

    #[test]
    fn test_paged_result_from_json() {
        let result: PagedResult<crate::models::Gender> =
            serde_json::from_str(r#"{"items":[{"id":1,"code":"M","name":"Male"}],"totalCount":31}"#)
                .unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.total_count, 31);
    }
}
