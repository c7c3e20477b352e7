//! Client-side domain of the address admin: entities, paged queries, list and
//! form state, configuration. Nothing in here performs I/O.

pub mod config;
pub mod debounce;
pub mod forms;
pub mod list;
pub mod models;
pub mod paging;

pub use config::{AdminConfig, ConfigError};
pub use debounce::DebounceGate;
pub use forms::{AddressDraft, AddressTypeDraft, CodeNameDraft, PersonDraft, StateDraft};
pub use list::{AfterDelete, ListState, RequestTicket};
pub use models::{
    Address, AddressFilter, AddressType, Country, Entity, Gender, Person, State, StateFilter,
};
pub use paging::{NoFilter, PagedQuery, PagedResult, SearchFilter, SearchQuery};
