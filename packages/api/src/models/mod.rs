//! Identity models returned by the hosting platform's auth endpoints.

mod principal;

pub use principal::{ClientPrincipal, LoggedInUser};
