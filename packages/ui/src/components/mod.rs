//! Building blocks shared by the list and form pages.

mod button;
pub use button::{Button, ButtonVariant};

mod form_shell;
pub use form_shell::FormShell;

mod input;
pub use input::{FieldError, Input, Label};

mod data_table;
pub use data_table::{RowCheckbox, SelectAllCheckbox, SortableHeader};

mod pagination;
pub use pagination::Pagination;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod error_banner;
pub use error_banner::ErrorBanner;

mod list_toolbar;
pub use list_toolbar::ListToolbar;

mod search_box;
pub use search_box::SearchBox;

mod profile_picture;
pub use profile_picture::ProfilePicture;
