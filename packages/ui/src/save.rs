//! Submitting a form: create or update, then record the outcome.

use api::{extract_error_message, ApiClient, HttpTransport};
use dioxus::prelude::*;
use domain::Entity;

use crate::activity_log::{log_activity, ActivityLog, LogLevel};
use crate::paged_list::capitalized;

/// Create `entity` when `id` is `None`, update it otherwise.
///
/// Success and failure both land in the activity log; the error text is
/// returned for display next to the form.
pub async fn save_entity<E: Entity>(
    client: &ApiClient<HttpTransport>,
    id: Option<i64>,
    entity: &E,
    log: &mut Signal<ActivityLog>,
) -> Result<(), String> {
    let service = client.service::<E>();
    let result = match id {
        Some(id) => service.update(id, entity).await,
        None => service.create(entity).await.map(|_| ()),
    };
    match result {
        Ok(()) => {
            log_activity(log, LogLevel::Success, &saved_message::<E>(id.is_some()));
            Ok(())
        }
        Err(e) => {
            let message = extract_error_message(&e, &save_failed_message::<E>());
            log_activity(log, LogLevel::Error, &message);
            Err(message)
        }
    }
}

pub fn saved_message<E: Entity>(updated: bool) -> String {
    let verb = if updated { "updated" } else { "created" };
    format!("{} {verb} successfully", capitalized(E::LABEL))
}

pub fn save_failed_message<E: Entity>() -> String {
    format!("Failed to save {}.", E::LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{AddressType, Gender};

    #[test]
    fn test_messages() {
        assert_eq!(saved_message::<Gender>(false), "Gender created successfully");
        assert_eq!(saved_message::<AddressType>(true), "Address type updated successfully");
        assert_eq!(save_failed_message::<Gender>(), "Failed to save gender.");
    }
}
