use futures::future::join_all;

use domain::Entity;

use crate::error::ApiError;
use crate::services::EntityService;
use crate::transport::Transport;

/// How a multi-row delete issues its calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkMode {
    /// One call after another; stops at the first failure.
    Sequential,
    /// All calls at once; every id is attempted.
    Concurrent,
}

/// Delete every id, one call per id.
///
/// Returns the first failure. Ids deleted before a failure stay deleted.
pub async fn delete_many<T: Transport, E: Entity>(
    service: &EntityService<'_, T, E>,
    ids: &[i64],
    mode: BulkMode,
) -> Result<(), ApiError> {
    tracing::info!(entity = E::LABEL, count = ids.len(), ?mode, "Bulk delete");
    match mode {
        BulkMode::Sequential => {
            for id in ids {
                service.delete(*id).await?;
            }
            Ok(())
        }
        BulkMode::Concurrent => join_all(ids.iter().map(|id| service.delete(*id)))
            .await
            .into_iter()
            .collect(),
    }
}
