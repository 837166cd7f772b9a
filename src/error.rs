// Datasource failures - surfaced to the host as plain messages
use thiserror::Error;

/// The one failure kind the host sees: a remote operation did not complete.
/// Transport errors and non-2xx responses collapse into the same variant;
/// the underlying cause is logged, never propagated.
#[derive(Debug, Error)]
pub enum DatasourceError {
    #[error("Unable to delete {0}")]
    DeleteFailed(String),
    #[error("Unable to search")]
    SearchFailed,
    #[error("Unable to get dashboard {0}")]
    GetFailed(String),
    #[error("Unable to save dashboard {0}")]
    SaveFailed(String),
}
