use thiserror::Error;

/// Errors surfaced by the store layer.
///
/// Backends themselves never fail loudly (a broken disk or a full
/// `localStorage` degrades to "nothing stored"), so the only error a caller
/// sees is a record that does not serialise.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}
