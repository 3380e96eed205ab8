use serde::{Deserialize, Serialize};

/// Outcome of a batch delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedObjects {
    /// Keys the store reported as deleted.
    pub deleted: Vec<String>,
    /// Keys the store refused to delete.
    pub errors: Vec<DeleteObjectError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteObjectError {
    pub key: String,
    pub message: String,
}
