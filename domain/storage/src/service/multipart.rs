use async_trait::async_trait;

use crate::model::vo::{UploadRequest, UploadResult};

/// # Multipart upload service
///
/// Splits a buffered body into parts, uploads them concurrently and completes
/// the upload. When a part or the completion fails, the remote session is
/// aborted so no orphaned parts stay in the store.
#[async_trait]
pub trait MultipartUploadService: Send + Sync {
    /// Upload the request body under its key.
    ///
    /// Never fails: every failure is folded into an unsuccessful result whose
    /// message is the failing step's error message.
    async fn upload(&self, request: UploadRequest) -> UploadResult;
}
