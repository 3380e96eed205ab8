use async_trait::async_trait;

use crate::exception::FileResult;
use crate::model::vo::{DeletedObjects, UploadRequest};

/// Single-request object operations.
#[async_trait]
pub trait FileStorageService: Send + Sync {
    /// Store the whole body with one request.
    async fn upload(&self, request: UploadRequest, content_type: Option<String>)
        -> FileResult<()>;

    /// Delete one object.
    async fn delete(&self, key: &str) -> FileResult<()>;

    /// Delete several objects in one request.
    ///
    /// Keys the store refuses are reported in the result, not as an error.
    async fn delete_many(&self, keys: Vec<String>) -> FileResult<DeletedObjects>;
}
