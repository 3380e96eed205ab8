use std::sync::Arc;

use async_trait::async_trait;
use domain_storage::{
    exception::{FileException, FileResult},
    model::vo::{DeletedObjects, UploadRequest},
    service::{FileStorageService, ObjectStorageBrokerService},
};
use tracing::{info, warn};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct FileStorageServiceImpl {
    broker: Arc<dyn ObjectStorageBrokerService>,
}

#[async_trait]
impl FileStorageService for FileStorageServiceImpl {
    async fn upload(
        &self,
        request: UploadRequest,
        content_type: Option<String>,
    ) -> FileResult<()> {
        let UploadRequest { key, body } = request;
        if key.is_empty() {
            return Err(FileException::EmptyKey);
        }
        if body.is_empty() {
            return Err(FileException::EmptyFile);
        }
        let size = body.len();
        self.broker
            .put_object(&key, body, content_type)
            .await
            .map_err(|source| FileException::PutObject {
                key: key.to_owned(),
                source,
            })?;
        info!(key = %key, size, "Upload success.");
        Ok(())
    }

    async fn delete(&self, key: &str) -> FileResult<()> {
        if key.is_empty() {
            return Err(FileException::EmptyKey);
        }
        self.broker.delete_object(key).await.map_err(|source| FileException::DeleteObject {
            key: key.to_owned(),
            source,
        })?;
        info!(key = %key, "Delete object success.");
        Ok(())
    }

    async fn delete_many(&self, keys: Vec<String>) -> FileResult<DeletedObjects> {
        if keys.is_empty() {
            return Err(FileException::NoObjectKeys);
        }
        if keys.iter().any(String::is_empty) {
            return Err(FileException::EmptyKey);
        }
        let deleted = self
            .broker
            .delete_objects(&keys)
            .await
            .map_err(|source| FileException::DeleteObjects { source })?;
        for error in deleted.errors.iter() {
            warn!(key = %error.key, "Object not deleted: {}", error.message);
        }
        info!(
            requested = keys.len(),
            deleted = deleted.deleted.len(),
            "Delete objects finished."
        );
        Ok(deleted)
    }
}
