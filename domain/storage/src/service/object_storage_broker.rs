use async_trait::async_trait;
use bytes::Bytes;

use crate::model::vo::{CompletedUpload, DeletedObjects, PartReceipt};

/// Calls into the remote object store.
///
/// The bucket and credentials are bound when the broker is built, so every
/// call only names the object key.
#[async_trait]
pub trait ObjectStorageBrokerService: Send + Sync {
    async fn put_object(
        &self,
        key: &str,
        body: Bytes,
        content_type: Option<String>,
    ) -> anyhow::Result<()>;

    async fn delete_object(&self, key: &str) -> anyhow::Result<()>;

    async fn delete_objects(&self, keys: &[String]) -> anyhow::Result<DeletedObjects>;

    /// Start a multipart upload, return the store issued upload id.
    async fn create_multipart_upload(&self, key: &str) -> anyhow::Result<String>;

    /// Upload one part, return its ETag.
    async fn upload_part(
        &self,
        key: &str,
        upload_id: &str,
        part_number: u32,
        body: Bytes,
    ) -> anyhow::Result<String>;

    /// Finalize the upload from receipts in ascending part number order.
    async fn complete_multipart_upload(
        &self,
        key: &str,
        upload_id: &str,
        parts: &[PartReceipt],
    ) -> anyhow::Result<CompletedUpload>;

    async fn abort_multipart_upload(&self, key: &str, upload_id: &str) -> anyhow::Result<()>;
}
