use crate::{
    exception::FileResult,
    model::vo::{CompletedUpload, DeletedObjects, PartReceipt, UploadRequest, UploadResult},
    service::{FileStorageService, MultipartUploadService, ObjectStorageBrokerService},
};
use async_trait::async_trait;
use bytes::Bytes;
use mockall::mock;

mock! {
    pub ObjectStorageBroker {}
    #[async_trait]
    impl ObjectStorageBrokerService for ObjectStorageBroker {
        async fn put_object(
            &self,
            key: &str,
            body: Bytes,
            content_type: Option<String>,
        ) -> anyhow::Result<()>;
        async fn delete_object(&self, key: &str) -> anyhow::Result<()>;
        async fn delete_objects(&self, keys: &[String]) -> anyhow::Result<DeletedObjects>;
        async fn create_multipart_upload(&self, key: &str) -> anyhow::Result<String>;
        async fn upload_part(
            &self,
            key: &str,
            upload_id: &str,
            part_number: u32,
            body: Bytes,
        ) -> anyhow::Result<String>;
        async fn complete_multipart_upload(
            &self,
            key: &str,
            upload_id: &str,
            parts: &[PartReceipt],
        ) -> anyhow::Result<CompletedUpload>;
        async fn abort_multipart_upload(&self, key: &str, upload_id: &str) -> anyhow::Result<()>;
    }
}

mock! {
    pub MultipartUploadService {}
    #[async_trait]
    impl MultipartUploadService for MultipartUploadService {
        async fn upload(&self, request: UploadRequest) -> UploadResult;
    }
}

mock! {
    pub FileStorageService {}
    #[async_trait]
    impl FileStorageService for FileStorageService {
        async fn upload(&self, request: UploadRequest, content_type: Option<String>) -> FileResult<()>;
        async fn delete(&self, key: &str) -> FileResult<()>;
        async fn delete_many(&self, keys: Vec<String>) -> FileResult<DeletedObjects>;
    }
}
