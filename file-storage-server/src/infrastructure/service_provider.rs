use std::sync::Arc;

use domain_storage::service::{
    FileStorageService, MultipartUploadService, ObjectStorageBrokerService,
};
use service_storage::{FileStorageServiceImpl, MultipartUploadServiceImpl};

use super::{config::FileStorageConfig, service::S3ObjectStorageBroker};

/// Services shared by every worker of the web host.
pub struct ServiceProvider {
    config: FileStorageConfig,
    file_storage_service: Arc<dyn FileStorageService>,
    multipart_upload_service: Arc<dyn MultipartUploadService>,
}

impl ServiceProvider {
    pub async fn build(config: FileStorageConfig) -> anyhow::Result<Self> {
        let broker: Arc<dyn ObjectStorageBrokerService> =
            Arc::new(S3ObjectStorageBroker::new(&config.object_storage).await?);

        let file_storage_service: Arc<dyn FileStorageService> =
            Arc::new(FileStorageServiceImpl::builder().broker(broker.clone()).build());
        let multipart_upload_service: Arc<dyn MultipartUploadService> = Arc::new(
            MultipartUploadServiceImpl::builder()
                .broker(broker)
                .min_part_size(config.multipart.min_part_size)
                .max_part_count(config.multipart.max_part_count)
                .part_timeout(config.multipart.part_timeout())
                .build(),
        );

        Ok(Self {
            config,
            file_storage_service,
            multipart_upload_service,
        })
    }

    pub fn config(&self) -> &FileStorageConfig {
        &self.config
    }

    pub fn file_storage_service(&self) -> Arc<dyn FileStorageService> {
        self.file_storage_service.clone()
    }

    pub fn multipart_upload_service(&self) -> Arc<dyn MultipartUploadService> {
        self.multipart_upload_service.clone()
    }
}
