use anyhow::{anyhow, Context};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    primitives::ByteStream,
    types::{CompletedMultipartUpload, CompletedPart, Delete, ObjectIdentifier},
    Client,
};
use aws_types::region::Region;
use bytes::Bytes;
use domain_storage::{
    model::vo::{CompletedUpload, DeleteObjectError, DeletedObjects, PartReceipt},
    service::ObjectStorageBrokerService,
};

use crate::infrastructure::config::ObjectStorageConfig;

/// Object storage broker over the AWS S3 API.
///
/// One client is built at startup and shared by every request.
pub struct S3ObjectStorageBroker {
    client: Client,
    bucket: String,
}

impl S3ObjectStorageBroker {
    pub async fn new(config: &ObjectStorageConfig) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !config.bucket_name.is_empty(),
            "object_storage.bucket_name is not configured"
        );
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "file-storage-server",
        );
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket_name.to_owned(),
        })
    }
}

/// Keep the store's own message when there is one, it is what callers see.
fn store_error<E, R>(e: SdkError<E, R>) -> anyhow::Error
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match e.as_service_error().and_then(|service_error| service_error.message()) {
        Some(message) => anyhow!(message.to_owned()),
        None => anyhow!(DisplayErrorContext(&e).to_string()),
    }
}

fn s3_part_number(part_number: u32) -> anyhow::Result<i32> {
    i32::try_from(part_number).with_context(|| format!("part number {part_number} is too large"))
}

#[async_trait]
impl ObjectStorageBrokerService for S3ObjectStorageBroker {
    async fn put_object(
        &self,
        key: &str,
        body: Bytes,
        content_type: Option<String>,
    ) -> anyhow::Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .set_content_type(content_type)
            .send()
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> anyhow::Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn delete_objects(&self, keys: &[String]) -> anyhow::Result<DeletedObjects> {
        let objects = keys
            .iter()
            .map(|key| ObjectIdentifier::builder().key(key).build())
            .collect::<Result<Vec<_>, _>>()?;
        let delete = Delete::builder().set_objects(Some(objects)).build()?;
        let output = self
            .client
            .delete_objects()
            .bucket(&self.bucket)
            .delete(delete)
            .send()
            .await
            .map_err(store_error)?;

        Ok(DeletedObjects {
            deleted: output
                .deleted()
                .iter()
                .filter_map(|deleted| deleted.key().map(str::to_owned))
                .collect(),
            errors: output
                .errors()
                .iter()
                .map(|error| DeleteObjectError {
                    key: error.key().unwrap_or_default().to_owned(),
                    message: error.message().unwrap_or_default().to_owned(),
                })
                .collect(),
        })
    }

    async fn create_multipart_upload(&self, key: &str) -> anyhow::Result<String> {
        let output = self
            .client
            .create_multipart_upload()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(store_error)?;
        output
            .upload_id()
            .map(str::to_owned)
            .ok_or_else(|| anyhow!("CreateMultipartUpload returned no upload id for {key}"))
    }

    async fn upload_part(
        &self,
        key: &str,
        upload_id: &str,
        part_number: u32,
        body: Bytes,
    ) -> anyhow::Result<String> {
        let output = self
            .client
            .upload_part()
            .bucket(&self.bucket)
            .key(key)
            .upload_id(upload_id)
            .part_number(s3_part_number(part_number)?)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(store_error)?;
        output
            .e_tag()
            .map(str::to_owned)
            .ok_or_else(|| anyhow!("UploadPart returned no ETag for part {part_number}"))
    }

    async fn complete_multipart_upload(
        &self,
        key: &str,
        upload_id: &str,
        parts: &[PartReceipt],
    ) -> anyhow::Result<CompletedUpload> {
        let parts = parts
            .iter()
            .map(|part| {
                Ok::<_, anyhow::Error>(
                    CompletedPart::builder()
                        .part_number(s3_part_number(part.part_number)?)
                        .e_tag(&part.e_tag)
                        .build(),
                )
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let output = self
            .client
            .complete_multipart_upload()
            .bucket(&self.bucket)
            .key(key)
            .upload_id(upload_id)
            .multipart_upload(CompletedMultipartUpload::builder().set_parts(Some(parts)).build())
            .send()
            .await
            .map_err(store_error)?;

        Ok(CompletedUpload {
            location: output.location().map(str::to_owned),
            bucket: output.bucket().map(str::to_owned),
            key: output.key().map(str::to_owned),
            e_tag: output.e_tag().map(str::to_owned),
            version_id: output.version_id().map(str::to_owned),
        })
    }

    async fn abort_multipart_upload(&self, key: &str, upload_id: &str) -> anyhow::Result<()> {
        self.client
            .abort_multipart_upload()
            .bucket(&self.bucket)
            .key(key)
            .upload_id(upload_id)
            .send()
            .await
            .map_err(store_error)?;
        Ok(())
    }
}
