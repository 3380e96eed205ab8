use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use domain_storage::{
    exception::{FileException, FileResult},
    model::{
        entity::UploadSession,
        vo::{
            CompletedUpload, PartPlan, PartReceipt, UploadRequest, UploadResult,
            DEFAULT_MAX_PART_COUNT, DEFAULT_MIN_PART_SIZE,
        },
    },
    service::{MultipartUploadService, ObjectStorageBrokerService},
};
use futures::future::join_all;
use tracing::{debug, error, info, warn};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct MultipartUploadServiceImpl {
    broker: Arc<dyn ObjectStorageBrokerService>,
    #[builder(default = DEFAULT_MIN_PART_SIZE)]
    min_part_size: usize,
    #[builder(default = DEFAULT_MAX_PART_COUNT)]
    max_part_count: usize,
    /// Unset means a hung part stalls the upload until the store answers.
    #[builder(default)]
    part_timeout: Option<Duration>,
}

#[async_trait]
impl MultipartUploadService for MultipartUploadServiceImpl {
    async fn upload(&self, request: UploadRequest) -> UploadResult {
        let key = request.key.clone();
        match self.try_upload(request).await {
            Ok(completed) => {
                info!(key = %key, "Multipart upload completed.");
                UploadResult::success(completed)
            }
            Err(e) => {
                warn!(key = %key, "Multipart upload failed: {e:?}");
                UploadResult::failure(e.message())
            }
        }
    }
}

impl MultipartUploadServiceImpl {
    async fn try_upload(&self, request: UploadRequest) -> FileResult<CompletedUpload> {
        let UploadRequest { key, body } = request;
        if key.is_empty() {
            return Err(FileException::EmptyKey);
        }
        if body.is_empty() {
            return Err(FileException::EmptyFile);
        }

        let upload_id = self.broker.create_multipart_upload(&key).await.map_err(|source| {
            FileException::SessionStart {
                key: key.to_owned(),
                source,
            }
        })?;
        let plan = PartPlan::new(body.len(), self.min_part_size, self.max_part_count);
        let session = UploadSession::new(upload_id, key, plan);
        debug!(
            key = %session.key,
            upload_id = %session.upload_id,
            part_size = session.part_size,
            part_count = session.part_count,
            "Multipart upload started."
        );

        match self.upload_parts_and_complete(&session, &body).await {
            Ok(completed) => Ok(completed),
            Err(e) => {
                self.abort(&session).await;
                Err(e)
            }
        }
    }

    async fn upload_parts_and_complete(
        &self,
        session: &UploadSession,
        body: &Bytes,
    ) -> FileResult<CompletedUpload> {
        let receipts = self.upload_parts(session, body).await?;
        self.broker
            .complete_multipart_upload(&session.key, &session.upload_id, &receipts)
            .await
            .map_err(|source| FileException::Completion {
                upload_id: session.upload_id.to_owned(),
                source,
            })
    }

    /// Dispatch every part at once and wait for all of them.
    ///
    /// Receipts come back in part number order whatever order the parts
    /// finish in; on failure the lowest numbered failing part is reported.
    async fn upload_parts(
        &self,
        session: &UploadSession,
        body: &Bytes,
    ) -> FileResult<Vec<PartReceipt>> {
        let uploads = session
            .plan()
            .ranges(body.len())
            .map(|(part_number, range)| self.upload_part(session, part_number, body.slice(range)));
        join_all(uploads).await.into_iter().collect()
    }

    async fn upload_part(
        &self,
        session: &UploadSession,
        part_number: u32,
        body: Bytes,
    ) -> FileResult<PartReceipt> {
        let upload = self.broker.upload_part(&session.key, &session.upload_id, part_number, body);
        let result = match self.part_timeout {
            Some(timeout) => tokio::time::timeout(timeout, upload).await.map_err(|_| {
                FileException::PartTimeout {
                    upload_id: session.upload_id.to_owned(),
                    part_number,
                    timeout,
                }
            })?,
            None => upload.await,
        };
        let e_tag = result.map_err(|source| FileException::PartUpload {
            upload_id: session.upload_id.to_owned(),
            part_number,
            source,
        })?;
        Ok(PartReceipt { part_number, e_tag })
    }

    /// Roll back the remote session. Failing to do so is logged, the caller
    /// still gets the error that caused the rollback.
    async fn abort(&self, session: &UploadSession) {
        match self.broker.abort_multipart_upload(&session.key, &session.upload_id).await {
            Ok(()) => {
                warn!(key = %session.key, upload_id = %session.upload_id, "Multipart upload aborted.")
            }
            Err(source) => {
                let e = FileException::Abort {
                    upload_id: session.upload_id.to_owned(),
                    source,
                };
                error!(
                    key = %session.key,
                    upload_id = %session.upload_id,
                    "Failed to abort multipart upload, parts may be left in the store: {e}"
                );
            }
        }
    }
}
