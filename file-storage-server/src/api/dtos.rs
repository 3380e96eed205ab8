use actix_easy_multipart::{tempfile::Tempfile, text::Text, MultipartForm};
use domain_storage::{
    exception::{FileException, FileResult},
    model::vo::UploadRequest,
};
use serde::{Deserialize, Serialize};

/// Form of both upload routes.
#[derive(MultipartForm)]
pub struct UploadFileForm {
    pub file: Tempfile,
    /// Destination key, the uploaded file name when absent.
    pub key: Option<Text<String>>,
}

impl UploadFileForm {
    /// Read the buffered file into memory, with the content type it was sent with.
    pub async fn into_request(self) -> FileResult<(UploadRequest, Option<String>)> {
        let key = match self.key {
            Some(key) => key.0,
            None => self.file.file_name.clone().unwrap_or_default(),
        };
        if key.is_empty() {
            return Err(FileException::EmptyKey);
        }
        if self.file.size == 0 {
            return Err(FileException::EmptyFile);
        }
        let content_type = self.file.content_type.as_ref().map(ToString::to_string);
        let body = tokio::fs::read(self.file.file.path())
            .await
            .map_err(|e| FileException::InternalError { source: e.into() })?;
        Ok((UploadRequest::new(key, body), content_type))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileRequest {
    #[serde(alias = "Key")]
    pub key: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFilesRequest {
    #[serde(alias = "Objects")]
    pub objects: Vec<DeleteFileRequest>,
}

impl DeleteFilesRequest {
    pub fn into_keys(self) -> Vec<String> {
        self.objects.into_iter().map(|o| o.key).collect()
    }
}

/// Envelope of every response: `{ success, message, data? }`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: Option<T>) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(e: &FileException) -> Self {
        Self {
            success: false,
            message: e.message(),
            data: None,
        }
    }
}
