use std::time::Duration;

pub type FileResult<T> = Result<T, FileException>;

/// Remote-step variants display the store's own error message, so that the
/// HTTP layer can relay it verbatim.
#[derive(Debug, thiserror::Error)]
pub enum FileException {
    #[error("Object key must not be empty.")]
    EmptyKey,

    #[error("File is empty, no need to upload.")]
    EmptyFile,

    #[error("No object keys to delete.")]
    NoObjectKeys,

    #[error("{source}")]
    SessionStart {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{source}")]
    PartUpload {
        upload_id: String,
        part_number: u32,
        #[source]
        source: anyhow::Error,
    },

    #[error("Part {part_number} of upload {upload_id} timed out after {timeout:?}.")]
    PartTimeout {
        upload_id: String,
        part_number: u32,
        timeout: Duration,
    },

    #[error("{source}")]
    Completion {
        upload_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{source}")]
    Abort {
        upload_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{source}")]
    PutObject {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{source}")]
    DeleteObject {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{source}")]
    DeleteObjects {
        #[source]
        source: anyhow::Error,
    },

    #[error("File internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl FileException {
    /// Message relayed to the caller. Falls back to a per-operation message
    /// when the underlying error carries none.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if !message.trim().is_empty() {
            return message;
        }
        match self {
            Self::PutObject { .. } => "File uploading is failed!",
            Self::DeleteObject { .. } => "File deleting is failed!",
            Self::DeleteObjects { .. } => "Multiple files deleting is failed!",
            _ => "Multipart file uploading is failed!",
        }
        .to_string()
    }

    /// Whether the request itself was invalid, as opposed to the store failing.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::EmptyKey | Self::EmptyFile | Self::NoObjectKeys)
    }
}

impl From<anyhow::Error> for FileException {
    fn from(e: anyhow::Error) -> Self {
        FileException::InternalError { source: e }
    }
}
