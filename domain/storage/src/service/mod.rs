mod file_storage;
mod multipart;
mod object_storage_broker;

#[rustfmt::skip]
pub use {
    file_storage::FileStorageService,
    multipart::MultipartUploadService,
    object_storage_broker::ObjectStorageBrokerService,
};
