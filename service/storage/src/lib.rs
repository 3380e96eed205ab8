mod file;
mod multipart;

#[rustfmt::skip]
pub use {
    file::FileStorageServiceImpl,
    multipart::MultipartUploadServiceImpl,
};
