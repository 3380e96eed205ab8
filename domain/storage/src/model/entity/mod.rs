mod multipart;

#[rustfmt::skip]
pub use {
    multipart::UploadSession,
};
