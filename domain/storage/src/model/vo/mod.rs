mod deleted;
mod multipart;
mod upload;

#[rustfmt::skip]
pub use {
    deleted::*,
    multipart::*,
    upload::*,
};
