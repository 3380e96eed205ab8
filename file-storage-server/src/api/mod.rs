use actix_web::{http::StatusCode, web, HttpResponse};
use domain_storage::exception::FileException;

pub mod dtos;
pub mod file_storage;

/// Mount the `/file` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/file")
            .service(file_storage::upload_file)
            .service(file_storage::upload_multipart_file)
            .service(file_storage::delete_file)
            .service(file_storage::delete_multiple_files),
    );
}

fn status_of(e: &FileException) -> StatusCode {
    match e {
        e if e.is_invalid_request() => StatusCode::BAD_REQUEST,
        FileException::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_GATEWAY,
    }
}

fn failure(e: &FileException) -> HttpResponse {
    HttpResponse::build(status_of(e)).json(dtos::ApiResponse::failure(e))
}
