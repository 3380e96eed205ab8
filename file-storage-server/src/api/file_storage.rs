use actix_easy_multipart::MultipartForm;
use actix_web::{delete, http::StatusCode, post, web, HttpResponse};
use domain_storage::{
    model::vo::UPLOAD_SUCCESS_MESSAGE,
    service::{FileStorageService, MultipartUploadService},
};

use super::dtos::{ApiResponse, DeleteFileRequest, DeleteFilesRequest, UploadFileForm};
use super::failure;

/// Upload small size file.
#[post("/upload")]
pub async fn upload_file(
    service: web::Data<dyn FileStorageService>,
    data: MultipartForm<UploadFileForm>,
) -> HttpResponse {
    let (request, content_type) = match data.into_inner().into_request().await {
        Ok(x) => x,
        Err(e) => return failure(&e),
    };
    match service.upload(request, content_type).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success(UPLOAD_SUCCESS_MESSAGE, None)),
        Err(e) => failure(&e),
    }
}

/// Upload big size file.
#[post("/upload-multipart")]
pub async fn upload_multipart_file(
    service: web::Data<dyn MultipartUploadService>,
    data: MultipartForm<UploadFileForm>,
) -> HttpResponse {
    let (request, _) = match data.into_inner().into_request().await {
        Ok(x) => x,
        Err(e) => return failure(&e),
    };
    let result = service.upload(request).await;
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    HttpResponse::build(status).json(result)
}

#[delete("/delete")]
pub async fn delete_file(
    service: web::Data<dyn FileStorageService>,
    data: web::Json<DeleteFileRequest>,
) -> HttpResponse {
    match service.delete(&data.key).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success("Delete object success!", None)),
        Err(e) => failure(&e),
    }
}

#[delete("/delete-multiple")]
pub async fn delete_multiple_files(
    service: web::Data<dyn FileStorageService>,
    data: web::Json<DeleteFilesRequest>,
) -> HttpResponse {
    match service.delete_many(data.into_inner().into_keys()).await {
        Ok(deleted) => {
            HttpResponse::Ok().json(ApiResponse::success("Delete objects success!", Some(deleted)))
        }
        Err(e) => failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::header, test, web, App};
    use anyhow::anyhow;
    use domain_storage::{
        exception::FileException,
        mock::{MockFileStorageService, MockMultipartUploadService},
        model::vo::{CompletedUpload, DeletedObjects, UploadResult},
        service::{FileStorageService, MultipartUploadService},
    };
    use serde_json::{json, Value};

    use crate::api::configure;

    const BOUNDARY: &str = "X-FILE-STORAGE-BOUNDARY";

    macro_rules! test_app {
        ($files:expr, $multipart:expr) => {{
            let files: Arc<dyn FileStorageService> = Arc::new($files);
            let multipart: Arc<dyn MultipartUploadService> = Arc::new($multipart);
            test::init_service(
                App::new()
                    .app_data(web::Data::from(files))
                    .app_data(web::Data::from(multipart))
                    .configure(configure),
            )
            .await
        }};
    }

    fn form(uri: &str, content: &[u8], key: Option<&str>) -> actix_http::Request {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
        if let Some(key) = key {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"key\"\r\nContent-Type: text/plain\r\n\r\n{key}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
            .to_request()
    }

    #[actix_web::test]
    async fn test_upload_multipart_file() {
        let mut multipart = MockMultipartUploadService::new();
        multipart
            .expect_upload()
            .withf(|request| request.key == "reports/2024/a.pdf" && request.body.len() == 50)
            .times(1)
            .returning(|_| {
                UploadResult::success(CompletedUpload {
                    location: Some("https://uploads.s3.amazonaws.com/reports/2024/a.pdf".into()),
                    ..Default::default()
                })
            });
        let app = test_app!(MockFileStorageService::new(), multipart);

        let resp = test::call_service(
            &app,
            form("/file/upload-multipart", &[b'x'; 50], Some("reports/2024/a.pdf")),
        )
        .await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Upload success!",
                "data": { "location": "https://uploads.s3.amazonaws.com/reports/2024/a.pdf" }
            })
        );
    }

    #[actix_web::test]
    async fn test_upload_multipart_failure_is_bad_gateway() {
        let mut multipart = MockMultipartUploadService::new();
        multipart
            .expect_upload()
            .returning(|_| UploadResult::failure("Access Denied"));
        let app = test_app!(MockFileStorageService::new(), multipart);

        let resp = test::call_service(&app, form("/file/upload-multipart", b"abc", None)).await;

        assert_eq!(resp.status(), 502);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": false, "message": "Access Denied" }));
    }

    #[actix_web::test]
    async fn test_upload_defaults_key_to_file_name() {
        let mut files = MockFileStorageService::new();
        files
            .expect_upload()
            .withf(|request, content_type| {
                request.key == "a.pdf"
                    && &request.body[..] == b"abc"
                    && content_type.as_deref() == Some("application/pdf")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let app = test_app!(files, MockMultipartUploadService::new());

        let resp = test::call_service(&app, form("/file/upload", b"abc", None)).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true, "message": "Upload success!" }));
    }

    #[actix_web::test]
    async fn test_empty_file_is_bad_request() {
        let mut files = MockFileStorageService::new();
        files.expect_upload().never();
        let mut multipart = MockMultipartUploadService::new();
        multipart.expect_upload().never();
        let app = test_app!(files, multipart);

        let resp = test::call_service(&app, form("/file/upload-multipart", b"", Some("a.pdf"))).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "success": false, "message": "File is empty, no need to upload." })
        );
    }

    #[actix_web::test]
    async fn test_delete_file() {
        let mut files = MockFileStorageService::new();
        files
            .expect_delete()
            .withf(|key| key == "reports/2024/a.pdf")
            .times(1)
            .returning(|_| Ok(()));
        let app = test_app!(files, MockMultipartUploadService::new());

        let req = test::TestRequest::delete()
            .uri("/file/delete")
            .set_json(json!({ "Key": "reports/2024/a.pdf" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_delete_file_failure_relays_message() {
        let mut files = MockFileStorageService::new();
        files.expect_delete().returning(|key| {
            Err(FileException::DeleteObject {
                key: key.to_string(),
                source: anyhow!("NoSuchBucket"),
            })
        });
        let app = test_app!(files, MockMultipartUploadService::new());

        let req = test::TestRequest::delete()
            .uri("/file/delete")
            .set_json(json!({ "key": "a.pdf" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 502);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": false, "message": "NoSuchBucket" }));
    }

    #[actix_web::test]
    async fn test_delete_multiple_files() {
        let mut files = MockFileStorageService::new();
        files
            .expect_delete_many()
            .withf(|keys| keys == &vec!["a.pdf".to_string(), "b.pdf".to_string()])
            .times(1)
            .returning(|keys| {
                Ok(DeletedObjects {
                    deleted: keys,
                    errors: vec![],
                })
            });
        let app = test_app!(files, MockMultipartUploadService::new());

        let req = test::TestRequest::delete()
            .uri("/file/delete-multiple")
            .set_json(json!({ "objects": [{ "key": "a.pdf" }, { "key": "b.pdf" }] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Delete objects success!",
                "data": { "deleted": ["a.pdf", "b.pdf"], "errors": [] }
            })
        );
    }
}
