use std::sync::Arc;

use anyhow::anyhow;
use domain_storage::{
    exception::FileException,
    mock::MockObjectStorageBroker,
    model::vo::{DeleteObjectError, DeletedObjects, UploadRequest},
    service::FileStorageService,
};
use service_storage::FileStorageServiceImpl;

fn service(broker: MockObjectStorageBroker) -> FileStorageServiceImpl {
    FileStorageServiceImpl::builder().broker(Arc::new(broker)).build()
}

#[tokio::test]
async fn test_upload_puts_whole_body() {
    let mut broker = MockObjectStorageBroker::new();
    broker
        .expect_put_object()
        .withf(|key, body, content_type| {
            key == "avatars/u1.png"
                && &body[..] == b"png"
                && content_type.as_deref() == Some("image/png")
        })
        .times(1)
        .returning(|_, _, _| Ok(()));

    service(broker)
        .upload(
            UploadRequest::new("avatars/u1.png", &b"png"[..]),
            Some("image/png".to_string()),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_error_carries_store_message() {
    let mut broker = MockObjectStorageBroker::new();
    broker.expect_put_object().returning(|_, _, _| Err(anyhow!("NoSuchBucket")));

    let e = service(broker)
        .upload(UploadRequest::new("a.txt", &b"a"[..]), None)
        .await
        .unwrap_err();

    assert!(matches!(e, FileException::PutObject { ref key, .. } if key == "a.txt"));
    assert_eq!(e.message(), "NoSuchBucket");
}

#[tokio::test]
async fn test_upload_rejects_empty_file() {
    let mut broker = MockObjectStorageBroker::new();
    broker.expect_put_object().never();

    let e = service(broker)
        .upload(UploadRequest::new("a.txt", Vec::<u8>::new()), None)
        .await
        .unwrap_err();

    assert!(matches!(e, FileException::EmptyFile));
}

#[tokio::test]
async fn test_delete_failure_falls_back_to_default_message() {
    let mut broker = MockObjectStorageBroker::new();
    broker
        .expect_delete_object()
        .withf(|key| key == "a.txt")
        .times(1)
        .returning(|_| Err(anyhow!("")));

    let e = service(broker).delete("a.txt").await.unwrap_err();

    assert_eq!(e.message(), "File deleting is failed!");
}

#[tokio::test]
async fn test_delete_many_reports_refused_keys() {
    let mut broker = MockObjectStorageBroker::new();
    broker
        .expect_delete_objects()
        .withf(|keys| keys == ["a.txt".to_string(), "b.txt".to_string()])
        .times(1)
        .returning(|_| {
            Ok(DeletedObjects {
                deleted: vec!["a.txt".to_string()],
                errors: vec![DeleteObjectError {
                    key: "b.txt".to_string(),
                    message: "Access Denied".to_string(),
                }],
            })
        });

    let deleted = service(broker)
        .delete_many(vec!["a.txt".to_string(), "b.txt".to_string()])
        .await
        .unwrap();

    assert_eq!(deleted.deleted, vec!["a.txt"]);
    assert_eq!(deleted.errors[0].key, "b.txt");
}

#[tokio::test]
async fn test_delete_many_rejects_empty_key_list() {
    let mut broker = MockObjectStorageBroker::new();
    broker.expect_delete_objects().never();

    let e = service(broker).delete_many(vec![]).await.unwrap_err();

    assert!(matches!(e, FileException::NoObjectKeys));
    assert!(e.is_invalid_request());
}
