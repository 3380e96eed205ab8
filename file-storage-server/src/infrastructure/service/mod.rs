mod s3_broker;

pub use s3_broker::S3ObjectStorageBroker;
