use std::time::Duration;

use domain_storage::model::vo::{DEFAULT_MAX_PART_COUNT, DEFAULT_MIN_PART_SIZE};
use infrastructure_common::config::CommonConfig;
use serde::Deserialize;

#[derive(Default, Clone, Deserialize, Debug)]
pub struct FileStorageConfig {
    #[serde(default, flatten)]
    pub common: CommonConfig,
    #[serde(default)]
    pub object_storage: ObjectStorageConfig,
    #[serde(default)]
    pub multipart: MultipartConfig,
}

/// Bucket and static credentials of the store.
#[derive(Clone, Deserialize, Debug)]
pub struct ObjectStorageConfig {
    #[serde(default)]
    pub bucket_name: String,
    #[serde(default = "ObjectStorageConfig::default_region")]
    pub region: String,
    #[serde(default)]
    pub access_key_id: String,
    #[serde(default)]
    pub secret_access_key: String,
    /// Custom endpoint of an S3 compatible store, addressed path-style.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl ObjectStorageConfig {
    fn default_region() -> String {
        "us-east-1".to_string()
    }
}

impl Default for ObjectStorageConfig {
    fn default() -> Self {
        Self {
            bucket_name: Default::default(),
            region: Self::default_region(),
            access_key_id: Default::default(),
            secret_access_key: Default::default(),
            endpoint: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct MultipartConfig {
    #[serde(default = "MultipartConfig::default_min_part_size")]
    pub min_part_size: usize,
    #[serde(default = "MultipartConfig::default_max_part_count")]
    pub max_part_count: usize,
    /// Unset waits on a part for as long as the store takes.
    #[serde(default)]
    pub part_timeout_secs: Option<u64>,
}

impl MultipartConfig {
    fn default_min_part_size() -> usize {
        DEFAULT_MIN_PART_SIZE
    }
    fn default_max_part_count() -> usize {
        DEFAULT_MAX_PART_COUNT
    }

    pub fn part_timeout(&self) -> Option<Duration> {
        self.part_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for MultipartConfig {
    fn default() -> Self {
        Self {
            min_part_size: Self::default_min_part_size(),
            max_part_count: Self::default_max_part_count(),
            part_timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> FileStorageConfig {
        config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"
host:
  bind_port: 3000
object_storage:
  bucket_name: uploads
  region: eu-west-1
  access_key_id: AKIDEXAMPLE
  secret_access_key: secret
  endpoint: http://localhost:9000
multipart:
  min_part_size: 5242880
  part_timeout_secs: 30
"#,
        );
        assert_eq!(*config.common.host().bind_port(), 3000);
        assert_eq!(config.object_storage.bucket_name, "uploads");
        assert_eq!(config.object_storage.region, "eu-west-1");
        assert_eq!(
            config.object_storage.endpoint.as_deref(),
            Some("http://localhost:9000")
        );
        assert_eq!(config.multipart.min_part_size, 5 * 1024 * 1024);
        assert_eq!(config.multipart.max_part_count, 100);
        assert_eq!(config.multipart.part_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_defaults_keep_part_policy_and_no_timeout() {
        let config = parse("object_storage:\n  bucket_name: uploads\n");
        assert_eq!(config.object_storage.region, "us-east-1");
        assert_eq!(config.object_storage.endpoint, None);
        assert_eq!(config.multipart.min_part_size, 100 * 1024 * 1024);
        assert_eq!(config.multipart.part_timeout(), None);
    }
}
