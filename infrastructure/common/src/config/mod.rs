use getset::Getters;
use serde::*;

use crate::telemetry::TelemetryConfig;

/// Environment variables overriding the config files, e.g.
/// `FILE_STORAGE__HOST__BIND_PORT=9000`.
pub const ENV_PREFIX: &str = "FILE_STORAGE";

#[derive(Default, Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct CommonConfig {
    #[serde(default)]
    telemetry: TelemetryConfig,
    #[serde(default)]
    host: HostConfig,
}

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_address")]
    bind_address: String,
    #[serde(default = "HostConfig::default_port")]
    bind_port: u16,
    /// Directory multipart form files are buffered in.
    #[serde(default = "HostConfig::default_upload_path")]
    upload_file_path: String,
    /// Total size limit of one multipart form, in bytes.
    #[serde(default = "HostConfig::default_max_upload_size")]
    max_upload_size: usize,
}
impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: Self::default_address(),
            bind_port: Self::default_port(),
            upload_file_path: Self::default_upload_path(),
            max_upload_size: Self::default_max_upload_size(),
        }
    }
}
impl HostConfig {
    fn default_address() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
    fn default_upload_path() -> String {
        "tempdir".to_string()
    }
    fn default_max_upload_size() -> usize {
        100 * 1024 * 1024
    }
}

pub fn build_config() -> anyhow::Result<config::Config> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = config::Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for arg in args {
        if arg.ends_with("yaml") || arg.ends_with("yml") {
            config = config.add_source(
                config::File::from(std::path::Path::new(arg.as_str()))
                    .format(config::FileFormat::Yaml)
                    .required(false),
            );
        }
    }
    config = config.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );
    Ok(config.build()?)
}
