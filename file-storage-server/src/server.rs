use std::sync::Arc;

use actix_easy_multipart::{tempfile::TempfileConfig, MultipartFormConfig};
use actix_web::web;
use colored::Colorize;
use infrastructure_common::{config::build_config, telemetry::initialize_telemetry};
use tracing::{error, info};

use crate::api;
use crate::infrastructure::{config::FileStorageConfig, ServiceProvider};

pub fn run() {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(x) => x,
        Err(e) => return eprintln!("{}: {}", "Cannot build runtime".red(), e),
    };
    runtime.block_on(async_run());
}

pub async fn async_run() {
    let config: FileStorageConfig = match build_config().and_then(|c| Ok(c.try_deserialize()?)) {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };
    if let Err(e) = initialize_telemetry(config.common.telemetry()) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };

    tokio::select! {
        _ = initialize_web_host(service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().common.host().clone();
    if let Err(e) = std::fs::create_dir_all(host.upload_file_path()) {
        return error!("Cannot create upload directory {}: {}", host.upload_file_path(), e);
    }
    let bind = (host.bind_address().to_owned(), *host.bind_port());

    let server = actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .app_data(MultipartFormConfig::default().total_limit(*host.max_upload_size()))
            .app_data(TempfileConfig::default().directory(host.upload_file_path()))
            .app_data(web::Data::from(sp.file_storage_service()))
            .app_data(web::Data::from(sp.multipart_upload_service()))
            .configure(api::configure)
    });
    let server = match server.bind(bind) {
        Ok(x) => x,
        Err(e) => return error!("Cannot bind web server: {}", e),
    };
    match server.disable_signals().run().await {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into error: {}", e),
    }
}
