pub mod config;
mod service;
mod service_provider;

pub use service_provider::ServiceProvider;
