//! Object storage domain: upload/delete model, exceptions and the service
//! seams implemented by `service-storage` and the server's storage broker.

pub mod exception;
pub mod model;
pub mod service;

#[cfg(feature = "mock")]
pub mod mock;
