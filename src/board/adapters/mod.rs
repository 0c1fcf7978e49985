//! Adapter implementations of the board ports.

mod service;

pub use service::ServiceTaskGateway;
