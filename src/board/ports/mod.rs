//! Port contracts for the board client.
//!
//! Ports define the board's only access path to the authoritative task
//! service.

pub mod gateway;

pub use gateway::{TaskGateway, TaskGatewayError, TaskGatewayResult};
