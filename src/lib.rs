//! Tasklane: personal task tracking with an optimistic Kanban board.
//!
//! This crate implements the core of a single-user task tracker: an
//! authoritative task service on one side, a board client on the other,
//! and an optimistic-update/reconciliation protocol between them.
//!
//! # Architecture
//!
//! Tasklane follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, gateways)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, ownership, and the task service
//! - [`board`]: Board projection, drag intents, and optimistic reconciliation

pub mod board;
pub mod task;
