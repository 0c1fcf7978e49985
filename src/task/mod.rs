//! Task management for Tasklane.
//!
//! This module is the authoritative side of the tracker: creating task
//! records for an authenticated owner, listing and filtering them by
//! status, applying partial updates, and deleting them, including the
//! cascade used when an account is removed. Ownership is enforced here;
//! a task that exists but belongs to someone else is indistinguishable
//! from one that does not exist. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
