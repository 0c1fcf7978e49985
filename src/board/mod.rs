//! Kanban board client for Tasklane.
//!
//! This module is the client side of the tracker: a three-column
//! projection of the caller's tasks, a drag-gesture translation layer
//! that produces status-change intents, and a reconciler that applies
//! those intents optimistically and reconciles with the authoritative
//! task service, rolling back on failure. The module follows hexagonal
//! architecture:
//!
//! - Projection and gesture types in [`view`] and [`drag`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The reconciler in [`reconciler`]

pub mod adapters;
pub mod drag;
pub mod ports;
pub mod reconciler;
pub mod view;

#[cfg(test)]
mod tests;
