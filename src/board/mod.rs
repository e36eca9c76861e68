//! Kanban task board for case-work documents.
//!
//! The board owns the authoritative task collection loaded from the
//! document backend, projects it into status columns for rendering, and
//! applies drag-completion events as optimistic status moves pushed back
//! to the backend. Columns and cards hold no state of their own; they
//! are recomputed from the owned collection on demand. The module
//! follows hexagonal architecture:
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
