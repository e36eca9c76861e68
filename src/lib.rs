//! Docket: kanban task board for a legal-case management suite.
//!
//! This crate provides the board subsystem of the suite's client: loading
//! case-work tasks from the document backend, projecting them into status
//! columns for rendering, and applying drag-and-drop status moves as
//! optimistic updates pushed back to the backend.
//!
//! # Architecture
//!
//! Docket follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory doubles)
//!
//! # Modules
//!
//! - [`board`]: Task board state, projections, and backend synchronization

pub mod board;
