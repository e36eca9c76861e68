//! Unit tests for the board module.
//!
//! Tests are organised by concern: domain parsing and aggregates, view
//! projections, wire shapes, and controller drag orchestration.
