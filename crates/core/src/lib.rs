//! # Chairtime Core
//!
//! Domain types and logic for the chairtime booking service. This crate has
//! no I/O: it defines the shared models exchanged between the API and the
//! database layer, the error taxonomy, and the slot availability calculator.

/// Slot catalog and the availability calculator
pub mod availability;
/// Domain error types
pub mod errors;
/// Shared request/response and entity models
pub mod models;
