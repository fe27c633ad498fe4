//! Integration tests grouped by training subsystem.

#[path = "training/convergence.rs"]
mod convergence;

#[path = "training/streaming.rs"]
mod streaming;
