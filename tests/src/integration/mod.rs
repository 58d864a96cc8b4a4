//! End-to-end lifecycle scenarios.

mod deposits;
mod exit_queue;
