//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — emit/show/check dispatch.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate filesystem behavior to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_runtime_commands;
