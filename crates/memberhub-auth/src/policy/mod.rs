//! Row-level authorization over member rows.
//!
//! The engine is a pure function of `(identity, operation, row)` — it keeps
//! no state of its own. The data layer consumes it in two forms: a direct
//! per-row check, and a filter predicate injected into queries so that rows
//! outside the caller's scope behave as if they do not exist.

pub mod engine;

pub use engine::{Identity, PolicyEngine, RowFilter, RowOperation};
