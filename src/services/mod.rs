//! Pure decision logic: scoring gate, plan merger, comparison aggregator.
//!
//! Nothing in this layer performs I/O; every function is independently
//! unit-testable against its inputs alone.

pub mod aggregate;
pub mod gate;
pub mod merge;

pub use aggregate::{aggregate, compare_axes, improvement_rate};
pub use gate::{gate, passes_total, seal_assessment, GateDecision, PASS_TOTAL};
pub use merge::merge;
