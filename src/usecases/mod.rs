//! Usecases Layer - Concrete Service Operations
//!
//! Implements the `Computation` port for each deployable service by
//! delegating to the pure domain functions and choosing the span
//! attributes that service reports.

pub mod operations;

pub use operations::{HashOperation, LengthOperation};
